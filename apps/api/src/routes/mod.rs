pub mod analyze;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/ping", get(health::ping_handler))
        .route("/api/v1/analyze_resume", post(analyze::handle_analyze_resume))
        .with_state(state)
}
