use crate::matching::analyzer::Analyzer;

/// Shared application state injected into route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Analyzer,
}
