use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Only fatal conditions live here. Recoverable ones (a single criterion
/// evaluation failing, an unreadable cache entry) are logged and absorbed
/// inside the pipeline and never reach this enum.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("could not extract job requirements")]
    RequirementsExtraction,

    #[error("could not unify resume")]
    Unification,

    #[error("LLM error: {0}")]
    Llm(String),

    /// Single orchestrator-boundary wrapper: any fatal stage failure inside
    /// the match pipeline surfaces as this, carrying the original message.
    #[error("Analysis failed: {0}")]
    Analysis(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Extraction(msg) => (StatusCode::BAD_REQUEST, "EXTRACTION_ERROR", msg.clone()),
            AppError::RequirementsExtraction => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "REQUIREMENTS_EXTRACTION_ERROR",
                self.to_string(),
            ),
            AppError::Unification => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNIFICATION_ERROR",
                self.to_string(),
            ),
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LLM_ERROR",
                    "An AI processing error occurred".to_string(),
                )
            }
            AppError::Analysis(msg) => {
                tracing::error!("Analysis error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "ANALYSIS_FAILED",
                    msg.clone(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
