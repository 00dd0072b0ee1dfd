//! Resume normalization and metadata extraction.
//!
//! Both operations go through the gateway as plain text: the unified resume
//! is opaque markdown fed into later prompts, never a parsed object.

use tracing::error;

use crate::errors::AppError;
use crate::llm_client::{LlmError, ModelClient, RunOptions};
use crate::matching::prompts::{RESUME_UNIFY_TEMPLATE, RESUME_WEBSITE_TEMPLATE};

const UNIFY_MAX_TOKENS: u32 = 4092;
const WEBSITE_MAX_TOKENS: u32 = 100;

/// Normalizes raw resume text into the canonical markdown section layout.
/// An empty normalization result is fatal for the request.
pub async fn unify_resume(resume_text: &str, client: &ModelClient) -> Result<String, AppError> {
    let prompt = RESUME_UNIFY_TEMPLATE.replace("{resume_text}", resume_text);
    let unified = client
        .run_text(
            &prompt,
            RunOptions {
                max_tokens: Some(UNIFY_MAX_TOKENS),
                ..Default::default()
            },
        )
        .await
        .map_err(|e| {
            error!("resume unification failed: {e}");
            AppError::Unification
        })?;

    let unified = unified.trim();
    if unified.is_empty() {
        return Err(AppError::Unification);
    }
    Ok(unified.to_string())
}

/// Extracts the candidate's professional website URL, if any.
/// An empty model response means "no website"; a backend failure propagates.
pub async fn extract_website(
    resume_text: &str,
    client: &ModelClient,
) -> Result<Option<String>, LlmError> {
    let prompt = RESUME_WEBSITE_TEMPLATE.replace("{resume_text}", resume_text);
    let url = client
        .run_text(
            &prompt,
            RunOptions {
                max_tokens: Some(WEBSITE_MAX_TOKENS),
                ..Default::default()
            },
        )
        .await?;

    let url = url.trim();
    Ok(if url.is_empty() {
        None
    } else {
        Some(url.to_string())
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::llm_client::testing::{client_with_backend, ScriptedBackend};

    #[tokio::test]
    async fn unify_returns_trimmed_model_output() {
        let dir = tempfile::tempdir().unwrap();
        let client = client_with_backend(
            Arc::new(ScriptedBackend::fixed("\n# Jane Doe\n## Backend Engineer\n")),
            dir.path(),
        );

        let unified = unify_resume("raw resume", &client).await.unwrap();
        assert_eq!(unified, "# Jane Doe\n## Backend Engineer");
    }

    #[tokio::test]
    async fn empty_unification_output_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let client = client_with_backend(Arc::new(ScriptedBackend::fixed("   \n  ")), dir.path());

        let result = unify_resume("raw resume", &client).await;
        assert!(matches!(result, Err(AppError::Unification)));
    }

    #[tokio::test]
    async fn website_is_trimmed_and_wrapped() {
        let dir = tempfile::tempdir().unwrap();
        let client = client_with_backend(
            Arc::new(ScriptedBackend::fixed("  https://jane.dev \n")),
            dir.path(),
        );

        let website = extract_website("resume", &client).await.unwrap();
        assert_eq!(website.as_deref(), Some("https://jane.dev"));
    }

    #[tokio::test]
    async fn empty_website_response_means_none() {
        let dir = tempfile::tempdir().unwrap();
        let client = client_with_backend(Arc::new(ScriptedBackend::fixed("")), dir.path());

        let website = extract_website("resume", &client).await.unwrap();
        assert_eq!(website, None);
    }
}
