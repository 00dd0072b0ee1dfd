//! Multipart upload handling for the analysis endpoint.

use std::io::Write;
use std::path::Path;

use axum::extract::{Multipart, State};
use axum::Json;
use tempfile::NamedTempFile;

use crate::errors::AppError;
use crate::extract::extract_text;
use crate::matching::analyzer::DetailedMatchResult;
use crate::state::AppState;

/// POST /api/v1/analyze_resume
///
/// Accepts two file uploads (`resume_file`, `job_description_file`),
/// extracts their text and runs the full matching pipeline.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<DetailedMatchResult>, AppError> {
    let mut resume_file: Option<NamedTempFile> = None;
    let mut job_desc_file: Option<NamedTempFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart payload: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("could not read upload '{name}': {e}")))?;

        match name.as_str() {
            "resume_file" => resume_file = Some(save_upload(&file_name, &data)?),
            "job_description_file" => job_desc_file = Some(save_upload(&file_name, &data)?),
            _ => {}
        }
    }

    let resume_file =
        resume_file.ok_or_else(|| AppError::Validation("resume_file is required".to_string()))?;
    let job_desc_file = job_desc_file
        .ok_or_else(|| AppError::Validation("job_description_file is required".to_string()))?;

    let resume_text = extract_text(resume_file.path())?;
    let job_description = extract_text(job_desc_file.path())?;

    let result = state.analyzer.analyze(&resume_text, &job_description).await?;
    Ok(Json(result))
}

/// Writes an upload to a temp file, keeping the original extension so the
/// extractor can pick the right parser. The file is removed on drop.
fn save_upload(file_name: &str, data: &[u8]) -> Result<NamedTempFile, AppError> {
    let suffix = Path::new(file_name)
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    let mut tmp = tempfile::Builder::new()
        .suffix(&suffix)
        .tempfile()
        .map_err(|e| AppError::Internal(anyhow::anyhow!("could not create temp file: {e}")))?;
    tmp.write_all(data)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("could not write upload: {e}")))?;
    Ok(tmp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_upload_preserves_extension() {
        let tmp = save_upload("resume.pdf", b"%PDF-1.4").unwrap();
        assert!(tmp.path().to_string_lossy().ends_with(".pdf"));
    }

    #[test]
    fn save_upload_without_extension_still_works() {
        let tmp = save_upload("resume", b"plain text").unwrap();
        assert_eq!(std::fs::read(tmp.path()).unwrap(), b"plain text");
    }
}
