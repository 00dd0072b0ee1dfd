//! Document-to-text extraction for uploaded and local files.
//! PDFs go through `pdf-extract`; anything else is read as UTF-8 text.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::errors::AppError;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("could not read {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not extract text from {0}")]
    Pdf(String),

    #[error("no text content in {0}")]
    Empty(String),
}

impl From<ExtractError> for AppError {
    fn from(e: ExtractError) -> Self {
        AppError::Extraction(e.to_string())
    }
}

pub fn extract_text(path: &Path) -> Result<String, ExtractError> {
    let is_pdf = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

    let text = if is_pdf {
        pdf_extract::extract_text(path)
            .map_err(|e| ExtractError::Pdf(format!("{}: {e}", path.display())))?
    } else {
        fs::read_to_string(path).map_err(|e| ExtractError::Unreadable {
            path: path.display().to_string(),
            source: e,
        })?
    };

    if text.trim().is_empty() {
        return Err(ExtractError::Empty(path.display().to_string()));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn plain_text_file_is_read_verbatim() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        write!(file, "Senior Rust Engineer wanted").unwrap();

        let text = extract_text(file.path()).unwrap();
        assert_eq!(text, "Senior Rust Engineer wanted");
    }

    #[test]
    fn empty_file_is_an_error() {
        let file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        let result = extract_text(file.path());
        assert!(matches!(result, Err(ExtractError::Empty(_))));
    }

    #[test]
    fn missing_file_is_unreadable() {
        let result = extract_text(Path::new("/nonexistent/resume.txt"));
        assert!(matches!(result, Err(ExtractError::Unreadable { .. })));
    }
}
