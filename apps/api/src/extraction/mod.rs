//! Text extraction: turns uploaded resume bytes into plain text.
//!
//! Dispatch is by file extension only. Unsupported extensions are not an error: they
//! produce `ExtractedText::Unsupported`, whose text is the `UNSUPPORTED_FORMAT` sentinel.
//! Parsing is CPU-bound; async callers go through `extract_blocking`.

pub mod docx;
pub mod pdf;

use std::path::Path;

use thiserror::Error;
use tracing::{debug, warn};

/// Text reported for any extension the extractors do not handle.
pub const UNSUPPORTED_FORMAT: &str = "Unsupported file format";

/// Extensions accepted by the resume analyzer upload.
pub const ANALYZER_EXTENSIONS: &[&str] = &[".pdf", ".docx"];

/// Extensions accepted by the job-matching form. `.doc` is routed to the DOCX reader.
pub const JOB_MATCH_EXTENSIONS: &[&str] = &[".pdf", ".doc", ".docx"];

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("DOCX archive error: {0}")]
    DocxArchive(#[from] zip::result::ZipError),

    #[error("DOCX read error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Extraction task aborted: {0}")]
    Aborted(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExtractedText {
    Text(String),
    Unsupported,
}

impl ExtractedText {
    pub fn into_string(self) -> String {
        match self {
            ExtractedText::Text(text) => text,
            ExtractedText::Unsupported => UNSUPPORTED_FORMAT.to_string(),
        }
    }
}

/// Lowercase extension with its leading dot (`"CV.PDF"` → `".pdf"`), or `""`.
pub fn file_extension(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
        .unwrap_or_default()
}

/// Extracts text from `bytes`, choosing the reader from `extension` (as returned by
/// `file_extension`).
pub fn extract_text(bytes: &[u8], extension: &str) -> Result<ExtractedText, ExtractionError> {
    match extension {
        ".pdf" => pdf::extract_pdf_text(bytes).map(ExtractedText::Text),
        ".docx" | ".doc" => docx::extract_docx_text(bytes).map(ExtractedText::Text),
        other => {
            debug!("No extractor for extension '{other}'");
            Ok(ExtractedText::Unsupported)
        }
    }
}

/// Runs `extract_text` on the blocking pool. A panic inside a parser surfaces as
/// `ExtractionError::Aborted` rather than tearing down the request.
pub async fn extract_blocking(
    bytes: bytes::Bytes,
    extension: String,
) -> Result<ExtractedText, ExtractionError> {
    tokio::task::spawn_blocking(move || extract_text(&bytes, &extension))
        .await
        .map_err(|e| ExtractionError::Aborted(e.to_string()))?
}

/// Call-site fallback: extraction failures degrade to empty text.
pub async fn extract_or_empty(bytes: bytes::Bytes, extension: String) -> String {
    match extract_blocking(bytes, extension).await {
        Ok(text) => text.into_string(),
        Err(e) => {
            warn!("Error extracting resume text: {e}");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_extension_lowercases() {
        assert_eq!(file_extension("Jane_Doe_CV.PDF"), ".pdf");
        assert_eq!(file_extension("resume.docx"), ".docx");
    }

    #[test]
    fn test_file_extension_missing() {
        assert_eq!(file_extension("README"), "");
        assert_eq!(file_extension(""), "");
    }

    #[test]
    fn test_unsupported_extension_yields_sentinel() {
        let result = extract_text(b"plain text resume", ".txt").unwrap();
        assert_eq!(result, ExtractedText::Unsupported);
        assert_eq!(result.into_string(), "Unsupported file format");
    }

    #[test]
    fn test_unsupported_extension_never_parses_bytes() {
        let garbage = [0xffu8, 0x00, 0x13, 0x37];
        for ext in ["", ".rtf", ".odt", ".png"] {
            let result = extract_text(&garbage, ext).unwrap();
            assert_eq!(result.into_string(), UNSUPPORTED_FORMAT);
        }
    }

    #[test]
    fn test_corrupt_docx_is_error() {
        assert!(extract_text(b"not a zip archive", ".docx").is_err());
    }

    #[test]
    fn test_legacy_doc_routes_to_docx_reader() {
        // Binary .doc files are not zip archives, so the DOCX reader rejects them.
        assert!(extract_text(b"\xd0\xcf\x11\xe0 legacy", ".doc").is_err());
    }

    #[tokio::test]
    async fn test_extract_or_empty_degrades_on_failure() {
        let text = extract_or_empty(bytes::Bytes::from_static(b"broken"), ".docx".to_string()).await;
        assert_eq!(text, "");
    }

    #[tokio::test]
    async fn test_invalid_pdf_is_error_not_crash() {
        let result =
            extract_blocking(bytes::Bytes::from_static(b"%PDF-garbage"), ".pdf".to_string()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_extract_or_empty_keeps_sentinel() {
        let text = extract_or_empty(bytes::Bytes::from_static(b"abc"), ".txt".to_string()).await;
        assert_eq!(text, UNSUPPORTED_FORMAT);
    }
}
