//! Multipart form parsing shared by the analyzer and job-matching uploads.

use std::collections::HashMap;

use axum::extract::multipart::{Multipart, MultipartError};
use axum::http::StatusCode;
use bytes::Bytes;

use crate::errors::AppError;

/// Form field carrying the resume file.
pub const RESUME_FIELD: &str = "resume";

#[derive(Debug)]
pub struct UploadedFile {
    pub file_name: String,
    pub bytes: Bytes,
}

#[derive(Debug, Default)]
pub struct UploadForm {
    pub resume: Option<UploadedFile>,
    pub fields: HashMap<String, String>,
}

impl UploadForm {
    /// Trimmed text field; `None` when absent or blank.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn require_resume(&mut self) -> Result<UploadedFile, AppError> {
        self.resume
            .take()
            .filter(|file| !file.bytes.is_empty())
            .ok_or_else(|| AppError::Validation(format!("{RESUME_FIELD}: This field is required.")))
    }
}

fn map_multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(e.body_text())
    }
}

/// Reads every part. File parts other than `resume` are ignored.
pub async fn read_upload_form(mut multipart: Multipart) -> Result<UploadForm, AppError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart.next_field().await.map_err(map_multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();
        match field.file_name().map(str::to_string) {
            Some(file_name) if name == RESUME_FIELD => {
                let bytes = field.bytes().await.map_err(map_multipart_error)?;
                form.resume = Some(UploadedFile { file_name, bytes });
            }
            Some(_) => {}
            None => {
                let value = field.text().await.map_err(map_multipart_error)?;
                form.fields.insert(name, value);
            }
        }
    }

    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_trims_and_filters_blank() {
        let mut form = UploadForm::default();
        form.fields
            .insert("job_description".to_string(), "  Rust dev  ".to_string());
        form.fields.insert("note".to_string(), "   ".to_string());
        assert_eq!(form.text("job_description"), Some("Rust dev"));
        assert_eq!(form.text("note"), None);
        assert_eq!(form.text("missing"), None);
    }

    #[test]
    fn test_require_resume_rejects_empty_file() {
        let mut form = UploadForm {
            resume: Some(UploadedFile {
                file_name: "cv.pdf".to_string(),
                bytes: Bytes::new(),
            }),
            ..Default::default()
        };
        assert!(matches!(form.require_resume(), Err(AppError::Validation(_))));
    }
}
