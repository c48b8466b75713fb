//! Axum route handlers for the resume analyzer.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::analysis::{analyze_resume, ResumeAnalysis};
use crate::errors::AppError;
use crate::extraction::{extract_or_empty, file_extension, ANALYZER_EXTENSIONS};
use crate::state::AppState;
use crate::storage::resume_key;
use crate::upload::read_upload_form;

pub const INVALID_FORMAT_MESSAGE: &str = "Invalid file format. Upload PDF or DOCX.";
pub const NO_RESUME_MESSAGE: &str = "No resume uploaded.";

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub session_id: Uuid,
    pub file_name: String,
    pub stored_as: String,
    pub extracted_chars: usize,
}

/// POST /api/v1/analyzer/upload
///
/// Stores the file, extracts its text into a session and returns the session id to pass
/// to the analyze endpoint.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponse>), AppError> {
    let mut form = read_upload_form(multipart).await?;
    let resume = form.require_resume()?;

    let extension = file_extension(&resume.file_name);
    if !ANALYZER_EXTENSIONS.contains(&extension.as_str()) {
        return Err(AppError::UnsupportedFormat(INVALID_FORMAT_MESSAGE.to_string()));
    }

    let key = resume_key(&extension);
    state.files.put(&key, resume.bytes.clone()).await?;

    let text = extract_or_empty(resume.bytes, extension).await;
    let session_id = state.sessions.store_text(&text).await?;

    info!(
        "Resume '{}' stored as {key} ({} backend), session {session_id}",
        resume.file_name,
        state.files.backend()
    );

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            session_id,
            file_name: resume.file_name,
            stored_as: key,
            extracted_chars: text.chars().count(),
        }),
    ))
}

/// GET /api/v1/analyzer/analyze/:session_id
///
/// Runs the full analysis over the session's resume text. Recomputed on every call.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<ResumeAnalysis>, AppError> {
    let text = state
        .sessions
        .load_text(session_id)
        .await?
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::NotFound(NO_RESUME_MESSAGE.to_string()))?;

    let analysis = tokio::task::spawn_blocking(move || analyze_resume(&text))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in analysis: {e}")))?;

    Ok(Json(analysis))
}
