//! Axum route handlers for job matching.

use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::{extract_or_empty, file_extension, JOB_MATCH_EXTENSIONS};
use crate::matching::repository::{get_job_match, insert_job_match, NewJobMatch};
use crate::matching::{match_skills, MatchReport};
use crate::state::AppState;
use crate::storage::resume_key;
use crate::upload::read_upload_form;

pub const JOB_DESCRIPTION_FIELD: &str = "job_description";

/// Longest job description accepted. Matching cost grows with every candidate phrase.
pub const MAX_JOB_DESCRIPTION_CHARS: usize = 20_000;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateJobMatchResponse {
    pub id: Uuid,
    pub resume_name: String,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JobMatchResult {
    pub job_match_id: Uuid,
    pub resume_name: String,
    pub job_description: String,
    pub uploaded_at: DateTime<Utc>,
    #[serde(flatten)]
    pub report: MatchReport,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/job-matches
///
/// Validates the form (resume file + job description), stores the file and records the
/// submission. Analysis happens when the result is requested.
pub async fn handle_create_job_match(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<CreateJobMatchResponse>), AppError> {
    let mut form = read_upload_form(multipart).await?;

    let job_description = form
        .text(JOB_DESCRIPTION_FIELD)
        .map(str::to_string)
        .ok_or_else(|| {
            AppError::Validation(format!("{JOB_DESCRIPTION_FIELD}: This field is required."))
        })?;
    let length = job_description.chars().count();
    if length > MAX_JOB_DESCRIPTION_CHARS {
        return Err(AppError::Validation(format!(
            "{JOB_DESCRIPTION_FIELD}: Ensure this value has at most {MAX_JOB_DESCRIPTION_CHARS} characters (it has {length})."
        )));
    }
    let resume = form.require_resume()?;

    let extension = file_extension(&resume.file_name);
    if !JOB_MATCH_EXTENSIONS.contains(&extension.as_str()) {
        return Err(AppError::UnsupportedFormat(format!(
            "'{}' is not a PDF, DOC or DOCX file",
            resume.file_name
        )));
    }

    let key = resume_key(&extension);
    state.files.put(&key, resume.bytes).await?;

    let row = insert_job_match(
        &state.db,
        NewJobMatch {
            resume_name: &resume.file_name,
            resume_key: &key,
            job_description: &job_description,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateJobMatchResponse {
            id: row.id,
            resume_name: row.resume_name,
            uploaded_at: row.uploaded_at,
        }),
    ))
}

/// GET /api/v1/job-matches/:id
///
/// Re-extracts the stored resume and recomputes the skill match. Extraction failures
/// degrade to empty resume text rather than failing the request.
pub async fn handle_job_match_result(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<JobMatchResult>, AppError> {
    let job_match = get_job_match(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job match {id} not found")))?;

    let bytes = state.files.get(&job_match.resume_key).await?;
    let resume_text = extract_or_empty(bytes, file_extension(&job_match.resume_key)).await;
    debug!(
        "Job match {id}: {} chars of resume text",
        resume_text.chars().count()
    );

    let taxonomy = Arc::clone(&state.taxonomy);
    let job_description = job_match.job_description.clone();
    let report = tokio::task::spawn_blocking(move || {
        match_skills(&resume_text, &job_description, &taxonomy)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in matching: {e}")))?;

    Ok(Json(JobMatchResult {
        job_match_id: job_match.id,
        resume_name: job_match.resume_name,
        job_description: job_match.job_description,
        uploaded_at: job_match.uploaded_at,
        report,
    }))
}
