use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A submitted resume/job-description pair. Immutable once inserted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobMatchRow {
    pub id: Uuid,
    /// Original file name as uploaded.
    pub resume_name: String,
    /// Key of the stored file in the configured `FileStore`.
    pub resume_key: String,
    pub job_description: String,
    pub uploaded_at: DateTime<Utc>,
}
