use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::job_match::JobMatchRow;

/// Fields for a new job-match submission.
pub struct NewJobMatch<'a> {
    pub resume_name: &'a str,
    pub resume_key: &'a str,
    pub job_description: &'a str,
}

/// Inserts a submission. Rows are append-only; there is no update path.
pub async fn insert_job_match(
    pool: &PgPool,
    new_match: NewJobMatch<'_>,
) -> Result<JobMatchRow, sqlx::Error> {
    let row = sqlx::query_as::<_, JobMatchRow>(
        r#"
        INSERT INTO job_matches (resume_name, resume_key, job_description)
        VALUES ($1, $2, $3)
        RETURNING id, resume_name, resume_key, job_description, uploaded_at
        "#,
    )
    .bind(new_match.resume_name)
    .bind(new_match.resume_key)
    .bind(new_match.job_description)
    .fetch_one(pool)
    .await?;

    info!("Job match {} created for '{}'", row.id, row.resume_name);
    Ok(row)
}

pub async fn get_job_match(pool: &PgPool, id: Uuid) -> Result<Option<JobMatchRow>, sqlx::Error> {
    sqlx::query_as::<_, JobMatchRow>(
        "SELECT id, resume_name, resume_key, job_description, uploaded_at FROM job_matches WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}
