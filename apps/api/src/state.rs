use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::session::SessionStore;
use crate::skills::SkillsTaxonomy;
use crate::storage::FileStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Extracted resume text between upload and analysis.
    pub sessions: SessionStore,
    /// Pluggable file store. Local directory or S3, chosen by STORAGE_BACKEND.
    pub files: Arc<dyn FileStore>,
    /// Loaded once at startup; read-only for the process lifetime.
    pub taxonomy: Arc<SkillsTaxonomy>,
    pub config: Config,
}
