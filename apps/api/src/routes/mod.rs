pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analyzer;
use crate::matching::handlers as job_matches;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        // Resume analyzer
        .route(
            "/api/v1/analyzer/upload",
            post(analyzer::handle_upload_resume),
        )
        .route(
            "/api/v1/analyzer/analyze/:session_id",
            get(analyzer::handle_analyze_resume),
        )
        // Job matching
        .route(
            "/api/v1/job-matches",
            post(job_matches::handle_create_job_match),
        )
        .route(
            "/api/v1/job-matches/:id",
            get(job_matches::handle_job_match_result),
        )
        .layer(body_limit)
        .with_state(state)
}
