mod analysis;
mod config;
mod db;
mod errors;
mod extraction;
mod matching;
mod models;
mod routes;
mod session;
mod skills;
mod state;
mod storage;
mod upload;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::{create_pool, run_migrations};
use crate::routes::build_router;
use crate::session::SessionStore;
use crate::skills::SkillsTaxonomy;
use crate::state::AppState;
use crate::storage::build_file_store;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;
    run_migrations(&db).await?;

    // Initialize Redis-backed sessions
    let redis = redis::Client::open(config.redis_url.clone())?;
    let sessions = SessionStore::new(redis, config.session_ttl_secs);
    info!(
        "Session store initialized (ttl {}s)",
        config.session_ttl_secs
    );

    // Initialize file storage (local directory or S3 / MinIO)
    let files = build_file_store(&config.storage).await?;
    info!("File store initialized ({} backend)", files.backend());

    // Skills taxonomy: an unreadable file leaves the taxonomy empty, it never aborts startup
    let taxonomy = Arc::new(SkillsTaxonomy::load(&config.skills_db_path));

    let state = AppState {
        db,
        sessions,
        files,
        taxonomy,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
