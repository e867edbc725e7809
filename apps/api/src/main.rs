mod catalog;
mod config;
mod db;
mod errors;
mod feed;
mod models;
mod profile;
mod recommend;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::db::{create_pool, ensure_schema};
use crate::feed::{AdzunaFeed, DisabledFeed, JobFeed};
use crate::profile::store::PgProfileStore;
use crate::routes::build_router;
use crate::state::AppState;

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

    info!("Starting Navigator API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;
    ensure_schema(&db).await?;

    // Load catalogs (bundled unless CATALOG_PATH is set)
    let catalog = Catalog::load(config.catalog_path.as_deref())?;

    // Initialize job feed
    let feed = build_feed(&config)?;

    let state = AppState {
        profiles: Arc::new(PgProfileStore::new(db)),
        feed,
        catalog: Arc::new(catalog),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Adzuna when both credentials are configured, otherwise a feed that always returns nothing.
fn build_feed(config: &Config) -> Result<Arc<dyn JobFeed>> {
    match &config.feed_credentials {
        Some(credentials) => {
            let feed = AdzunaFeed::new(
                config.feed_base_url.clone(),
                credentials.app_id.clone(),
                credentials.app_key.clone(),
                config.feed_timeout,
            )
            .context("Failed to build job feed HTTP client")?;
            info!(
                "Job feed initialized ({}, country {})",
                config.feed_base_url, config.feed_country
            );
            Ok(Arc::new(feed))
        }
        None => {
            warn!("ADZUNA_APP_ID / ADZUNA_APP_KEY not set, external job feed disabled");
            Ok(Arc::new(DisabledFeed))
        }
    }
}
