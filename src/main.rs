//! Music Catalog API - Binary Entry Point
//!
//! This is the main entry point for the music-server binary.

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use music_catalog::api::{create_router, AppState};
use music_catalog::catalog::{seed_mock_catalog, Catalog};
use music_catalog::config::{Config, DEFAULT_LOG_FILTER};
use music_catalog::error::ServerResult;

#[tokio::main]
async fn main() -> ServerResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = Config::from_env();
    let catalog = Arc::new(Catalog::with_settings(config.catalog_settings()));

    // Artists are seeded before tracks inside one call; nothing else touches the catalog yet
    if config.seed_mock_data {
        seed_mock_catalog(&catalog)?;
    }

    let app = create_router(Arc::new(AppState::new(catalog)));

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    info!(address = %listener.local_addr()?, version = music_catalog::VERSION, "Server is running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
