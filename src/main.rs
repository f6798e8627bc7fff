//! Inventory Service
//!
//! A REST API for registering inventory items, attaching photos to them, and
//! serving those photos from a local cache directory.

use anyhow::Context;
use inventory_service::{create_router, AppState, Config};
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = Config::load();
    info!("Configuration loaded: {:?}", config);

    // Initialize application state and the photo cache
    let state = AppState::from_config(&config);
    state
        .photos
        .ensure_dir()
        .await
        .context("Failed to prepare cache directory")?;
    info!(
        cache_dir = %config.storage.cache_dir.display(),
        public_url = %state.public_url,
        "Photo cache ready"
    );

    let app = create_router(state);

    // Bind to address from config
    let addr: SocketAddr = tokio::net::lookup_host(config.server_addr())
        .await
        .with_context(|| format!("Invalid server address: {}", config.server_addr()))?
        .next()
        .with_context(|| format!("No address found for {}", config.server_addr()))?;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("Server running on http://{}", addr);
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    // Setup graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Handle graceful shutdown signals (Ctrl+C, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully...");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down gracefully...");
        },
    }
}
