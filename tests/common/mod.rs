//! Shared helpers for integration tests

use inventory_service::services::PhotoStore;
use inventory_service::{create_router, AppState};
use std::net::SocketAddr;
use tempfile::{tempdir, TempDir};

/// A running server on an ephemeral port with its own cache directory
pub struct TestServer {
    pub base_url: String,
    pub client: reqwest::Client,
    pub cache_dir: TempDir,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Start a server with a fresh registry
pub async fn spawn_server() -> TestServer {
    spawn_server_with_limit(1024 * 1024).await
}

/// Start a server with a custom photo size limit
pub async fn spawn_server_with_limit(max_photo_bytes: usize) -> TestServer {
    let cache_dir = tempdir().expect("Failed to create temp dir");
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr: SocketAddr = listener.local_addr().expect("No local address");
    let base_url = format!("http://{}", addr);

    let photos = PhotoStore::new(cache_dir.path().join("cache"));
    photos.ensure_dir().await.expect("Failed to create cache dir");
    let state = AppState::new(photos, base_url.clone(), max_photo_bytes);
    let app = create_router(state);

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server error");
    });

    TestServer {
        base_url,
        client: reqwest::Client::new(),
        cache_dir,
    }
}
