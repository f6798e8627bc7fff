//! API module
//!
//! Contains the HTTP request handlers and the router that wires them to the
//! item registry and photo store.

pub mod forms;
pub mod items;
pub mod photos;
pub mod search;
pub mod upload;

use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{DefaultBodyLimit, Request, State},
    middleware::Next,
    response::{Json, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::time::Instant;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

/// Room left in the request body limit for the text fields of a form
const FORM_OVERHEAD_BYTES: usize = 64 * 1024;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "healthy" when the server responds
    pub status: String,
    /// Crate version
    pub version: String,
    /// Number of registered items
    pub items: usize,
}

/// Build the application router
pub fn create_router(state: AppState) -> Router {
    let images = ServeDir::new(state.photos.dir());
    let body_limit = state.max_photo_bytes.saturating_add(FORM_OVERHEAD_BYTES);

    Router::new()
        .route("/health", get(health_check))
        // Browser forms
        .route("/RegisterForm.html", get(forms::register_form))
        .route("/SearchForm.html", get(forms::search_form))
        // Item API
        .route("/register", post(items::register_item))
        .route("/inventory", get(items::list_items))
        .route(
            "/inventory/:id",
            get(items::get_item)
                .put(items::update_item)
                .delete(items::delete_item),
        )
        .route(
            "/inventory/:id/photo",
            get(photos::get_item_photo).put(photos::update_item_photo),
        )
        .route("/search", post(search::search_items))
        // Stored photos, addressed by the photo_url of each item
        .nest_service("/images", images)
        .fallback(method_not_allowed)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(DefaultBodyLimit::max(body_limit))
        // Middleware (order matters - request_id should be first)
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Request ID middleware - adds unique ID to each request for tracing
async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        uri = %uri,
    );

    let response = next.run(request).instrument(span).await;

    let duration = start.elapsed();
    info!(
        request_id = %request_id,
        method = %method,
        uri = %uri,
        status = %response.status().as_u16(),
        duration_ms = duration.as_millis(),
        "Request completed"
    );

    response
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        items: state.registry.read().await.len(),
    })
}

/// Fallback for unmatched routes and unsupported methods
async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
