//! Error types and error handling for the application
//!
//! This module defines the error taxonomy shared by the registry, the photo
//! store, and the HTTP handlers. All errors implement `IntoResponse` so every
//! failure is reported with the same JSON body shape.

use axum::{
    extract::{multipart::MultipartRejection, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error types
///
/// Each variant maps to exactly one HTTP status code. None of them are fatal
/// to the process; a failure is scoped to the request that produced it.
#[derive(Error, Debug)]
pub enum AppError {
    /// A required field was missing or empty, or the request body was malformed
    #[error("Validation error: {0}")]
    Validation(String),

    /// No item exists with the given id (including non-numeric ids)
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// The item has no photo, or the photo file is missing from the cache
    #[error("Photo not found: {0}")]
    PhotoNotFound(String),

    /// Uploaded photo exceeds the configured size limit
    #[error("Photo exceeds the maximum size of {0} bytes")]
    PayloadTooLarge(usize),

    /// Filesystem failure while reading or writing a photo
    #[error("Storage error: {0}")]
    Storage(String),

    /// No route matched the request
    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl AppError {
    /// HTTP status code reported for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::ItemNotFound(_) => StatusCode::NOT_FOUND,
            AppError::PhotoNotFound(_) => StatusCode::NOT_FOUND,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<MultipartRejection> for AppError {
    fn from(rejection: MultipartRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = Json(json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
