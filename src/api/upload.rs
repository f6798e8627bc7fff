//! Multipart form parsing
//!
//! Reads the register and photo-upload forms fully into memory before any
//! file is written, so a rejected request never leaves a stored photo behind.

use crate::error::AppError;
use axum::body::Bytes;
use axum::extract::multipart::{Multipart, MultipartError};
use axum::http::StatusCode;
use tracing::{debug, warn};

/// A file part of a multipart form
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Filename as sent by the client
    pub file_name: String,
    /// File contents
    pub bytes: Bytes,
}

/// Fields of the item forms
#[derive(Debug, Clone, Default)]
pub struct ItemForm {
    /// `inventory_name` field
    pub name: Option<String>,
    /// `description` field
    pub description: Option<String>,
    /// `photo` file field, absent when no file was chosen
    pub photo: Option<UploadedFile>,
}

/// Parse an item form
///
/// Accepts the fields:
/// - inventory_name: item name
/// - description: optional description
/// - photo: optional image file
pub async fn read_item_form(
    mut multipart: Multipart,
    max_photo_bytes: usize,
) -> Result<ItemForm, AppError> {
    let mut form = ItemForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, max_photo_bytes))?
    {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "inventory_name" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| multipart_error(e, max_photo_bytes))?;
                form.name = Some(text);
            }
            "description" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| multipart_error(e, max_photo_bytes))?;
                form.description = Some(text);
            }
            "photo" => {
                // Get filename first (before consuming field)
                let file_name = field.file_name().map(|s| s.to_string());
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| multipart_error(e, max_photo_bytes))?;

                if bytes.len() > max_photo_bytes {
                    warn!(size_bytes = bytes.len(), "Photo upload too large");
                    return Err(AppError::PayloadTooLarge(max_photo_bytes));
                }

                // An empty file input still sends a part with no name and no bytes
                match file_name {
                    Some(file_name) if !file_name.is_empty() && !bytes.is_empty() => {
                        debug!(file_name = %file_name, size_bytes = bytes.len(), "Received photo");
                        form.photo = Some(UploadedFile { file_name, bytes });
                    }
                    _ => debug!("Empty photo field ignored"),
                }
            }
            _ => {
                warn!("Unknown multipart field: {}", field_name);
            }
        }
    }

    Ok(form)
}

fn multipart_error(error: MultipartError, max_photo_bytes: usize) -> AppError {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(max_photo_bytes)
    } else {
        AppError::Validation(error.body_text())
    }
}
