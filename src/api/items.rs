//! Item management API handlers
//!
//! Contains HTTP request handlers for item registration and CRUD operations.

use crate::api::upload::{read_item_form, ItemForm};
use crate::error::AppError;
use crate::services::presentation::{present, present_all, DecoratedItem};
use crate::state::{coerce_id, AppState, Item, ItemPatch, NewItem};
use axum::{
    extract::{
        multipart::{Multipart, MultipartRejection},
        rejection::JsonRejection,
        Path, State,
    },
    http::StatusCode,
    response::Json,
};
use serde::Serialize;
use tracing::info;

/// Message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable message
    pub message: String,
    /// Status indicator (e.g., "ok")
    pub status: String,
}

/// POST /register - Register a new item from a multipart form
pub async fn register_item(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<Item>), AppError> {
    let form = read_item_form(multipart?, state.max_photo_bytes).await?;
    let item = register_from_form(&state, form).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Register an item from an already parsed form
///
/// The name is validated before the photo is written, and the registry lock
/// is only taken once the photo is safely on disk.
pub async fn register_from_form(state: &AppState, form: ItemForm) -> Result<Item, AppError> {
    let name = form
        .name
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| AppError::Validation("inventory_name is required".to_string()))?;

    let photo = match form.photo {
        Some(upload) => Some(state.photos.store(&upload.file_name, &upload.bytes).await?),
        None => None,
    };

    let new_item = NewItem {
        name: Some(name),
        description: form.description,
        photo: photo.clone(),
    };

    let result = state.registry.write().await.register(new_item);
    if result.is_err() {
        if let Some(filename) = &photo {
            state.photos.release(filename).await;
        }
    }
    result
}

/// GET /inventory - List all items
pub async fn list_items(State(state): State<AppState>) -> Json<Vec<DecoratedItem>> {
    let items = state.registry.read().await.list();
    Json(present_all(&items, &state.public_url))
}

/// GET /inventory/:id - Get a specific item
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DecoratedItem>, AppError> {
    let id = coerce_id(&id).ok_or_else(|| AppError::ItemNotFound(id))?;
    let item = state.registry.read().await.get(id)?;
    Ok(Json(present(&item, &state.public_url)))
}

/// PUT /inventory/:id - Merge the given fields into an item
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ItemPatch>, JsonRejection>,
) -> Result<Json<Item>, AppError> {
    let id = coerce_id(&id).ok_or_else(|| AppError::ItemNotFound(id))?;

    let mut registry = state.registry.write().await;
    if !registry.contains(id) {
        return Err(AppError::ItemNotFound(id.to_string()));
    }
    let Json(patch) = payload?;

    let item = registry.update_fields(id, patch)?;
    Ok(Json(item))
}

/// DELETE /inventory/:id - Delete an item and release its photo
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = coerce_id(&id).ok_or_else(|| AppError::ItemNotFound(id))?;

    // The lock is released at the end of the statement, before any file I/O
    let removed = state.registry.write().await.delete(id)?;

    if let Some(photo) = &removed.photo {
        state.photos.release(photo).await;
    }

    info!(item_id = id, "Item removed via API");
    Ok(Json(MessageResponse {
        message: format!("Item {} deleted successfully", id),
        status: "ok".to_string(),
    }))
}
