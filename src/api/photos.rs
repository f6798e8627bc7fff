//! Item photo API handlers
//!
//! Download and replace the photo attached to an item.

use crate::api::upload::read_item_form;
use crate::error::AppError;
use crate::services::photos::content_type;
use crate::state::{AppState, Item};
use axum::{
    extract::{
        multipart::{Multipart, MultipartRejection},
        Path, State,
    },
    http::header,
    response::{IntoResponse, Json, Response},
};
use tracing::{info, warn};

/// GET /inventory/:id/photo - Download an item's photo
pub async fn get_item_photo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = state.existing_id(&id).await?;
    let item = state.registry.read().await.get(id)?;

    let filename = item
        .photo
        .ok_or_else(|| AppError::PhotoNotFound(format!("item {} has no photo", id)))?;
    let bytes = state.photos.retrieve(&filename).await?;

    Ok(([(header::CONTENT_TYPE, content_type(&filename))], bytes).into_response())
}

/// PUT /inventory/:id/photo - Replace an item's photo
///
/// The new file is written without holding the registry lock. If the item
/// was deleted in the meantime the new file is released again; on success
/// the superseded file is removed from the cache.
pub async fn update_item_photo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Item>, AppError> {
    let id = state.existing_id(&id).await?;

    let form = read_item_form(multipart?, state.max_photo_bytes).await?;
    let upload = form
        .photo
        .ok_or_else(|| AppError::Validation("photo file is required".to_string()))?;

    let filename = state.photos.store(&upload.file_name, &upload.bytes).await?;

    let result = state
        .registry
        .write()
        .await
        .update_photo(id, Some(filename.clone()));

    match result {
        Ok((item, previous)) => {
            if let Some(previous) = previous.filter(|previous| *previous != filename) {
                state.photos.release(&previous).await;
            }
            info!(item_id = id, filename = %filename, "Item photo replaced");
            Ok(Json(item))
        }
        Err(e) => {
            warn!(item_id = id, error = %e, "Photo update failed after upload");
            state.photos.release(&filename).await;
            Err(e)
        }
    }
}
