// Application state
// Shared across handlers: the item registry, the photo store, and settings

use crate::config::Config;
use crate::error::AppError;
use crate::services::photos::PhotoStore;
use crate::state::item::{coerce_id, ItemId};
use crate::state::registry::ItemRegistry;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Main application state
///
/// Cheap to clone; every clone shares the same registry and photo store.
/// The registry sits behind one coarse lock so id allocation can never race.
/// Photo I/O is never performed while that lock is held.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Registry of all items
    pub registry: Arc<RwLock<ItemRegistry>>,
    /// Photo storage in the cache directory
    pub photos: Arc<PhotoStore>,
    /// Base address used to build photo URLs
    pub public_url: Arc<str>,
    /// Largest accepted photo upload in bytes
    pub max_photo_bytes: usize,
}

impl AppState {
    /// Create application state with an empty registry
    pub fn new(photos: PhotoStore, public_url: impl Into<String>, max_photo_bytes: usize) -> Self {
        let public_url: String = public_url.into();
        Self {
            registry: Arc::new(RwLock::new(ItemRegistry::new())),
            photos: Arc::new(photos),
            public_url: Arc::from(public_url.trim_end_matches('/')),
            max_photo_bytes,
        }
    }

    /// Create application state from the loaded configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            PhotoStore::new(&config.storage.cache_dir),
            config.public_url(),
            config.storage.max_photo_bytes,
        )
    }

    /// Coerce a raw id and verify the item exists
    pub async fn existing_id(&self, raw: &str) -> Result<ItemId, AppError> {
        let id = coerce_id(raw).ok_or_else(|| AppError::ItemNotFound(raw.to_string()))?;
        if !self.registry.read().await.contains(id) {
            return Err(AppError::ItemNotFound(raw.to_string()));
        }
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::item::NewItem;

    fn test_state() -> AppState {
        AppState::new(PhotoStore::new("unused"), "http://localhost:3000/", 1024)
    }

    #[test]
    fn test_public_url_is_trimmed() {
        let state = test_state();
        assert_eq!(&*state.public_url, "http://localhost:3000");
    }

    #[tokio::test]
    async fn test_clones_share_registry() {
        let state = test_state();
        let clone = state.clone();

        clone
            .registry
            .write()
            .await
            .register(NewItem::named("Widget"))
            .unwrap();

        assert_eq!(state.registry.read().await.len(), 1);
    }

    #[tokio::test]
    async fn test_existing_id() {
        let state = test_state();
        state
            .registry
            .write()
            .await
            .register(NewItem::named("Widget"))
            .unwrap();

        assert_eq!(state.existing_id("1").await.unwrap(), 1);
        assert!(matches!(
            state.existing_id("2").await,
            Err(AppError::ItemNotFound(_))
        ));
        assert!(matches!(
            state.existing_id("one").await,
            Err(AppError::ItemNotFound(_))
        ));
    }
}
