// Item registry
// The single source of truth for all items; every mutation goes through here

use crate::error::AppError;
use crate::services::presentation::{present, SearchResult};
use crate::state::item::{is_blank, Item, ItemId, ItemPatch, NewItem};
use tracing::{debug, info};

/// In-memory item registry
///
/// Items are kept in insertion order. Ids are handed out from a counter that
/// only ever grows, so an id is never reused after its item is deleted.
/// All operations are synchronous; callers serialize access through a single
/// lock around the registry.
#[derive(Debug, Clone, Default)]
pub struct ItemRegistry {
    /// Items in insertion order
    items: Vec<Item>,
    /// Highest id ever assigned (0 before the first registration)
    last_id: ItemId,
}

impl ItemRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new item
    /// Fails with a validation error when the name is missing or blank; the
    /// collection is left untouched in that case
    pub fn register(&mut self, new_item: NewItem) -> Result<Item, AppError> {
        let name = match new_item.name {
            Some(name) if !is_blank(&name) => name,
            _ => {
                return Err(AppError::Validation(
                    "inventory_name is required".to_string(),
                ))
            }
        };

        self.last_id += 1;
        let item = Item {
            id: self.last_id,
            name,
            description: new_item.description.unwrap_or_default(),
            photo: new_item.photo,
        };
        self.items.push(item.clone());

        info!(item_id = item.id, has_photo = item.photo.is_some(), "Item registered");
        Ok(item)
    }

    /// All items in insertion order
    pub fn list(&self) -> Vec<Item> {
        self.items.clone()
    }

    /// Look up an item by id
    pub fn get(&self, id: ItemId) -> Result<Item, AppError> {
        self.find(id).cloned().ok_or_else(|| not_found(id))
    }

    /// Apply a partial update to an item's fields
    /// Fields absent from the patch keep their previous values
    pub fn update_fields(&mut self, id: ItemId, patch: ItemPatch) -> Result<Item, AppError> {
        if let Some(name) = &patch.name {
            if is_blank(name) {
                // Check existence first so unknown ids still report not found
                self.find(id).ok_or_else(|| not_found(id))?;
                return Err(AppError::Validation(
                    "inventory_name cannot be empty".to_string(),
                ));
            }
        }

        let item = self.find_mut(id).ok_or_else(|| not_found(id))?;

        if let Some(name) = patch.name {
            item.name = name;
        }
        if let Some(description) = patch.description {
            item.description = description;
        }

        debug!(item_id = id, "Item fields updated");
        Ok(item.clone())
    }

    /// Replace an item's photo
    /// Returns the updated item and the filename of the photo it replaced, so
    /// the caller can release the superseded file
    pub fn update_photo(
        &mut self,
        id: ItemId,
        photo: Option<String>,
    ) -> Result<(Item, Option<String>), AppError> {
        let item = self.find_mut(id).ok_or_else(|| not_found(id))?;
        let photo = photo.ok_or_else(|| AppError::Validation("photo file is required".to_string()))?;

        let previous = item.photo.replace(photo);

        info!(item_id = id, replaced = previous.is_some(), "Item photo updated");
        Ok((item.clone(), previous))
    }

    /// Permanently remove an item
    /// Returns the removed item so the caller can release its photo
    pub fn delete(&mut self, id: ItemId) -> Result<Item, AppError> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| not_found(id))?;
        let removed = self.items.remove(index);

        info!(item_id = id, "Item deleted");
        Ok(removed)
    }

    /// Look up an item, decorating it with its photo URL when requested
    pub fn find_exact(
        &self,
        id: ItemId,
        want_photo: bool,
        base_url: &str,
    ) -> Result<SearchResult, AppError> {
        let item = self.find(id).ok_or_else(|| not_found(id))?;

        Ok(if want_photo {
            SearchResult::Decorated(present(item, base_url))
        } else {
            SearchResult::Plain(item.clone())
        })
    }

    /// Whether an item with this id exists
    pub fn contains(&self, id: ItemId) -> bool {
        self.find(id).is_some()
    }

    /// Number of items in the registry
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the registry holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn find(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    fn find_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }
}

fn not_found(id: ItemId) -> AppError {
    AppError::ItemNotFound(id.to_string())
}
