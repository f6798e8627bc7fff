//! Presentation of items
//!
//! Builds the externally visible view of an item. The view is always a new
//! value; derived fields such as `photo_url` are never written back onto the
//! stored item.

use crate::state::Item;
use serde::Serialize;

/// An item as returned to clients, with its computed photo URL
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DecoratedItem {
    /// The stored item fields
    #[serde(flatten)]
    pub item: Item,
    /// Public URL of the item's photo, `null` when it has none
    pub photo_url: Option<String>,
}

/// Result of a search: the bare item, or its decorated view when the caller
/// asked for the photo
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum SearchResult {
    /// Item without a photo URL
    Plain(Item),
    /// Item with its photo URL
    Decorated(DecoratedItem),
}

/// Build the decorated view of an item
pub fn present(item: &Item, base_url: &str) -> DecoratedItem {
    DecoratedItem {
        item: item.clone(),
        photo_url: item.photo.as_deref().map(|photo| photo_url(base_url, photo)),
    }
}

/// Build decorated views for a list of items, preserving order
pub fn present_all(items: &[Item], base_url: &str) -> Vec<DecoratedItem> {
    items.iter().map(|item| present(item, base_url)).collect()
}

/// Public URL under which a stored photo is served
pub fn photo_url(base_url: &str, filename: &str) -> String {
    format!("{}/images/{}", base_url.trim_end_matches('/'), filename)
}
