// Item model
// Inventory records, their partial-update payloads, and id coercion

use serde::{Deserialize, Serialize};

/// Unique identifier for an item
pub type ItemId = u64;

/// Item structure
/// A registered inventory record with an optional photo in the photo store
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Item {
    /// Unique identifier, assigned by the registry
    pub id: ItemId,
    /// Display name of the item (never empty)
    #[serde(rename = "inventory_name")]
    pub name: String,
    /// Free-form description, empty when not provided
    #[serde(default)]
    pub description: String,
    /// Filename of the item's photo in the photo store, if any
    pub photo: Option<String>,
}

/// Fields supplied when registering a new item
#[derive(Debug, Clone, Default)]
pub struct NewItem {
    /// Name for the new item (required)
    pub name: Option<String>,
    /// Description (optional, defaults to empty)
    pub description: Option<String>,
    /// Filename returned by the photo store (optional)
    pub photo: Option<String>,
}

impl NewItem {
    /// Create a registration payload with just a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the photo filename
    pub fn with_photo(mut self, photo: impl Into<String>) -> Self {
        self.photo = Some(photo.into());
        self
    }
}

/// Partial update of an item's fields
///
/// Only the fields present in the request are applied. Ids are immutable and
/// photos change only through the photo upload endpoint, so unknown keys
/// (including `id`) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemPatch {
    /// New name for the item (optional)
    #[serde(default, rename = "inventory_name", alias = "name")]
    pub name: Option<String>,
    /// New description for the item (optional)
    #[serde(default)]
    pub description: Option<String>,
}

/// Returns true when a required text field carries no content
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Coerce a raw id string into an item id
///
/// Surrounding whitespace is ignored and integral decimal forms such as
/// `"3.0"` are accepted. Anything else (text, negatives, fractions) yields
/// `None`, which callers report as "not found" rather than a type error.
pub fn coerce_id(raw: &str) -> Option<ItemId> {
    let trimmed = raw.trim();
    if let Ok(id) = trimmed.parse::<ItemId>() {
        return Some(id);
    }
    trimmed.parse::<f64>().ok().and_then(coerce_float_id)
}

/// Coerce a floating point id (e.g. a JSON number) into an item id
pub fn coerce_float_id(value: f64) -> Option<ItemId> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value < ItemId::MAX as f64 {
        Some(value as ItemId)
    } else {
        None
    }
}
