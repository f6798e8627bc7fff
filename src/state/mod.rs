// State management module
// Handles the item registry and the shared application state

pub mod app_state;
pub mod item;
pub mod registry;

pub use app_state::AppState;
pub use item::{coerce_id, Item, ItemId, ItemPatch, NewItem};
pub use registry::ItemRegistry;
