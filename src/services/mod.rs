//! Service layer for business logic
//!
//! This module contains the photo store and the presentation layer, keeping
//! file handling and response shaping out of the HTTP handlers.

pub mod photos;
pub mod presentation;

pub use photos::PhotoStore;
pub use presentation::{present, present_all, DecoratedItem, SearchResult};
