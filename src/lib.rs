//! Inventory Service Library
//!
//! An inventory-tracking HTTP service: items with a name, a description, and
//! an optional photo kept in a cache directory. This library exposes the
//! modules for testing; the binary is in `src/main.rs`.

pub mod api;
pub mod config;
pub mod error;
pub mod services;
/// Application state management
///
/// Handles the item registry and the state shared by the HTTP handlers.
pub mod state;

pub use api::create_router;
pub use config::Config;
pub use error::AppError;
pub use state::AppState;
