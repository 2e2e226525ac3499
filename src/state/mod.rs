//! Modularized state module.
//!
//! Value types, modal state and the central `AppState` live in separate files;
//! the public API is re-exported under `crate::state::*`.

pub mod app_state;
pub mod modal;
pub mod types;

// Public re-exports to keep paths short
pub use app_state::AppState;
pub use modal::Modal;
pub use types::{
    Artwork, ArtworkPage, PageRequest, PageResults, SortColumn, SortDirection, TableOptions,
};
