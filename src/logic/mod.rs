//! Core non-UI logic split into modular submodules.

pub mod pagination;
pub mod query;
pub mod selection;
pub mod sort;

// Re-export public APIs to keep import paths short (crate::logic::...)
pub use pagination::{PaginationCursor, page_count};
pub use query::send_page_request;
pub use selection::{SelectionSet, bulk_select, merge};
pub use sort::sort_records_preserve_highlight;
