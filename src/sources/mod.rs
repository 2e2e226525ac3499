//! Catalog data retrieval.
//!
//! The page loader talks to the catalog through the [`CatalogSource`] trait so
//! the runtime can use the HTTP client while tests feed canned JSON.

use std::future::Future;

use serde_json::Value;

mod catalog;

pub use catalog::{
    ArticClient, CATALOG_FIELDS, DEFAULT_API_URL, catalog_url, load_page, normalize_page,
    normalize_record,
};

/// Failure of a single page fetch. Never fatal; the caller keeps the last good page.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Connection, TLS, or body-read failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The catalog answered with a non-success status.
    #[error("catalog returned HTTP {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },
    /// The body was not JSON at all.
    #[error("response was not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Something that can produce one raw catalog page as JSON.
pub trait CatalogSource: Send + Sync {
    /// What: Fetch the raw JSON body for one page.
    ///
    /// Inputs:
    /// - `page`: 1-based page number.
    /// - `limit`: Page size.
    ///
    /// Output:
    /// - The decoded JSON body, or a [`FetchError`].
    fn fetch_page(
        &self,
        page: u64,
        limit: u64,
    ) -> impl Future<Output = Result<Value, FetchError>> + Send;
}
