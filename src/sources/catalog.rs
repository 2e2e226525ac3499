//! Art Institute of Chicago artworks endpoint: URL building, HTTP client, and
//! normalization of the raw JSON into [`ArtworkPage`].

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, info, warn};

use super::{CatalogSource, FetchError};
use crate::state::types::{Artwork, ArtworkPage, DASH, UNKNOWN, UNTITLED};
use crate::util::{i64_of, opt_str, str_or, u64_of};

/// Default artworks listing endpoint.
pub const DEFAULT_API_URL: &str = "https://api.artic.edu/api/v1/artworks";

/// Fields requested for every page; keeps responses small.
pub const CATALOG_FIELDS: &str =
    "id,title,place_of_origin,artist_display,inscriptions,date_start,date_end";

/// What: Build the request URL for one page.
///
/// Inputs:
/// - `base`: Endpoint URL without a query string.
/// - `page`: 1-based page number.
/// - `limit`: Page size.
///
/// Output:
/// - `{base}?page={page}&limit={limit}&fields=...`
#[must_use]
pub fn catalog_url(base: &str, page: u64, limit: u64) -> String {
    format!(
        "{}?page={page}&limit={limit}&fields={CATALOG_FIELDS}",
        base.trim_end_matches('/')
    )
}

/// What: Turn one raw catalog record into an [`Artwork`].
///
/// Inputs:
/// - `raw`: One element of the response's `data` array.
///
/// Output:
/// - `Some(Artwork)` with display defaults substituted for missing text;
///   `None` only when the record has no usable `id`.
///
/// Details:
/// - `title` -> "Untitled"; `place_of_origin` and `artist_display` -> "Unknown";
///   `inscriptions` -> "-". Years stay optional.
#[must_use]
pub fn normalize_record(raw: &Value) -> Option<Artwork> {
    let id = u64_of(raw, "id")?;
    Some(Artwork {
        id,
        title: str_or(raw, "title", UNTITLED),
        place_of_origin: str_or(raw, "place_of_origin", UNKNOWN),
        artist_display: str_or(raw, "artist_display", UNKNOWN),
        inscriptions: str_or(raw, "inscriptions", DASH),
        date_start: i64_of(raw, "date_start"),
        date_end: i64_of(raw, "date_end"),
    })
}

/// What: Normalize a whole response body into a page.
///
/// Inputs:
/// - `body`: Decoded JSON body.
/// - `page`: The page that was requested (fallback for `current_page`).
/// - `limit`: The page size that was requested (fallback for `limit`).
///
/// Output:
/// - An [`ArtworkPage`]; never fails.
///
/// Details:
/// - A missing or non-array `data` yields an empty page.
/// - Missing pagination metadata falls back to: total = item count,
///   `total_pages` = 1, `current_page` = requested page, offset = `(page - 1) * limit`.
#[must_use]
pub fn normalize_page(body: &Value, page: u64, limit: u64) -> ArtworkPage {
    let items: Vec<Artwork> = match body.get("data").and_then(Value::as_array) {
        Some(rows) => rows
            .iter()
            .filter_map(|raw| {
                let rec = normalize_record(raw);
                if rec.is_none() {
                    debug!(record = %raw, "skipping catalog record without id");
                }
                rec
            })
            .collect(),
        None => {
            warn!(page, "catalog response has no data array; showing empty page");
            Vec::new()
        }
    };
    let meta = body.get("pagination").unwrap_or(&Value::Null);
    let item_count = u64::try_from(items.len()).unwrap_or(u64::MAX);
    ArtworkPage {
        total: u64_of(meta, "total").unwrap_or(item_count),
        total_pages: u64_of(meta, "total_pages").unwrap_or(1),
        current_page: u64_of(meta, "current_page").unwrap_or(page),
        limit: u64_of(meta, "limit").unwrap_or(limit),
        offset: u64_of(meta, "offset").unwrap_or(page.saturating_sub(1).saturating_mul(limit)),
        next_url: opt_str(meta, "next_url"),
        items,
    }
}

/// What: Load and normalize one page from any [`CatalogSource`].
///
/// Inputs:
/// - `source`: Where to fetch from.
/// - `page`: 1-based page number; 0 is treated as 1.
/// - `limit`: Page size; 0 is treated as 1.
///
/// Output:
/// - `Ok(ArtworkPage)` on success; `Err(FetchError)` on transport/status/decode failure.
///
/// # Errors
/// - Whatever the source reports; nothing is retried.
pub async fn load_page<S: CatalogSource>(
    source: &S,
    page: u64,
    limit: u64,
) -> Result<ArtworkPage, FetchError> {
    let page = page.max(1);
    let limit = limit.max(1);
    let body = source.fetch_page(page, limit).await?;
    let out = normalize_page(&body, page, limit);
    info!(
        page,
        limit,
        items = out.items.len(),
        total = out.total,
        "catalog page loaded"
    );
    Ok(out)
}

/// HTTP client for the public artworks endpoint.
#[derive(Clone, Debug)]
pub struct ArticClient {
    /// Shared reqwest client (connection pooling is enabled by default).
    client: reqwest::Client,
    /// Endpoint URL without a query string.
    base_url: String,
}

impl ArticClient {
    /// What: Build a client for `base_url`.
    ///
    /// Inputs:
    /// - `base_url`: Endpoint URL, e.g. [`DEFAULT_API_URL`].
    /// - `timeout`: Optional whole-request timeout; `None` waits for the transport.
    ///
    /// # Errors
    /// - When the TLS backend cannot be initialized.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(format!("artable/{}", env!("CARGO_PKG_VERSION")));
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: base_url.into(),
        })
    }

    /// Endpoint this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl CatalogSource for ArticClient {
    async fn fetch_page(&self, page: u64, limit: u64) -> Result<Value, FetchError> {
        let url = catalog_url(&self.base_url, page, limit);
        debug!(url = %url, "fetching catalog page");
        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            let preview: String = body.chars().take(300).collect();
            warn!(
                status = status.as_u16(),
                preview = preview,
                "catalog returned non-success status"
            );
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }
        Ok(serde_json::from_str(&body)?)
    }
}
