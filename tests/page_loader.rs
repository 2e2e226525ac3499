//! Integration tests for the page loader against in-memory catalogs.

use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::{Value, json};

use artable::logic::page_count;
use artable::sources::{CatalogSource, FetchError, catalog_url, load_page};
use artable::state::AppState;

/// Catalog that returns a fixed body and counts calls.
struct Canned {
    body: Value,
    calls: AtomicUsize,
}

impl Canned {
    fn new(body: Value) -> Self {
        Self {
            body,
            calls: AtomicUsize::new(0),
        }
    }
}

impl CatalogSource for Canned {
    async fn fetch_page(&self, _page: u64, _limit: u64) -> Result<Value, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.body.clone())
    }
}

/// Catalog that always answers with an HTTP error.
struct Failing;

impl CatalogSource for Failing {
    async fn fetch_page(&self, _page: u64, _limit: u64) -> Result<Value, FetchError> {
        Err(FetchError::Status { status: 503 })
    }
}

fn twelve_items() -> Vec<Value> {
    (1..=12)
        .map(|i| json!({"id": i, "title": format!("Artwork {i}")}))
        .collect()
}

#[tokio::test]
/// What: 12 items with a total of 5000 give 417 pages once applied to the table.
async fn total_and_page_count_from_first_page() {
    let src = Canned::new(json!({
        "data": twelve_items(),
        "pagination": {"total": 5000, "limit": 12, "offset": 0, "total_pages": 417, "current_page": 1}
    }));
    let page = load_page(&src, 1, 12).await.expect("page");
    assert_eq!(page.items.len(), 12);
    assert_eq!(page.total, 5000);

    let mut app = AppState::default();
    app.apply_page(page);
    assert_eq!(app.total, 5000);
    assert_eq!(app.page_count(), 417);
    assert_eq!(page_count(5000, 12), 417);
    assert_eq!(src.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
/// What: Missing fields fall back to their display defaults.
async fn missing_fields_use_defaults() {
    let src = Canned::new(json!({
        "data": [
            {"id": 7, "place_of_origin": null, "artist_display": null},
            {"id": 8, "title": "Nighthawks", "inscriptions": "signed", "date_start": 1942, "date_end": 1942}
        ]
    }));
    let page = load_page(&src, 3, 12).await.expect("page");
    assert_eq!(page.total, 2);
    assert_eq!(page.current_page, 3);
    assert_eq!(page.limit, 12);

    let first = &page.items[0];
    assert_eq!(first.title, "Untitled");
    assert_eq!(first.place_of_origin, "Unknown");
    assert_eq!(first.artist_display, "Unknown");
    assert_eq!(first.inscriptions, "-");
    assert_eq!(first.start_year_label(), "-");

    let second = &page.items[1];
    assert_eq!(second.title, "Nighthawks");
    assert_eq!(second.date_start, Some(1942));
}

#[tokio::test]
/// What: A body without a data array is an empty page, not an error.
async fn missing_data_is_an_empty_page() {
    let src = Canned::new(json!({"pagination": {"total": 10}}));
    let page = load_page(&src, 1, 12).await.expect("page");
    assert!(page.items.is_empty());
}

#[tokio::test]
async fn http_failure_is_reported() {
    let err = load_page(&Failing, 1, 12).await.expect_err("error");
    assert!(matches!(err, FetchError::Status { status: 503 }));
    assert_eq!(err.to_string(), "catalog returned HTTP 503");
}

#[test]
/// What: The request URL carries page, limit, and the field list.
fn request_url_shape() {
    let url = catalog_url("https://api.artic.edu/api/v1/artworks", 2, 12);
    assert!(url.starts_with("https://api.artic.edu/api/v1/artworks?page=2&limit=12&fields="));
    for field in [
        "id",
        "title",
        "place_of_origin",
        "artist_display",
        "inscriptions",
        "date_start",
        "date_end",
    ] {
        assert!(url.contains(field), "missing {field} in {url}");
    }
}
