//! Command-line print mode: fetch one page and write it to stdout.

use std::fmt::Write;
use std::time::Duration;

use crate::logic::page_count;
use crate::sources::{ArticClient, FetchError, load_page};
use crate::state::ArtworkPage;
use crate::theme::Settings;
use crate::util::fit_width;

/// What: Render a page as a plain, fixed-width text table.
///
/// Inputs:
/// - `page`: Normalized page.
/// - `page_size`: Rows per page used to compute the page count.
///
/// Output:
/// - Header, one line per record, and a `Page P of C · T records` footer.
#[must_use]
pub fn format_page_table(page: &ArtworkPage, page_size: u64) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>8}  {:<40}  {:<18}  {:<30}  {:<24}  {:>6}  {:>6}",
        "ID", "Title", "Place of Origin", "Artist", "Inscriptions", "Start", "End"
    );
    for r in &page.items {
        let _ = writeln!(
            out,
            "{:>8}  {:<40}  {:<18}  {:<30}  {:<24}  {:>6}  {:>6}",
            r.id,
            fit_width(&r.title, 40),
            fit_width(&r.place_of_origin, 18),
            fit_width(&r.artist_display, 30),
            fit_width(&r.inscriptions, 24),
            r.start_year_label(),
            r.end_year_label()
        );
    }
    let _ = write!(
        out,
        "Page {} of {} · {} records",
        page.current_page,
        page_count(page.total, page_size),
        page.total
    );
    out
}

/// What: Fetch one page using the effective settings and print it.
///
/// Inputs:
/// - `settings`: Effective settings (endpoint, page size, timeout).
/// - `page`: 1-based page number.
///
/// Output:
/// - `Ok(())` after printing; `Err` when the fetch fails.
///
/// # Errors
/// - Any [`FetchError`] from the client or the request.
pub async fn handle_print(settings: &Settings, page: u64) -> Result<(), FetchError> {
    tracing::info!(page, limit = settings.default_page_size, "print mode requested from CLI");
    let timeout = (settings.request_timeout_secs > 0)
        .then(|| Duration::from_secs(settings.request_timeout_secs));
    let client = ArticClient::new(settings.api_url.clone(), timeout)?;
    let fetched = load_page(&client, page, settings.default_page_size).await?;
    println!("{}", format_page_table(&fetched, settings.default_page_size));
    Ok(())
}
