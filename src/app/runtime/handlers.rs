use crate::state::{AppState, Modal, PageResults};

/// What: Handle a settled page request.
///
/// Inputs:
/// - `app`: Application state
/// - `results`: Result from the page worker
///
/// Details:
/// - Results whose id is not the latest issued request are discarded, so a
///   slow old response never overwrites a newer page.
/// - Clears the loading flag for the latest request whether it succeeded or not.
/// - On failure the previous page stays visible and the error goes to the footer;
///   with nothing to show yet, an alert explains the failure instead.
pub fn handle_page_results(app: &mut AppState, results: PageResults) {
    if results.id != app.latest_request_id {
        tracing::debug!(
            id = results.id,
            latest = app.latest_request_id,
            page = results.request.page,
            "discarding stale page result"
        );
        return;
    }
    app.loading = false;
    match results.outcome {
        Ok(page) => {
            tracing::debug!(
                id = results.id,
                page = results.request.page,
                items = page.items.len(),
                total = page.total,
                "page accepted"
            );
            app.apply_page(page);
        }
        Err(msg) => {
            tracing::warn!(
                id = results.id,
                page = results.request.page,
                error = %msg,
                "keeping previous page after fetch failure"
            );
            if app.records.is_empty() && app.modal == Modal::None {
                app.modal = Modal::Alert {
                    message: format!("Could not load artworks: {msg}. Press r to retry."),
                };
            }
            app.last_error = Some(msg);
        }
    }
}

/// What: Advance the spinner; a redraw follows every handled message.
pub const fn handle_tick(app: &mut AppState) {
    app.tick = app.tick.wrapping_add(1);
}
