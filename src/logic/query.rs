use tokio::sync::mpsc;

use crate::state::{AppState, PageRequest};

/// What: Send the page under the current cursor to the page worker.
///
/// Inputs:
/// - `app`: Mutable application state; allocates the next request id and
///   raises the loading flag.
/// - `page_tx`: Channel to the background page worker.
///
/// Output:
/// - Updates `app.next_request_id`, `app.latest_request_id` and `app.loading`;
///   sends a [`PageRequest`].
///
/// Details:
/// - Earlier requests are not cancelled; their results are dropped on
///   arrival because their id no longer matches `latest_request_id`.
pub fn send_page_request(app: &mut AppState, page_tx: &mpsc::UnboundedSender<PageRequest>) {
    let id = app.next_request_id;
    app.next_request_id += 1;
    app.latest_request_id = id;
    app.loading = true;
    let request = PageRequest {
        id,
        page: app.cursor.page_number(),
        limit: app.cursor.page_size,
    };
    tracing::debug!(id, page = request.page, limit = request.limit, "page requested");
    if page_tx.send(request).is_err() {
        tracing::warn!(id, "page worker is gone; request dropped");
        app.loading = false;
    }
}
