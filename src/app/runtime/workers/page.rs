use std::sync::Arc;

use tokio::sync::mpsc;

use crate::sources::{CatalogSource, load_page};
use crate::state::{PageRequest, PageResults};

/// What: Spawn the background worker that serves page requests.
///
/// Inputs:
/// - `source`: Catalog to fetch from.
/// - `page_rx`: Channel receiver for page requests.
/// - `page_res_tx`: Channel sender for page results.
///
/// Details:
/// - Every request gets its own task, so a slow page never blocks a newer one.
/// - Nothing is cancelled or deduplicated; the UI drops stale results by id.
/// - Errors are logged here and forwarded as text for the status line.
pub fn spawn_page_worker<S>(
    source: Arc<S>,
    mut page_rx: mpsc::UnboundedReceiver<PageRequest>,
    page_res_tx: mpsc::UnboundedSender<PageResults>,
) where
    S: CatalogSource + 'static,
{
    tokio::spawn(async move {
        while let Some(request) = page_rx.recv().await {
            let src = Arc::clone(&source);
            let tx = page_res_tx.clone();
            tokio::spawn(async move {
                let outcome = match load_page(src.as_ref(), request.page, request.limit).await {
                    Ok(page) => Ok(page),
                    Err(e) => {
                        tracing::error!(
                            id = request.id,
                            page = request.page,
                            limit = request.limit,
                            error = %e,
                            "failed to fetch artworks page"
                        );
                        Err(e.to_string())
                    }
                };
                let _ = tx.send(PageResults {
                    id: request.id,
                    request,
                    outcome,
                });
            });
        }
        tracing::debug!("page worker channel closed");
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::FetchError;
    use serde_json::{Value, json};

    struct Echo;

    impl CatalogSource for Echo {
        async fn fetch_page(&self, page: u64, limit: u64) -> Result<Value, FetchError> {
            if page == 13 {
                return Err(FetchError::Status { status: 500 });
            }
            Ok(json!({
                "data": [{"id": page * 100}],
                "pagination": {"total": 1000, "limit": limit, "current_page": page}
            }))
        }
    }

    #[tokio::test]
    /// What: The worker answers each request with a result tagged by the same id.
    async fn worker_tags_results_with_request_id() {
        let (req_tx, req_rx) = mpsc::unbounded_channel();
        let (res_tx, mut res_rx) = mpsc::unbounded_channel();
        spawn_page_worker(Arc::new(Echo), req_rx, res_tx);
        req_tx
            .send(PageRequest {
                id: 7,
                page: 2,
                limit: 12,
            })
            .expect("send");
        let res = tokio::time::timeout(std::time::Duration::from_secs(2), res_rx.recv())
            .await
            .ok()
            .flatten()
            .expect("result");
        assert_eq!(res.id, 7);
        let page = res.outcome.expect("page");
        assert_eq!(page.items[0].id, 200);
        assert_eq!(page.current_page, 2);
    }

    #[tokio::test]
    /// What: Failures come back as text rather than tearing the worker down.
    async fn worker_reports_errors_as_text() {
        let (req_tx, req_rx) = mpsc::unbounded_channel();
        let (res_tx, mut res_rx) = mpsc::unbounded_channel();
        spawn_page_worker(Arc::new(Echo), req_rx, res_tx);
        req_tx
            .send(PageRequest {
                id: 1,
                page: 13,
                limit: 12,
            })
            .expect("send");
        let res = tokio::time::timeout(std::time::Duration::from_secs(2), res_rx.recv())
            .await
            .ok()
            .flatten()
            .expect("result");
        assert_eq!(res.outcome.expect_err("error"), "catalog returned HTTP 500");
    }
}
