#![cfg(test)]
// End-to-end runtime smoke test (headless)
// - Starts artable::app::run in the background against an unreachable catalog.
// - Runs with ARTABLE_TEST_HEADLESS=1 to bypass raw TTY setup/restore.
// - The failed first fetch must not take the runtime down.
// - If still running after the wait, aborts the task and asserts the join was a clean cancel.

use std::time::Duration;

use artable::theme::Settings;

#[tokio::test(flavor = "multi_thread")]
async fn runtime_smoke_headless_initializes_and_runs_without_panic() {
    unsafe {
        std::env::set_var("ARTABLE_TEST_HEADLESS", "1");
    }

    let settings = Settings {
        // Nothing listens on the discard port; the fetch fails fast
        api_url: "http://127.0.0.1:9/api/v1/artworks".into(),
        request_timeout_secs: 1,
        ..Settings::default()
    };
    let handle = tokio::spawn(async move { artable::app::run(settings, 1).await });

    tokio::time::sleep(Duration::from_millis(300)).await;

    if handle.is_finished() {
        match handle.await {
            Ok(run_result) => {
                if let Err(e) = run_result {
                    panic!("app::run returned error early: {e:?}");
                }
                return;
            }
            Err(join_err) => panic!("app::run task panicked: {join_err}"),
        }
    }

    handle.abort();
    match handle.await {
        Ok(run_result) => {
            if let Err(e) = run_result {
                panic!("app::run completed with error on abort race: {e:?}");
            }
        }
        Err(join_err) => {
            assert!(
                join_err.is_cancelled(),
                "app::run join error should be cancellation, got: {join_err}"
            );
        }
    }
}
