use crate::state::AppState;

use super::channels::Channels;

/// What: Release runtime resources once the main loop has exited.
///
/// Details:
/// - Signals the terminal reader thread to stop.
/// - Logs how many records were left selected, for post-mortem reading of the log.
pub fn cleanup_on_exit(app: &AppState, channels: &Channels) {
    tracing::debug!("main loop exited");
    channels
        .event_thread_cancelled
        .store(true, std::sync::atomic::Ordering::Relaxed);
    tracing::info!(
        selected = app.selection.len(),
        page = app.cursor.page_number(),
        "session finished"
    );
}
