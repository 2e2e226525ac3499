use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

/// Interval between redraw ticks (drives the loading spinner).
const TICK_MS: u64 = 150;

/// What: Spawn the periodic tick worker.
///
/// Details:
/// - Stops once the receiving side is dropped.
pub fn spawn_tick_worker(tick_tx: mpsc::UnboundedSender<()>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(TICK_MS));
        loop {
            interval.tick().await;
            if tick_tx.send(()).is_err() {
                break;
            }
        }
    });
}

/// What: Spawn the blocking terminal event reader thread.
///
/// Inputs:
/// - `headless`: When `true`, no thread is started (tests run without a TTY).
/// - `event_tx`: Channel for terminal events.
/// - `event_thread_cancelled`: Flag checked between polls to exit promptly.
///
/// Details:
/// - Polls with a 50ms timeout so cancellation is noticed quickly.
/// - Transient read errors are ignored.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    event_thread_cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        loop {
            if event_thread_cancelled.load(Ordering::Relaxed) {
                break;
            }
            match crossterm::event::poll(Duration::from_millis(50)) {
                Ok(true) => {
                    if let Ok(ev) = crossterm::event::read() {
                        if event_thread_cancelled.load(Ordering::Relaxed) {
                            break;
                        }
                        // Receiver dropped on exit
                        if event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                }
                Ok(false) | Err(_) => {}
            }
        }
    });
}
