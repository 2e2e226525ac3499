use ratatui::Terminal;
use tokio::select;

use crate::state::AppState;
use crate::ui::ui;

use super::channels::Channels;
use super::handlers::{handle_page_results, handle_tick};

/// What: Process one message from any runtime channel.
///
/// Inputs:
/// - `app`: Application state
/// - `channels`: Communication channels for background workers
///
/// Output: `true` if the event loop should exit, `false` to continue
async fn process_channel_messages(app: &mut AppState, channels: &mut Channels) -> bool {
    select! {
        Some(ev) = channels.event_rx.recv() => {
            crate::events::handle_event(ev, app, &channels.page_tx)
        }
        Some(results) = channels.page_res_rx.recv() => {
            handle_page_results(app, results);
            false
        }
        Some(()) = channels.tick_rx.recv() => {
            handle_tick(app);
            false
        }
        else => true,
    }
}

/// What: Draw and dispatch until a handler asks to quit.
///
/// Inputs:
/// - `terminal`: Terminal to draw into, or `None` when headless.
/// - `app`: Application state
/// - `channels`: Communication channels
pub async fn run_event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Option<Terminal<B>>,
    app: &mut AppState,
    channels: &mut Channels,
) {
    loop {
        if let Some(t) = terminal.as_mut() {
            let _ = t.draw(|f| ui(f, app));
        }
        if process_channel_messages(app, channels).await {
            break;
        }
    }
}
