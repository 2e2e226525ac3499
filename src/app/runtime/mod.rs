use std::sync::Arc;
use std::time::Duration;

use ratatui::{Terminal, backend::CrosstermBackend};

use crate::logic::send_page_request;
use crate::sources::ArticClient;
use crate::state::AppState;
use crate::theme::Settings;

use super::terminal::{restore_terminal, setup_terminal};

mod background;
mod channels;
mod cleanup;
mod event_loop;
mod handlers;
pub mod init;
mod workers;

use background::{spawn_event_thread, spawn_tick_worker};
use channels::Channels;
use cleanup::cleanup_on_exit;
use event_loop::run_event_loop;
use init::apply_settings_to_app_state;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Run the artworks table end-to-end: set up the terminal, spawn the page
/// worker, drive the event loop, and restore the terminal on exit.
///
/// Inputs:
/// - `settings`: Effective settings (config file plus CLI overrides).
/// - `start_page`: 1-based page to load first.
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on terminal or client setup failure.
///
/// Details:
/// - When `ARTABLE_TEST_HEADLESS=1`, no terminal is touched and no input thread
///   is spawned; the loop still processes page results and ticks.
/// - The first page request is dispatched before the first frame, so the table
///   opens in its loading state.
pub async fn run(settings: Settings, start_page: u64) -> Result<()> {
    let headless = std::env::var("ARTABLE_TEST_HEADLESS").ok().as_deref() == Some("1");

    let timeout = (settings.request_timeout_secs > 0)
        .then(|| Duration::from_secs(settings.request_timeout_secs));
    let client = ArticClient::new(&settings.api_url, timeout)?;
    tracing::info!(api_url = %client.base_url(), ?timeout, "catalog client ready");

    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        match Terminal::new(CrosstermBackend::new(std::io::stdout())) {
            Ok(t) => Some(t),
            Err(e) => {
                let _ = restore_terminal();
                return Err(e.into());
            }
        }
    };

    let mut app = AppState::default();
    apply_settings_to_app_state(&mut app, &settings, start_page);

    let mut channels = Channels::new(Arc::new(client));
    spawn_tick_worker(channels.tick_tx.clone());
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        Arc::clone(&channels.event_thread_cancelled),
    );

    send_page_request(&mut app, &channels.page_tx);

    run_event_loop(&mut terminal, &mut app, &mut channels).await;

    cleanup_on_exit(&app, &channels);
    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
