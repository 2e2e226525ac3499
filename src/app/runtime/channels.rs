use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::sources::CatalogSource;
use crate::state::{PageRequest, PageResults};

use super::workers::spawn_page_worker;

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Contains all channel senders and receivers used for communication
///   between the main event loop and background workers
pub struct Channels {
    /// Terminal events from the reader thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Receiving side of terminal events.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set to stop the reader thread on exit.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Page requests to the page worker.
    pub page_tx: mpsc::UnboundedSender<PageRequest>,
    /// Page results from the page worker.
    pub page_res_rx: mpsc::UnboundedReceiver<PageResults>,
    /// Periodic redraw ticks.
    pub tick_tx: mpsc::UnboundedSender<()>,
    /// Receiving side of ticks.
    pub tick_rx: mpsc::UnboundedReceiver<()>,
}

impl Channels {
    /// What: Create all channels and spawn the page worker on `source`.
    pub fn new<S: CatalogSource + 'static>(source: Arc<S>) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let event_thread_cancelled = Arc::new(AtomicBool::new(false));
        let (page_tx, page_rx) = mpsc::unbounded_channel::<PageRequest>();
        let (page_res_tx, page_res_rx) = mpsc::unbounded_channel::<PageResults>();
        let (tick_tx, tick_rx) = mpsc::unbounded_channel::<()>();

        spawn_page_worker(source, page_rx, page_res_tx);

        Self {
            event_tx,
            event_rx,
            event_thread_cancelled,
            page_tx,
            page_res_rx,
            tick_tx,
            tick_rx,
        }
    }
}
