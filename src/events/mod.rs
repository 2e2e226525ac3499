//! Event handling layer for the artworks table.
//!
//! `handle_event` routes a terminal event to the active modal first and to
//! the table keymap otherwise.

use crossterm::event::{Event as CEvent, KeyEventKind};
use tokio::sync::mpsc;

use crate::state::{AppState, PageRequest};

mod modals;
mod mouse;
mod table;

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(
    ev: CEvent,
    app: &mut AppState,
    page_tx: &mpsc::UnboundedSender<PageRequest>,
) -> bool {
    match ev {
        CEvent::Key(ke) => {
            if ke.kind != KeyEventKind::Press {
                return false;
            }
            if modals::handle_modal_key(ke, app) {
                return false;
            }
            table::handle_table_key(ke, app, page_tx)
        }
        CEvent::Mouse(me) => {
            mouse::handle_mouse_event(me, app);
            false
        }
        _ => false,
    }
}
