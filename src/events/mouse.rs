use crossterm::event::{MouseEvent, MouseEventKind};

use crate::state::AppState;

/// What: Scroll wheel moves the table highlight one row at a time.
pub fn handle_mouse_event(me: MouseEvent, app: &mut AppState) {
    match me.kind {
        MouseEventKind::ScrollDown => app.move_highlight(1),
        MouseEventKind::ScrollUp => app.move_highlight(-1),
        _ => {}
    }
}
