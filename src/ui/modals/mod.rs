//! Modal overlays drawn above the table.

use ratatui::{Frame, prelude::Rect};

use crate::state::{AppState, Modal};

mod alert;
mod bulk;
mod help;

/// What: Draw the active modal, if any.
///
/// Inputs:
/// - `area`: Whole frame, used to center dialogs.
/// - `table_area`: Table block, used to anchor the bulk popover at the Title header.
pub fn render_modals(f: &mut Frame, app: &AppState, area: Rect, table_area: Rect) {
    match &app.modal {
        Modal::None => {}
        Modal::Alert { message } => alert::render_alert(f, message, area),
        Modal::Help => help::render_help(f, area),
        Modal::BulkSelect { input } => {
            bulk::render_bulk_select(f, input, app.records.len(), table_area);
        }
    }
}

/// Rectangle of at most `w`x`h` centered in `area`.
fn centered(area: Rect, w: u16, h: u16) -> Rect {
    let w = w.min(area.width);
    let h = h.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}
