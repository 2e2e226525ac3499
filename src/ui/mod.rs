//! Rendering for the artworks table.
//!
//! Layout: the table fills the screen, the selection summary takes a column
//! on the right while anything is selected, and a one-line footer sits at the
//! bottom. Modals are drawn last, over everything.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};

use crate::state::AppState;
use crate::theme::theme;

mod footer;
mod modals;
mod summary;
mod table;

/// What: Draw one frame.
///
/// Inputs:
/// - `f`: Frame to render into.
/// - `app`: Application state; the table state is updated for scrolling.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let table_area = if app.selection.is_empty() {
        rows[0]
    } else {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(rows[0]);
        summary::render_summary(f, app, cols[1]);
        cols[0]
    };

    table::render_table(f, app, table_area);
    footer::render_footer(f, app, rows[1]);
    modals::render_modals(f, app, area, table_area);
}
