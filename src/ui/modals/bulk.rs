use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::theme::theme;
use crate::ui::table::CHECKBOX_WIDTH;

const POPOVER_W: u16 = 34;
const POPOVER_H: u16 = 5;

/// What: Place the popover just under the Title header cell.
///
/// Details:
/// - Border (1) plus the checkbox column and one column of spacing puts `x`
///   at the Title header; the header row sits one line under the top border.
fn anchor(table_area: Rect) -> Rect {
    let x = table_area.x + 1 + CHECKBOX_WIDTH + 1;
    let y = table_area.y + 2;
    let right = table_area.x + table_area.width;
    let bottom = table_area.y + table_area.height;
    let width = POPOVER_W.min(right.saturating_sub(x));
    let height = POPOVER_H.min(bottom.saturating_sub(y));
    Rect {
        x,
        y,
        width,
        height,
    }
}

/// What: Render the "select first N rows" popover.
///
/// Inputs:
/// - `input`: Digits typed so far.
/// - `rows`: Rows on the current page, shown as a hint.
/// - `table_area`: Table block the popover is anchored to.
pub fn render_bulk_select(f: &mut Frame, input: &str, rows: usize, table_area: Rect) {
    let th = theme();
    let rect = anchor(table_area);
    if rect.width < 3 || rect.height < 3 {
        return;
    }
    f.render_widget(Clear, rect);
    let lines = vec![
        Line::from(vec![
            Span::styled("Rows: ", Style::default().fg(th.overlay2)),
            Span::styled(
                format!("{input}_"),
                Style::default().fg(th.text).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("{rows} on this page · Enter/Esc"),
            Style::default().fg(th.overlay1),
        )),
    ];
    let p = Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(
                " Select rows ",
                Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.sapphire))
            .style(Style::default().bg(th.mantle)),
    );
    f.render_widget(p, rect);
}
