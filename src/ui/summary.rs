use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::state::AppState;
use crate::theme::theme;

/// What: Heading line of the summary pane.
///
/// Output:
/// - `"1 item selected:"` or `"N items selected:"`.
#[must_use]
pub fn summary_heading(count: usize) -> String {
    let noun = if count == 1 { "item" } else { "items" };
    format!("{count} {noun} selected:")
}

/// What: Render the cross-page selection summary.
///
/// Details:
/// - Lists titles of every selected record in id order, regardless of which
///   page they came from. `J`/`K` scroll the list.
pub fn render_summary(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let mut lines: Vec<Line> = Vec::with_capacity(app.selection.len() + 1);
    lines.push(Line::from(Span::styled(
        summary_heading(app.selection.len()),
        Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
    )));
    for record in app.selection.iter() {
        lines.push(Line::from(vec![
            Span::styled("• ", Style::default().fg(th.overlay1)),
            Span::styled(record.title.clone(), Style::default().fg(th.text)),
        ]));
    }
    let p = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .scroll((app.summary_scroll, 0))
        .block(
            Block::default()
                .title(Span::styled(" Selection ", Style::default().fg(th.overlay2)))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.surface2)),
        );
    f.render_widget(p, area);
}
