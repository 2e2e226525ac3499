use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::AppState;
use crate::theme::theme;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// What: Pagination summary shown in the footer.
///
/// Output:
/// - `"Page P of C · T records · size L"`.
#[must_use]
pub fn page_label(app: &AppState) -> String {
    format!(
        "Page {} of {} · {} records · size {}",
        app.cursor.page_number(),
        app.page_count(),
        app.total,
        app.cursor.page_size
    )
}

/// What: Render the one-line footer: pagination, loading spinner, last error, help hint.
pub fn render_footer(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let mut spans = vec![Span::styled(
        format!(" {} ", page_label(app)),
        Style::default().fg(th.subtext0),
    )];
    if app.loading {
        let frame = SPINNER[usize::try_from(app.tick % 10).unwrap_or(0)];
        spans.push(Span::styled(
            format!(" {frame} loading "),
            Style::default().fg(th.yellow),
        ));
    }
    if let Some(err) = &app.last_error {
        spans.push(Span::styled(
            format!(" ✗ {err} "),
            Style::default().fg(th.red),
        ));
    }
    spans.push(Span::styled(
        "  ? help",
        Style::default().fg(th.overlay1),
    ));
    f.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(th.mantle)),
        area,
    );
}
