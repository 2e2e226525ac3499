use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::theme::theme;

const BINDINGS: &[(&str, &str)] = &[
    ("Up/Down, j/k", "Move highlight"),
    ("Space/Enter", "Toggle row"),
    ("a", "Select page"),
    ("x", "Clear page"),
    ("X", "Clear all pages"),
    ("n", "Select first N rows"),
    ("Left/Right, h/l", "Previous/next page"),
    ("g / G", "First/last page"),
    ("+ / -", "Page size"),
    ("s / S", "Sort column/direction"),
    ("J / K", "Scroll selection list"),
    ("r", "Reload page"),
    ("q, Esc, Ctrl-C", "Quit"),
];

pub fn render_help(f: &mut Frame, area: Rect) {
    let th = theme();
    let height = u16::try_from(BINDINGS.len() + 4).unwrap_or(u16::MAX);
    let rect = super::centered(area, 56, height);
    f.render_widget(Clear, rect);

    let mut lines: Vec<Line<'static>> = Vec::with_capacity(BINDINGS.len() + 2);
    for (keys, action) in BINDINGS {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{keys:18}"),
                Style::default()
                    .fg(th.overlay1)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(*action, Style::default().fg(th.text)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter/Esc to close",
        Style::default().fg(th.subtext0),
    )));

    let p = Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(
                " Help ",
                Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(th.mauve))
            .style(Style::default().bg(th.mantle)),
    );
    f.render_widget(p, rect);
}
