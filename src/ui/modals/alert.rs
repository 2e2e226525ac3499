use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::theme::theme;

pub fn render_alert(f: &mut Frame, message: &str, area: Rect) {
    let th = theme();
    let rect = super::centered(area, 64, 7);
    f.render_widget(Clear, rect);
    let lines = vec![
        Line::from(Span::styled(message.to_string(), Style::default().fg(th.text))),
        Line::from(""),
        Line::from(Span::styled(
            "Enter/Esc to close",
            Style::default().fg(th.overlay1),
        )),
    ];
    let p = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(Span::styled(
                " Notice ",
                Style::default().fg(th.red).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(th.red))
            .style(Style::default().bg(th.mantle)),
    );
    f.render_widget(p, rect);
}
