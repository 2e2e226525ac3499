use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table},
};

use crate::state::{AppState, Artwork, SortColumn, SortDirection};
use crate::theme::{Theme, theme};

/// Width of the checkbox column, shared with the bulk popover anchor.
pub const CHECKBOX_WIDTH: u16 = 3;

const CHECKED: &str = "[x]";
const UNCHECKED: &str = "[ ]";
const PARTIAL: &str = "[-]";

/// Data columns in display order.
const COLUMNS: [SortColumn; 6] = [
    SortColumn::Title,
    SortColumn::Origin,
    SortColumn::Artist,
    SortColumn::Inscriptions,
    SortColumn::StartYear,
    SortColumn::EndYear,
];

/// What: Header checkbox state for the current page.
///
/// Output:
/// - `[x]` when every row is checked, `[-]` when some are, `[ ]` otherwise.
fn header_checkbox(app: &AppState) -> &'static str {
    let checked = app.checked_on_page();
    if checked == 0 {
        UNCHECKED
    } else if checked == app.records.len() {
        CHECKED
    } else {
        PARTIAL
    }
}

/// Column header text with a direction marker on the active sort column.
fn header_label(col: SortColumn, app: &AppState) -> String {
    let label = col.label().unwrap_or_default();
    if col == app.sort_column {
        let arrow = match app.sort_direction {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        };
        format!("{label} {arrow}")
    } else {
        label.to_string()
    }
}

fn cell_text(record: &Artwork, col: SortColumn) -> String {
    match col {
        SortColumn::Title | SortColumn::Catalog => record.title.clone(),
        SortColumn::Origin => record.place_of_origin.clone(),
        SortColumn::Artist => record.artist_display.clone(),
        SortColumn::Inscriptions => record.inscriptions.clone(),
        SortColumn::StartYear => record.start_year_label(),
        SortColumn::EndYear => record.end_year_label(),
    }
}

fn record_row<'a>(record: &Artwork, checked: bool, th: &Theme) -> Row<'a> {
    let (mark, mark_style) = if checked {
        (CHECKED, Style::default().fg(th.green).add_modifier(Modifier::BOLD))
    } else {
        (UNCHECKED, Style::default().fg(th.overlay1))
    };
    let mut cells = vec![Cell::from(Span::styled(mark, mark_style))];
    cells.extend(COLUMNS.iter().map(|&c| {
        // Multi-line catalog text would break row height
        Cell::from(cell_text(record, c).replace(['\n', '\r'], " "))
    }));
    Row::new(cells).style(Style::default().fg(th.text))
}

/// What: Render the artworks table into `area`.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (records, selection, highlight, sort)
/// - `area`: Target rectangle
///
/// Details:
/// - While the first page is still loading, or when a page came back empty,
///   a placeholder line replaces the rows.
pub fn render_table(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let title = format!(
        " Artworks · {} selected on page · {} total selected ",
        app.checked_on_page(),
        app.selection.len()
    );
    let block = Block::default()
        .title(Line::from(Span::styled(
            title,
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        )))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface2));

    if app.records.is_empty() {
        let msg = if app.loading {
            "Loading artworks…"
        } else {
            "No artworks on this page"
        };
        let p = Paragraph::new(Span::styled(msg, Style::default().fg(th.subtext0))).block(block);
        f.render_widget(p, area);
        return;
    }

    let mut header_cells = vec![Cell::from(header_checkbox(app))];
    header_cells.extend(COLUMNS.iter().map(|&c| Cell::from(header_label(c, app))));
    let header = Row::new(header_cells).style(
        Style::default()
            .fg(th.sapphire)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = app
        .records
        .iter()
        .map(|r| record_row(r, app.selection.contains(r.id), &th))
        .collect();

    let widths = [
        Constraint::Length(CHECKBOX_WIDTH),
        Constraint::Percentage(24),
        Constraint::Percentage(14),
        Constraint::Percentage(24),
        Constraint::Percentage(20),
        Constraint::Length(10),
        Constraint::Length(10),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1)
        .row_highlight_style(Style::default().fg(th.base).bg(th.lavender));

    app.table_state.select(Some(app.highlighted));
    f.render_stateful_widget(table, area, &mut app.table_state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ArtworkPage;
    use crate::ui::test_support::render_rows;

    fn art(id: u64, title: &str) -> Artwork {
        Artwork {
            id,
            title: title.into(),
            place_of_origin: "Unknown".into(),
            artist_display: "Unknown".into(),
            inscriptions: "-".into(),
            date_start: None,
            date_end: Some(1888),
        }
    }

    fn app_with(items: Vec<Artwork>) -> AppState {
        let mut app = AppState::default();
        let total = items.len() as u64;
        app.apply_page(ArtworkPage {
            items,
            total,
            total_pages: 1,
            current_page: 1,
            limit: 12,
            offset: 0,
            next_url: None,
        });
        app
    }

    #[test]
    /// What: Checked rows render `[x]` and the header shows partial state.
    fn checkboxes_reflect_selection() {
        let mut app = app_with(vec![art(1, "Nighthawks"), art(2, "Water Lilies")]);
        app.selection.insert(art(2, "Water Lilies"));
        assert_eq!(header_checkbox(&app), PARTIAL);
        // The summary pane repeats selected titles on the same lines, so
        // match the checkbox and title together.
        let text = render_rows(&mut app, 140, 12);
        assert!(text.iter().any(|l| l.contains("[ ] Nighthawks")));
        assert!(text.iter().any(|l| l.contains("[x] Water Lilies")));
        assert!(!text.iter().any(|l| l.contains("[x] Nighthawks")));
    }

    #[test]
    fn headers_and_missing_years() {
        let mut app = app_with(vec![art(1, "Nighthawks")]);
        app.sort_column = SortColumn::Title;
        let text = render_rows(&mut app, 140, 8).join("\n");
        assert!(text.contains("Title ▲"));
        assert!(text.contains("Place of Origin"));
        assert!(text.contains("1888"));
    }

    #[test]
    fn loading_placeholder() {
        let mut app = AppState {
            loading: true,
            ..AppState::default()
        };
        let text = render_rows(&mut app, 80, 6).join("\n");
        assert!(text.contains("Loading artworks"));
    }
}
