//! Table keymap: selection, paging, sorting and dialogs.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::logic::selection::{clear_all, clear_page, select_page, toggle_highlighted};
use crate::logic::{send_page_request, sort_records_preserve_highlight};
use crate::state::{AppState, Modal, PageRequest};

/// What: Handle a key press on the table when no modal is open.
///
/// Output:
/// - `true` when the key asks the application to exit.
///
/// Details:
/// - Paging keys only issue a request when the cursor actually moved.
pub fn handle_table_key(
    ke: KeyEvent,
    app: &mut AppState,
    page_tx: &mpsc::UnboundedSender<PageRequest>,
) -> bool {
    if ke.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(ke.code, KeyCode::Char('c'));
    }
    let total = app.total;
    let refetch = match ke.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,

        // Highlight
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_highlight(-1);
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_highlight(1);
            false
        }
        KeyCode::Home => {
            app.move_highlight(isize::MIN);
            false
        }
        KeyCode::End => {
            app.move_highlight(isize::MAX);
            false
        }

        // Selection
        KeyCode::Char(' ') | KeyCode::Enter => {
            toggle_highlighted(app);
            false
        }
        KeyCode::Char('a') => {
            select_page(app);
            false
        }
        KeyCode::Char('x') => {
            clear_page(app);
            false
        }
        KeyCode::Char('X') => {
            clear_all(app);
            false
        }
        KeyCode::Char('n') => {
            if app.options.bulk_select && !app.records.is_empty() {
                app.modal = Modal::BulkSelect {
                    input: String::new(),
                };
            }
            false
        }

        // Paging
        KeyCode::Right | KeyCode::Char('l') | KeyCode::PageDown => app.cursor.next_page(total),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::PageUp => app.cursor.prev_page(total),
        KeyCode::Char('g') => app.cursor.go_to_page(1, total),
        KeyCode::Char('G') => {
            let last = app.page_count();
            app.cursor.go_to_page(last, total)
        }
        KeyCode::Char('+' | '=') => app.cycle_page_size(true),
        KeyCode::Char('-' | '_') => app.cycle_page_size(false),
        KeyCode::Char('r') => true,

        // Sorting
        KeyCode::Char('s') => {
            app.sort_column = app.sort_column.next();
            sort_records_preserve_highlight(app);
            false
        }
        KeyCode::Char('S') => {
            app.sort_direction = app.sort_direction.toggled();
            sort_records_preserve_highlight(app);
            false
        }

        // Summary pane
        KeyCode::Char('J') => {
            app.summary_scroll = app.summary_scroll.saturating_add(1);
            false
        }
        KeyCode::Char('K') => {
            app.summary_scroll = app.summary_scroll.saturating_sub(1);
            false
        }

        KeyCode::Char('?') => {
            app.modal = Modal::Help;
            false
        }
        _ => false,
    };
    if refetch {
        send_page_request(app, page_tx);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::super::tests::{key, loaded_app};
    use super::super::handle_event;
    use super::*;
    use crate::state::SortColumn;

    #[test]
    /// What: Space toggles the highlighted row in and out of the selection.
    fn space_toggles_highlighted_row() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = loaded_app(&[10, 11, 12], 3);
        handle_event(key(KeyCode::Down), &mut app, &tx);
        handle_event(key(KeyCode::Char(' ')), &mut app, &tx);
        assert!(app.is_checked(11));
        handle_event(key(KeyCode::Char(' ')), &mut app, &tx);
        assert!(app.selection.is_empty());
    }

    #[test]
    /// What: `a` checks the page, `x` unchecks it, `X` clears everything.
    fn page_and_global_selection_keys() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = loaded_app(&[1, 2], 30);
        handle_event(key(KeyCode::Char('a')), &mut app, &tx);
        assert_eq!(app.checked_on_page(), 2);
        handle_event(key(KeyCode::Char('x')), &mut app, &tx);
        assert_eq!(app.checked_on_page(), 0);
        handle_event(key(KeyCode::Char('a')), &mut app, &tx);
        handle_event(key(KeyCode::Char('X')), &mut app, &tx);
        assert!(app.selection.is_empty());
    }

    #[test]
    /// What: Paging right sends a request for page 2; paging left from page 1 does not.
    fn paging_sends_requests_only_when_moving() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = loaded_app(&[1, 2], 30);
        handle_event(key(KeyCode::Left), &mut app, &tx);
        assert!(rx.try_recv().is_err());
        assert!(!app.loading);

        handle_event(key(KeyCode::Right), &mut app, &tx);
        let req = rx.try_recv().expect("request");
        assert_eq!(req.page, 2);
        assert_eq!(req.id, app.latest_request_id);
        assert!(app.loading);

        handle_event(key(KeyCode::Char('G')), &mut app, &tx);
        let req = rx.try_recv().expect("request");
        assert_eq!(req.page, 3);
    }

    #[test]
    /// What: `r` reloads the current page with a fresh id.
    fn reload_issues_new_request() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = loaded_app(&[1], 1);
        handle_event(key(KeyCode::Char('r')), &mut app, &tx);
        let first = rx.try_recv().expect("request");
        handle_event(key(KeyCode::Char('r')), &mut app, &tx);
        let second = rx.try_recv().expect("request");
        assert_eq!(first.page, second.page);
        assert!(second.id > first.id);
    }

    #[test]
    /// What: Page size keys only act when more than one size is configured.
    fn page_size_cycling_requests_first_page() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = loaded_app(&[1], 100);
        handle_event(key(KeyCode::Char('+')), &mut app, &tx);
        assert!(rx.try_recv().is_err());

        app.options.page_size_choices = vec![12, 24];
        app.cursor.offset = 24;
        handle_event(key(KeyCode::Char('+')), &mut app, &tx);
        let req = rx.try_recv().expect("request");
        assert_eq!((req.page, req.limit), (1, 24));
    }

    #[test]
    /// What: `n` opens the bulk popover only when the feature is enabled.
    fn bulk_popover_respects_option() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = loaded_app(&[1], 1);
        app.options.bulk_select = false;
        handle_event(key(KeyCode::Char('n')), &mut app, &tx);
        assert_eq!(app.modal, Modal::None);
        app.options.bulk_select = true;
        handle_event(key(KeyCode::Char('n')), &mut app, &tx);
        assert!(matches!(app.modal, Modal::BulkSelect { .. }));
    }

    #[test]
    /// What: `s` advances the sort column without fetching.
    fn sort_key_cycles_column() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = loaded_app(&[1, 2], 2);
        handle_event(key(KeyCode::Char('s')), &mut app, &tx);
        assert_eq!(app.sort_column, SortColumn::Catalog.next());
        assert!(rx.try_recv().is_err());
    }
}
