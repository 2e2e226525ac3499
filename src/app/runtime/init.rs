use crate::logic::PaginationCursor;
use crate::state::{AppState, TableOptions};
use crate::theme::Settings;

/// What: Apply effective settings to a fresh `AppState`.
///
/// Inputs:
/// - `app`: Application state to configure.
/// - `prefs`: Settings after file parsing and CLI overrides.
/// - `start_page`: 1-based page to open first.
///
/// Output:
/// - Sets table options and positions the cursor at `start_page` with the default page size.
pub fn apply_settings_to_app_state(app: &mut AppState, prefs: &Settings, start_page: u64) {
    app.options = TableOptions {
        page_size_choices: prefs.page_size_options.clone(),
        persistent_selection: prefs.persistent_selection,
        bulk_select: prefs.bulk_select,
    };
    let size = app.options.snap_page_size(prefs.default_page_size);
    app.cursor = PaginationCursor::at_page(start_page, size);
    tracing::info!(
        page = app.cursor.page_number(),
        page_size = size,
        choices = ?app.options.page_size_choices,
        persistent = app.options.persistent_selection,
        bulk_select = app.options.bulk_select,
        "table configured"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_become_table_options_and_cursor() {
        let prefs = Settings {
            page_size_options: vec![10, 12],
            default_page_size: 10,
            persistent_selection: false,
            bulk_select: false,
            ..Settings::default()
        };
        let mut app = AppState::default();
        apply_settings_to_app_state(&mut app, &prefs, 3);
        assert_eq!(app.cursor.page_size, 10);
        assert_eq!(app.cursor.offset, 20);
        assert!(!app.options.persistent_selection);
        assert!(!app.options.bulk_select);
        assert_eq!(app.options.page_size_choices, vec![10, 12]);
    }
}
