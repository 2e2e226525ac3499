//! Methods for `AppState`.

use super::AppState;
use crate::state::types::ArtworkPage;

impl AppState {
    /// What: Replace the current page with a freshly fetched one.
    ///
    /// Inputs:
    /// - `page`: Normalized page from the loader.
    ///
    /// Output:
    /// - Updates `page`, `records` (re-sorted), `total`, and resets the highlight to the top.
    ///
    /// Details:
    /// - The selection set is left alone unless persistence is disabled, in which
    ///   case a new page starts with nothing checked.
    pub fn apply_page(&mut self, page: ArtworkPage) {
        self.total = page.total;
        self.page = page;
        self.last_error = None;
        self.highlighted = 0;
        self.records.clear();
        if !self.options.persistent_selection {
            self.selection.clear();
        }
        crate::logic::sort_records_preserve_highlight(self);
        *self.table_state.offset_mut() = 0;
    }

    /// What: Move the highlighted row by `delta`, clamped to the page.
    pub fn move_highlight(&mut self, delta: isize) {
        if self.records.is_empty() {
            return;
        }
        let last = self.records.len() - 1;
        self.highlighted = self.highlighted.saturating_add_signed(delta).min(last);
        self.table_state.select(Some(self.highlighted));
    }

    /// What: Step through the configured page sizes.
    ///
    /// Inputs:
    /// - `forward`: `true` for the next larger choice, `false` for the previous one.
    ///
    /// Output:
    /// - `true` when the cursor changed and a fetch is needed.
    pub fn cycle_page_size(&mut self, forward: bool) -> bool {
        let choices = &self.options.page_size_choices;
        if choices.len() < 2 {
            return false;
        }
        let pos = choices
            .iter()
            .position(|&c| c == self.cursor.page_size)
            .unwrap_or(0);
        let next = if forward {
            (pos + 1) % choices.len()
        } else {
            (pos + choices.len() - 1) % choices.len()
        };
        let size = choices[next];
        self.cursor.set_page_size(size)
    }

    /// Whether the row with `id` is checked.
    #[must_use]
    pub fn is_checked(&self, id: u64) -> bool {
        self.selection.contains(id)
    }

    /// How many rows of the current page are checked.
    #[must_use]
    pub fn checked_on_page(&self) -> usize {
        self.records
            .iter()
            .filter(|r| self.selection.contains(r.id))
            .count()
    }
}
