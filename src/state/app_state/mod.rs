//! Central `AppState` container.

use ratatui::widgets::TableState;

use crate::logic::{PaginationCursor, SelectionSet, page_count};
use crate::state::modal::Modal;
use crate::state::types::{Artwork, ArtworkPage, SortColumn, SortDirection, TableOptions};

mod methods;

/// Global application state shared by the event, networking, and UI layers.
///
/// Owned by the UI task and mutated only on its turn; background workers
/// talk to it through channels.
#[derive(Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppState {
    // Page loader
    /// Last accepted page as it came from the catalog (catalog order).
    pub page: ArtworkPage,
    /// Rows of `page` in rendered order (after the active sort).
    pub records: Vec<Artwork>,
    /// Total number of records reported for the current query.
    pub total: u64,
    /// Which page is requested and at what size.
    pub cursor: PaginationCursor,
    /// Whether the latest page request is still in flight.
    pub loading: bool,
    /// Last fetch error, shown in the footer until the next accepted page.
    pub last_error: Option<String>,

    // Request coordination
    /// Identifier of the latest page request; older results are discarded.
    pub latest_request_id: u64,
    /// Next request identifier to allocate.
    pub next_request_id: u64,

    // Selection
    /// Everything checked across all pages visited this session.
    pub selection: SelectionSet,
    /// Table behaviour switches (page sizes, persistence, bulk select).
    pub options: TableOptions,

    // Table view
    /// Index into `records` that is currently highlighted.
    pub highlighted: usize,
    /// Table widget state (highlight and scroll offset).
    pub table_state: TableState,
    /// Active sort column for the current page.
    pub sort_column: SortColumn,
    /// Active sort direction.
    pub sort_direction: SortDirection,
    /// Scroll offset of the selection summary pane.
    pub summary_scroll: u16,
    /// Tick counter driving the loading spinner.
    pub tick: u64,

    /// Active modal dialog, if any.
    pub modal: Modal,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            page: ArtworkPage::default(),
            records: Vec::new(),
            total: 0,
            cursor: PaginationCursor::default(),
            loading: false,
            last_error: None,
            latest_request_id: 0,
            next_request_id: 1,
            selection: SelectionSet::new(),
            options: TableOptions::default(),
            highlighted: 0,
            table_state: TableState::default(),
            sort_column: SortColumn::default(),
            sort_direction: SortDirection::default(),
            summary_scroll: 0,
            tick: 0,
            modal: Modal::None,
        }
    }
}

impl AppState {
    /// Number of pages for the current total and page size.
    #[must_use]
    pub const fn page_count(&self) -> u64 {
        page_count(self.total, self.cursor.page_size)
    }
}
