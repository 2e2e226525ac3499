//! Cross-page selection reconciliation.
//!
//! The table only ever reports what is checked on the page it is showing.
//! `merge` folds that report into the session-wide [`SelectionSet`] so
//! selections made on other pages survive page changes.

use std::collections::{BTreeMap, HashSet};

use crate::state::{AppState, Artwork};

/// Records the user has checked, keyed by catalog identifier.
///
/// Holds at most one entry per identifier. Iteration is ordered by
/// identifier so the summary pane is stable between frames.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionSet {
    /// Selected records by id.
    entries: BTreeMap<u64, Artwork>,
}

impl SelectionSet {
    /// Empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of selected records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the record with `id` is selected.
    #[must_use]
    pub fn contains(&self, id: u64) -> bool {
        self.entries.contains_key(&id)
    }

    /// Insert or replace a record. Returns `true` if the id was new.
    pub fn insert(&mut self, record: Artwork) -> bool {
        self.entries.insert(record.id, record).is_none()
    }

    /// Drop every selection.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Selected records ordered by id.
    pub fn iter(&self) -> impl Iterator<Item = &Artwork> {
        self.entries.values()
    }

    /// Selected identifiers in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.entries.keys().copied()
    }
}

impl FromIterator<Artwork> for SelectionSet {
    fn from_iter<T: IntoIterator<Item = Artwork>>(iter: T) -> Self {
        let mut set = Self::new();
        for record in iter {
            set.insert(record);
        }
        set
    }
}

impl Extend<Artwork> for SelectionSet {
    fn extend<T: IntoIterator<Item = Artwork>>(&mut self, iter: T) {
        for record in iter {
            self.insert(record);
        }
    }
}

/// What: Identifiers of the rows on a page.
#[must_use]
pub fn page_ids(records: &[Artwork]) -> HashSet<u64> {
    records.iter().map(|r| r.id).collect()
}

/// What: Fold the current page's checkbox state into the global selection.
///
/// Inputs:
/// - `current_page_selection`: Everything checked on the page right now.
/// - `current_page_ids`: Identifiers of every row on the page.
/// - `prior`: The selection before this change.
///
/// Output:
/// - `prior` minus every entry on this page, plus `current_page_selection`.
///
/// Details:
/// - Pure and idempotent; unchecking a row on this page drops it while rows
///   belonging to other pages are untouched.
#[must_use]
pub fn merge(
    current_page_selection: &[Artwork],
    current_page_ids: &HashSet<u64>,
    prior: &SelectionSet,
) -> SelectionSet {
    let mut next: SelectionSet = prior
        .iter()
        .filter(|r| !current_page_ids.contains(&r.id))
        .cloned()
        .collect();
    next.extend(current_page_selection.iter().cloned());
    next
}

/// What: Select the first `n` rows of the page and merge them in.
///
/// Inputs:
/// - `n`: Requested count; zero or negative selects nothing on this page.
/// - `page_records`: Rows in rendered order.
/// - `prior`: Selection before the action.
///
/// Output:
/// - New selection where this page has exactly its first `min(max(n, 0), len)`
///   rows checked; other pages are kept.
#[must_use]
pub fn bulk_select(n: i64, page_records: &[Artwork], prior: &SelectionSet) -> SelectionSet {
    merge(first_n(n, page_records), &page_ids(page_records), prior)
}

/// What: The first `n` rows, with `n` clamped into `0..=records.len()`.
fn first_n(n: i64, records: &[Artwork]) -> &[Artwork] {
    let take = usize::try_from(n.max(0))
        .unwrap_or(usize::MAX)
        .min(records.len());
    &records[..take]
}

/// What: Rows of this page that are currently selected, in rendered order.
#[must_use]
pub fn current_page_selection(page_records: &[Artwork], selection: &SelectionSet) -> Vec<Artwork> {
    page_records
        .iter()
        .filter(|r| selection.contains(r.id))
        .cloned()
        .collect()
}

/// Apply a reported page selection, honoring the persistence option.
fn reconcile(app: &mut AppState, page_selection: &[Artwork]) {
    if app.options.persistent_selection {
        app.selection = merge(page_selection, &page_ids(&app.records), &app.selection);
    } else {
        app.selection = page_selection.iter().cloned().collect();
    }
    tracing::debug!(
        page = app.cursor.page_number(),
        on_page = page_selection.len(),
        total = app.selection.len(),
        "selection reconciled"
    );
}

/// What: Flip the checkbox of the highlighted row.
///
/// Details:
/// - Builds the page's new checked set the way the table widget would report
///   it and hands that to [`merge`].
pub fn toggle_highlighted(app: &mut AppState) {
    let Some(target) = app.records.get(app.highlighted).map(|r| r.id) else {
        return;
    };
    let mut page_selection = current_page_selection(&app.records, &app.selection);
    if let Some(pos) = page_selection.iter().position(|r| r.id == target) {
        page_selection.remove(pos);
    } else if let Some(record) = app.records.get(app.highlighted) {
        page_selection.push(record.clone());
    }
    reconcile(app, &page_selection);
}

/// Check every row on the current page.
pub fn select_page(app: &mut AppState) {
    let all = app.records.clone();
    reconcile(app, &all);
}

/// Uncheck every row on the current page.
pub fn clear_page(app: &mut AppState) {
    reconcile(app, &[]);
}

/// Drop the whole cross-page selection.
pub fn clear_all(app: &mut AppState) {
    tracing::info!(dropped = app.selection.len(), "selection cleared");
    app.selection.clear();
}

/// What: Check the first `n` rows of the page as rendered.
///
/// Details:
/// - Clamps `n` into `0..=records.len()`; never fails.
pub fn bulk_select_first(app: &mut AppState, n: i64) {
    let first = first_n(n, &app.records).to_vec();
    tracing::info!(requested = n, selected = first.len(), "bulk select");
    reconcile(app, &first);
}
