//! Core value types used by artable state.

use serde::{Deserialize, Serialize};

/// Title shown when the catalog has no title for a record.
pub const UNTITLED: &str = "Untitled";
/// Placeholder for missing origin or artist text.
pub const UNKNOWN: &str = "Unknown";
/// Placeholder for missing inscriptions and years.
pub const DASH: &str = "-";

/// One artwork row as shown in the table.
///
/// Text fields are already normalized to their display defaults; only the
/// years stay optional so they can be sorted numerically.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    /// Catalog identifier, unique and stable across pages.
    pub id: u64,
    /// Artwork title.
    pub title: String,
    /// Place of origin.
    pub place_of_origin: String,
    /// Artist display string (name, nationality, dates).
    pub artist_display: String,
    /// Inscriptions text.
    pub inscriptions: String,
    /// Start year, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_start: Option<i64>,
    /// End year, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_end: Option<i64>,
}

impl Artwork {
    /// What: Render the start year for display.
    ///
    /// Output:
    /// - The year as text, or `"-"` when unknown.
    #[must_use]
    pub fn start_year_label(&self) -> String {
        self.date_start
            .map_or_else(|| DASH.to_string(), |y| y.to_string())
    }

    /// What: Render the end year for display.
    ///
    /// Output:
    /// - The year as text, or `"-"` when unknown.
    #[must_use]
    pub fn end_year_label(&self) -> String {
        self.date_end.map_or_else(|| DASH.to_string(), |y| y.to_string())
    }
}

/// One fetched batch of records plus the pagination metadata reported with it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArtworkPage {
    /// Records in the order the catalog returned them.
    pub items: Vec<Artwork>,
    /// Total number of records matching the query.
    pub total: u64,
    /// Page count as reported by the catalog.
    pub total_pages: u64,
    /// 1-based page number the catalog says it served.
    pub current_page: u64,
    /// Page size the catalog says it served.
    pub limit: u64,
    /// Row offset of the first item.
    pub offset: u64,
    /// Link to the next page, if the catalog provided one.
    pub next_url: Option<String>,
}

/// Page request sent to the background page worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    /// Monotonic identifier used to correlate responses.
    pub id: u64,
    /// 1-based page number.
    pub page: u64,
    /// Page size.
    pub limit: u64,
}

/// Outcome of a prior [`PageRequest`].
#[derive(Debug)]
pub struct PageResults {
    /// Echoed identifier from the originating request.
    pub id: u64,
    /// Echoed request so handlers can log what settled.
    pub request: PageRequest,
    /// The normalized page, or the error rendered for display.
    pub outcome: Result<ArtworkPage, String>,
}

/// Column the current page is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortColumn {
    /// Keep the order returned by the catalog.
    #[default]
    Catalog,
    /// Title, case-insensitive.
    Title,
    /// Place of origin, case-insensitive.
    Origin,
    /// Artist display string, case-insensitive.
    Artist,
    /// Inscriptions, case-insensitive.
    Inscriptions,
    /// Start year; unknown years sort last.
    StartYear,
    /// End year; unknown years sort last.
    EndYear,
}

impl SortColumn {
    /// What: Advance to the next sort column, wrapping back to catalog order.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Catalog => Self::Title,
            Self::Title => Self::Origin,
            Self::Origin => Self::Artist,
            Self::Artist => Self::Inscriptions,
            Self::Inscriptions => Self::StartYear,
            Self::StartYear => Self::EndYear,
            Self::EndYear => Self::Catalog,
        }
    }

    /// Header label of the column, or `None` for catalog order.
    #[must_use]
    pub const fn label(self) -> Option<&'static str> {
        match self {
            Self::Catalog => None,
            Self::Title => Some("Title"),
            Self::Origin => Some("Place of Origin"),
            Self::Artist => Some("Artist"),
            Self::Inscriptions => Some("Inscriptions"),
            Self::StartYear => Some("Start Year"),
            Self::EndYear => Some("End Year"),
        }
    }
}

/// Sort direction for the active [`SortColumn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// Flip the direction.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Table behaviour switches, replacing the separate table variants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableOptions {
    /// Page sizes the paginator offers. Never empty.
    pub page_size_choices: Vec<u64>,
    /// Keep selections from other pages when the current page changes.
    pub persistent_selection: bool,
    /// Allow the "select first N rows" popover.
    pub bulk_select: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            page_size_choices: vec![12],
            persistent_selection: true,
            bulk_select: true,
        }
    }
}

impl TableOptions {
    /// What: Snap a requested page size onto the allowed choices.
    ///
    /// Inputs:
    /// - `size`: Requested page size.
    ///
    /// Output:
    /// - `size` when it is a valid choice; otherwise the first choice (or 12
    ///   if the list was somehow emptied).
    #[must_use]
    pub fn snap_page_size(&self, size: u64) -> u64 {
        if self.page_size_choices.contains(&size) {
            size
        } else {
            self.page_size_choices.first().copied().unwrap_or(12)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn art(id: u64) -> Artwork {
        Artwork {
            id,
            title: UNTITLED.into(),
            place_of_origin: UNKNOWN.into(),
            artist_display: UNKNOWN.into(),
            inscriptions: DASH.into(),
            date_start: None,
            date_end: Some(1890),
        }
    }

    #[test]
    fn year_labels_fall_back_to_dash() {
        let a = art(1);
        assert_eq!(a.start_year_label(), "-");
        assert_eq!(a.end_year_label(), "1890");
    }

    #[test]
    fn sort_column_cycle_returns_to_catalog() {
        let mut col = SortColumn::Catalog;
        for _ in 0..7 {
            col = col.next();
        }
        assert_eq!(col, SortColumn::Catalog);
        assert_eq!(SortColumn::Title.label(), Some("Title"));
    }

    #[test]
    fn snap_page_size_keeps_only_allowed_values() {
        let opts = TableOptions {
            page_size_choices: vec![10, 12, 25],
            ..TableOptions::default()
        };
        assert_eq!(opts.snap_page_size(25), 25);
        assert_eq!(opts.snap_page_size(7), 10);
    }
}
