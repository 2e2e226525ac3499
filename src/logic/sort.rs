use std::cmp::Ordering;

use crate::state::{AppState, Artwork, SortColumn, SortDirection};

/// What: Order two optional years, unknown years last regardless of direction.
fn cmp_year(a: Option<i64>, b: Option<i64>, dir: SortDirection) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => match dir {
            SortDirection::Ascending => x.cmp(&y),
            SortDirection::Descending => y.cmp(&x),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// What: Case-insensitive text comparison honoring direction.
fn cmp_text(a: &str, b: &str, dir: SortDirection) -> Ordering {
    let ord = a.to_lowercase().cmp(&b.to_lowercase());
    match dir {
        SortDirection::Ascending => ord,
        SortDirection::Descending => ord.reverse(),
    }
}

/// What: Sort a page of records by a column.
///
/// Inputs:
/// - `records`: Rows in catalog order; sorted in place.
/// - `column`: Active sort column. `Catalog` leaves the order untouched.
/// - `dir`: Sort direction.
///
/// Details:
/// - Stable, so ties keep catalog order.
pub fn sort_records(records: &mut [Artwork], column: SortColumn, dir: SortDirection) {
    match column {
        SortColumn::Catalog => {}
        SortColumn::Title => records.sort_by(|a, b| cmp_text(&a.title, &b.title, dir)),
        SortColumn::Origin => {
            records.sort_by(|a, b| cmp_text(&a.place_of_origin, &b.place_of_origin, dir));
        }
        SortColumn::Artist => {
            records.sort_by(|a, b| cmp_text(&a.artist_display, &b.artist_display, dir));
        }
        SortColumn::Inscriptions => {
            records.sort_by(|a, b| cmp_text(&a.inscriptions, &b.inscriptions, dir));
        }
        SortColumn::StartYear => records.sort_by(|a, b| cmp_year(a.date_start, b.date_start, dir)),
        SortColumn::EndYear => records.sort_by(|a, b| cmp_year(a.date_end, b.date_end, dir)),
    }
}

/// What: Rebuild `app.records` from the fetched page using the active sort.
///
/// Inputs:
/// - `app`: Mutable application state (page, records, highlighted, sort settings)
///
/// Output:
/// - Re-sorts `app.records` and keeps the highlight on the same record when possible;
///   otherwise clamps the index.
pub fn sort_records_preserve_highlight(app: &mut AppState) {
    let prev_id = app.records.get(app.highlighted).map(|r| r.id);
    let mut records = app.page.items.clone();
    sort_records(&mut records, app.sort_column, app.sort_direction);
    app.records = records;
    app.highlighted = prev_id
        .and_then(|id| app.records.iter().position(|r| r.id == id))
        .unwrap_or(0)
        .min(app.records.len().saturating_sub(1));
    app.table_state.select(if app.records.is_empty() {
        None
    } else {
        Some(app.highlighted)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn art(id: u64, title: &str, start: Option<i64>) -> Artwork {
        Artwork {
            id,
            title: title.into(),
            place_of_origin: "Unknown".into(),
            artist_display: "Unknown".into(),
            inscriptions: "-".into(),
            date_start: start,
            date_end: None,
        }
    }

    #[test]
    /// What: Title sort is case-insensitive and can be reversed.
    fn title_sort_ignores_case() {
        let mut rows = vec![art(1, "banana", None), art(2, "Apple", None), art(3, "cherry", None)];
        sort_records(&mut rows, SortColumn::Title, SortDirection::Ascending);
        let ids: Vec<u64> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
        sort_records(&mut rows, SortColumn::Title, SortDirection::Descending);
        let ids: Vec<u64> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    /// What: Unknown years stay at the bottom in both directions.
    fn missing_years_sort_last() {
        let mut rows = vec![art(1, "a", None), art(2, "b", Some(1900)), art(3, "c", Some(1500))];
        sort_records(&mut rows, SortColumn::StartYear, SortDirection::Ascending);
        let ids: Vec<u64> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        sort_records(&mut rows, SortColumn::StartYear, SortDirection::Descending);
        let ids: Vec<u64> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    /// What: Re-sorting keeps the highlight on the same record.
    fn resort_keeps_highlighted_record() {
        let items = vec![art(1, "b", None), art(2, "a", None)];
        let mut app = AppState::default();
        app.page.items.clone_from(&items);
        app.records = items;
        app.highlighted = 0;
        app.sort_column = SortColumn::Title;
        sort_records_preserve_highlight(&mut app);
        assert_eq!(app.records[app.highlighted].id, 1);
        assert_eq!(app.highlighted, 1);
    }
}
