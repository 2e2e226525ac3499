//! Pagination cursor arithmetic.

/// Row offset plus page size; determines which page is requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaginationCursor {
    /// Zero-based offset of the first row on the page.
    pub offset: u64,
    /// Rows per page. Always at least 1.
    pub page_size: u64,
}

impl Default for PaginationCursor {
    fn default() -> Self {
        Self {
            offset: 0,
            page_size: 12,
        }
    }
}

/// What: Number of pages needed to show `total` rows at `page_size` rows each.
///
/// Output:
/// - `ceil(total / page_size)`, never less than 1 so an empty catalog still
///   has a page to show.
#[must_use]
pub const fn page_count(total: u64, page_size: u64) -> u64 {
    let size = if page_size == 0 { 1 } else { page_size };
    let pages = total.div_ceil(size);
    if pages == 0 { 1 } else { pages }
}

impl PaginationCursor {
    /// Build a cursor at the given 1-based page.
    #[must_use]
    pub const fn at_page(page: u64, page_size: u64) -> Self {
        let size = if page_size == 0 { 1 } else { page_size };
        let page = if page == 0 { 1 } else { page };
        Self {
            offset: (page - 1).saturating_mul(size),
            page_size: size,
        }
    }

    /// 1-based page number: `floor(offset / page_size) + 1`.
    #[must_use]
    pub const fn page_number(&self) -> u64 {
        let size = if self.page_size == 0 { 1 } else { self.page_size };
        self.offset / size + 1
    }

    /// What: Move to another 1-based page, clamped to `1..=page_count(total)`.
    ///
    /// Output:
    /// - `true` when the offset changed and a fetch is needed.
    pub fn go_to_page(&mut self, page: u64, total: u64) -> bool {
        let last = page_count(total, self.page_size);
        let target = page.clamp(1, last);
        let offset = (target - 1).saturating_mul(self.page_size.max(1));
        if offset == self.offset {
            return false;
        }
        self.offset = offset;
        true
    }

    /// Advance one page if there is one. Returns whether the cursor moved.
    pub fn next_page(&mut self, total: u64) -> bool {
        self.go_to_page(self.page_number().saturating_add(1), total)
    }

    /// Go back one page if possible. Returns whether the cursor moved.
    pub fn prev_page(&mut self, total: u64) -> bool {
        self.go_to_page(self.page_number().saturating_sub(1), total)
    }

    /// What: Change the page size.
    ///
    /// Inputs:
    /// - `size`: New rows per page (0 is treated as 1).
    ///
    /// Output:
    /// - `true` when either the size or the offset changed.
    ///
    /// Details:
    /// - The offset always resets to 0 so the first page of the new size is
    ///   shown.
    pub fn set_page_size(&mut self, size: u64) -> bool {
        let size = size.max(1);
        let changed = size != self.page_size || self.offset != 0;
        self.page_size = size;
        self.offset = 0;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: A start page far past any real catalog saturates instead of overflowing.
    fn huge_start_page_saturates() {
        let c = PaginationCursor::at_page(u64::MAX, 12);
        assert_eq!(c.offset, u64::MAX);
        assert_eq!(c.page_size, 12);
        assert_eq!(c.page_number(), u64::MAX / 12 + 1);
    }

    #[test]
    fn page_number_is_floor_offset_over_size_plus_one() {
        let c = PaginationCursor {
            offset: 25,
            page_size: 12,
        };
        assert_eq!(c.page_number(), 3);
        assert_eq!(PaginationCursor::default().page_number(), 1);
    }

    #[test]
    fn page_count_rounds_up_and_never_hits_zero() {
        assert_eq!(page_count(5000, 12), 417);
        assert_eq!(page_count(24, 12), 2);
        assert_eq!(page_count(0, 12), 1);
        assert_eq!(page_count(10, 0), 10);
    }

    #[test]
    fn navigation_is_clamped_to_known_pages() {
        let mut c = PaginationCursor::at_page(1, 10);
        assert!(!c.prev_page(35));
        assert!(c.next_page(35));
        assert_eq!(c.offset, 10);
        assert!(c.go_to_page(99, 35));
        assert_eq!(c.page_number(), 4);
        assert!(!c.next_page(35));
    }

    #[test]
    fn page_size_change_resets_offset() {
        let mut c = PaginationCursor::at_page(5, 12);
        assert!(c.set_page_size(25));
        assert_eq!(c.offset, 0);
        assert_eq!(c.page_size, 25);
        assert!(!c.set_page_size(25));
    }
}
