//! Width-driven paging over a fixed list of records
//!
//! Page size is derived from the viewport width (1, 2 or 3 records per page)
//! and navigation wraps in both directions. The paginator never owns the
//! records: callers hand it the slice they render from.

use serde::{Deserialize, Serialize};

/// Viewport widths (in pixels) where the page grows to 2 and 3 records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoints {
    /// Width at which two records fit side by side
    pub medium: u32,
    /// Width at which three records fit side by side
    pub large: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            medium: 768,
            large: 1024,
        }
    }
}

/// Number of records shown at once for a viewport width
pub fn page_size(viewport_width: u32, breakpoints: &Breakpoints) -> usize {
    if viewport_width >= breakpoints.large {
        3
    } else if viewport_width >= breakpoints.medium {
        2
    } else {
        1
    }
}

/// `ceil(len / page_size)`, never less than 1
pub fn total_pages(len: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    len.div_ceil(page_size).max(1)
}

/// Records on `page_index`, clamped to what is available
pub fn current_slice<T>(records: &[T], page_index: usize, page_size: usize) -> &[T] {
    let start = page_index.saturating_mul(page_size).min(records.len());
    let end = start.saturating_add(page_size).min(records.len());
    &records[start..end]
}

#[derive(Debug, Clone)]
pub struct Paginator {
    breakpoints: Breakpoints,
    len: usize,
    page_size: usize,
    page_index: usize,
}

impl Paginator {
    /// Start on the first page, sized for `viewport_width`
    pub fn new(len: usize, viewport_width: u32, breakpoints: Breakpoints) -> Self {
        Self {
            breakpoints,
            len,
            page_size: page_size(viewport_width, &breakpoints),
            page_index: 0,
        }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.len, self.page_size)
    }

    /// Slice of `records` on the current page
    ///
    /// `records` should be the list this paginator was built for; a shorter
    /// list just yields a shorter (possibly empty) page.
    pub fn current_slice<'a, T>(&self, records: &'a [T]) -> &'a [T] {
        current_slice(records, self.page_index, self.page_size)
    }

    pub fn next(&mut self) {
        self.page_index = (self.page_index + 1) % self.total_pages();
    }

    pub fn previous(&mut self) {
        let total = self.total_pages();
        self.page_index = (self.page_index + total - 1) % total;
    }

    /// Recompute the page size for a new viewport width
    ///
    /// A page index that falls off the end after shrinking the page count is
    /// clamped to the last page. Returns true if the page size changed.
    pub fn resize(&mut self, viewport_width: u32) -> bool {
        let new_size = page_size(viewport_width, &self.breakpoints);
        if new_size == self.page_size {
            return false;
        }

        tracing::debug!(
            "Page size {} -> {} at width {}px",
            self.page_size,
            new_size,
            viewport_width
        );
        self.page_size = new_size;
        self.page_index = self.page_index.min(self.total_pages() - 1);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LARGE: u32 = 1280;
    const MEDIUM: u32 = 900;
    const SMALL: u32 = 400;

    #[test]
    fn test_page_size_breakpoints() {
        let bp = Breakpoints::default();
        assert_eq!(page_size(0, &bp), 1);
        assert_eq!(page_size(767, &bp), 1);
        assert_eq!(page_size(768, &bp), 2);
        assert_eq!(page_size(1023, &bp), 2);
        assert_eq!(page_size(1024, &bp), 3);
        assert_eq!(page_size(u32::MAX, &bp), 3);
    }

    #[test]
    fn test_page_size_is_monotonic() {
        let bp = Breakpoints::default();
        let mut last = 0;
        for width in (0..3000).step_by(7) {
            let size = page_size(width, &bp);
            assert!((1..=3).contains(&size));
            assert!(size >= last, "page size shrank at {}px", width);
            last = size;
        }
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 3), 1);
        assert_eq!(total_pages(0, 1), 1);
        assert_eq!(total_pages(5, 3), 2);
        assert_eq!(total_pages(6, 3), 2);
        assert_eq!(total_pages(7, 3), 3);
        assert_eq!(total_pages(4, 1), 4);
        assert_eq!(total_pages(4, 0), 4);
    }

    #[test]
    fn test_current_slice_clamps() {
        let records = [0, 1, 2, 3, 4];
        assert_eq!(current_slice(&records, 0, 3), &[0, 1, 2]);
        assert_eq!(current_slice(&records, 1, 3), &[3, 4]);
        assert!(current_slice(&records, 2, 3).is_empty());
        assert!(current_slice(&records, usize::MAX, 3).is_empty());
    }

    #[test]
    fn test_five_projects_on_large_screen() {
        let records = ["a", "b", "c", "d", "e"];
        let mut pager = Paginator::new(records.len(), LARGE, Breakpoints::default());
        assert_eq!(pager.page_size(), 3);
        assert_eq!(pager.total_pages(), 2);
        assert_eq!(pager.current_slice(&records), &["a", "b", "c"]);

        pager.next();
        assert_eq!(pager.page_index(), 1);
        assert_eq!(pager.current_slice(&records), &["d", "e"]);

        pager.next();
        assert_eq!(pager.page_index(), 0);
    }

    #[test]
    fn test_previous_wraps_to_last_page() {
        let mut pager = Paginator::new(4, SMALL, Breakpoints::default());
        pager.previous();
        assert_eq!(pager.page_index(), 3);
        pager.previous();
        assert_eq!(pager.page_index(), 2);
    }

    #[test]
    fn test_next_cycles_back() {
        for len in 0..10 {
            for width in [SMALL, MEDIUM, LARGE] {
                let mut pager = Paginator::new(len, width, Breakpoints::default());
                let total = pager.total_pages();
                for start in 0..total {
                    while pager.page_index() != start {
                        pager.next();
                    }
                    for _ in 0..total {
                        pager.next();
                    }
                    assert_eq!(pager.page_index(), start);
                }
            }
        }
    }

    #[test]
    fn test_empty_list() {
        let records: [u8; 0] = [];
        let mut pager = Paginator::new(0, LARGE, Breakpoints::default());
        assert_eq!(pager.total_pages(), 1);
        assert!(pager.current_slice(&records).is_empty());
        pager.next();
        assert_eq!(pager.page_index(), 0);
        pager.previous();
        assert_eq!(pager.page_index(), 0);
    }

    #[test]
    fn test_resize_clamps_to_last_page() {
        // 5 records, 1 per page: move to the last page, then widen
        let mut pager = Paginator::new(5, SMALL, Breakpoints::default());
        for _ in 0..4 {
            pager.next();
        }
        assert_eq!(pager.page_index(), 4);

        assert!(pager.resize(LARGE));
        assert_eq!(pager.total_pages(), 2);
        assert_eq!(pager.page_index(), 1);
    }

    #[test]
    fn test_resize_keeps_valid_index() {
        let mut pager = Paginator::new(5, LARGE, Breakpoints::default());
        pager.next();
        assert!(pager.resize(SMALL));
        assert_eq!(pager.page_index(), 1);
        assert!(!pager.resize(SMALL + 1));
    }
}
