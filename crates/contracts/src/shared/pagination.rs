//! Pagination arithmetic for list pages.

use std::ops::Range;

pub const DEFAULT_PAGE_SIZE: usize = 30;
pub const DEFAULT_MAX_BUTTONS: usize = 9;

/// Half-open range `[start, end)` of page indices to render as buttons.
///
/// The window is centred on `page`, shifted left when it runs past
/// `total_pages` and shifted right when it runs below zero. With
/// `total_pages == 0` the result is `0..0`; see [`Paginator::buttons`] for the
/// single placeholder button.
pub fn page_window(page: usize, total_pages: usize, width: usize) -> Range<usize> {
    let page = page as i64;
    let total = total_pages as i64;
    let width = width as i64;

    let mut start = page - width / 2;
    let mut end = page + (width + 1) / 2;

    if end > total {
        start -= end - total;
        end = total;
    }
    if start <= 0 {
        end += -start;
        start = 0;
    }
    end = end.min(total);

    let start = start.max(0) as usize;
    let end = (end.max(0) as usize).max(start);
    start..end
}

/// Number of pages needed for `total_items` at `page_size` items per page.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    /// Zero-based current page
    pub page: usize,
    /// Page size
    pub count: usize,
    /// Total page count
    pub total: usize,
    /// Window width of the page-button row
    pub max_buttons: usize,
    /// Total item count last reported by the server
    pub total_items: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, DEFAULT_MAX_BUTTONS)
    }
}

impl Paginator {
    pub fn new(count: usize, max_buttons: usize) -> Self {
        Self {
            page: 0,
            count: count.max(1),
            total: 0,
            max_buttons: max_buttons.max(1),
            total_items: 0,
        }
    }

    /// Item offset of the current page
    pub fn offset(&self) -> usize {
        self.page * self.count
    }

    /// Recomputes the page total from the server-reported item count
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.total = total_pages(total_items, self.count);
    }

    /// Moves forward one page. Returns `false` (no-op) at the last page.
    pub fn next_page(&mut self) -> bool {
        if self.page + 1 < self.total {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Moves back one page. Returns `false` (no-op) at the first page.
    pub fn prev_page(&mut self) -> bool {
        if self.page > 0 && self.page - 1 < self.total {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Jumps to `page` when it is in range and differs from the current one.
    pub fn goto_page(&mut self, page: usize) -> bool {
        if page < self.total && page != self.page {
            self.page = page;
            true
        } else {
            false
        }
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total
    }

    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    /// Page-button range; always renders at least one button.
    pub fn buttons(&self) -> Range<usize> {
        if self.total == 0 {
            return 0..1;
        }
        page_window(self.page, self.total, self.max_buttons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_examples() {
        assert_eq!(page_window(0, 20, 9), 0..9);
        assert_eq!(page_window(19, 20, 9), 11..20);
        assert_eq!(page_window(5, 3, 9), 0..3);
        assert_eq!(page_window(10, 20, 9), 6..15);
        assert_eq!(page_window(0, 0, 9), 0..0);
    }

    #[test]
    fn test_window_even_width() {
        assert_eq!(page_window(5, 20, 4), 3..7);
        assert_eq!(page_window(0, 20, 4), 0..4);
        assert_eq!(page_window(19, 20, 4), 16..20);
    }

    #[test]
    fn test_window_bounds_hold_everywhere() {
        for total in 0..25usize {
            for width in 1..12usize {
                for page in 0..total.max(1) {
                    let w = page_window(page, total, width);
                    assert!(w.start <= w.end, "{page} {total} {width}");
                    assert!(w.end <= total.max(1), "{page} {total} {width}");
                    assert!(w.len() <= width, "{page} {total} {width}");
                    if total >= width {
                        assert_eq!(w.len(), width, "{page} {total} {width}");
                    } else {
                        assert_eq!(w.len(), total, "{page} {total} {width}");
                    }
                    if total > 0 {
                        assert!(w.contains(&page), "{page} {total} {width}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 30), 0);
        assert_eq!(total_pages(1, 30), 1);
        assert_eq!(total_pages(30, 30), 1);
        assert_eq!(total_pages(31, 30), 2);
        assert_eq!(total_pages(10, 0), 0);
    }

    #[test]
    fn test_paginator_navigation() {
        let mut p = Paginator::default();
        assert_eq!(p.count, 30);
        assert_eq!(p.max_buttons, 9);
        assert!(!p.next_page());
        assert!(!p.prev_page());
        assert_eq!(p.buttons(), 0..1);

        p.set_total_items(95);
        assert_eq!(p.total, 4);
        assert!(p.next_page());
        assert_eq!(p.offset(), 30);
        assert!(p.goto_page(3));
        assert!(!p.next_page());
        assert_eq!(p.page, 3);
        assert!(!p.goto_page(3));
        assert!(!p.goto_page(4));
        assert!(p.prev_page());
        assert_eq!(p.page, 2);
        assert_eq!(p.buttons(), 0..4);
    }
}
