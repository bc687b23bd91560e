//! # Paginator
//!
//! Slices a collection into a 1-based page and reports the derived totals.
//!
//! ```text
//! total_pages = ceil(total_items / page_size)      (0 when there are no items)
//! page N      = items[(N-1) * page_size .. N * page_size]
//! ```
//!
//! A page past the last one is **not** an error: it comes back empty, with the
//! totals still describing the whole collection.
//!
//! ## Contract
//!
//! `page >= 1` and `page_size >= 1` are the caller's responsibility. The paginator
//! does not clamp: page 0 reads as page 1 and a zero page size produces an empty
//! page with zero total pages. [`crate::commands::list::UserQuery::validate`] rejects
//! both before they get here.

use serde::Serialize;

/// Page sizes offered by the pager widget.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

/// Pages shown without gaps in the compact window.
const MAX_VISIBLE_PAGES: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub current_page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

/// One slot in the compact page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PageLink {
    Page(usize),
    Gap,
}

impl PageMeta {
    pub fn new(current_page: usize, page_size: usize, total_items: usize) -> Self {
        let total_pages = total_items.checked_div(page_size).map_or(0, |full| {
            if total_items % page_size == 0 {
                full
            } else {
                full + 1
            }
        });
        Self {
            current_page,
            page_size,
            total_items,
            total_pages,
        }
    }

    fn offset(&self) -> usize {
        self.current_page.saturating_sub(1).saturating_mul(self.page_size)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// 1-based inclusive range of the items on this page, `None` for an empty page.
    pub fn item_range(&self) -> Option<(usize, usize)> {
        let start = self.offset();
        if start >= self.total_items || self.page_size == 0 {
            return None;
        }
        let end = start.saturating_add(self.page_size).min(self.total_items);
        Some((start + 1, end))
    }

    /// The compact page window: every page when there are at most seven, otherwise
    /// the first page, the current page with its neighbours and the last page, with
    /// gaps where pages are skipped.
    pub fn window(&self) -> Vec<PageLink> {
        let total = self.total_pages;
        if total <= MAX_VISIBLE_PAGES {
            return (1..=total).map(PageLink::Page).collect();
        }

        let current = self.current_page.clamp(1, total);
        let start = current.saturating_sub(1).max(2);
        let end = (current + 1).min(total - 1);

        let mut links = vec![PageLink::Page(1)];
        if start > 2 {
            links.push(PageLink::Gap);
        }
        links.extend((start..=end).map(PageLink::Page));
        if end < total - 1 {
            links.push(PageLink::Gap);
        }
        links.push(PageLink::Page(total));
        links
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Slice `items` down to page `page` of size `page_size`.
pub fn apply<T>(items: Vec<T>, page: usize, page_size: usize) -> Page<T> {
    let meta = PageMeta::new(page, page_size, items.len());
    let items = match meta.item_range() {
        Some((first, last)) => items
            .into_iter()
            .skip(first - 1)
            .take(last - first + 1)
            .collect(),
        None => Vec::new(),
    };
    Page { items, meta }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    #[test]
    fn last_partial_page() {
        let page = apply(numbers(250), 3, 100);
        assert_eq!(page.items.len(), 50);
        assert_eq!(page.items[0], 201);
        assert_eq!(page.meta.total_pages, 3);
        assert_eq!(page.meta.total_items, 250);
    }

    #[test]
    fn page_past_the_end_is_empty_with_totals() {
        let page = apply(numbers(250), 4, 100);
        assert!(page.is_empty());
        assert_eq!(page.meta.total_pages, 3);
        assert_eq!(page.meta.total_items, 250);
        assert_eq!(page.meta.current_page, 4);
    }

    #[test]
    fn exact_multiple_has_no_trailing_page() {
        let page = apply(numbers(200), 2, 100);
        assert_eq!(page.items.len(), 100);
        assert_eq!(page.meta.total_pages, 2);
        assert!(apply(numbers(200), 3, 100).is_empty());
    }

    #[test]
    fn empty_collection_has_zero_pages() {
        let page = apply(Vec::<usize>::new(), 1, 10);
        assert!(page.is_empty());
        assert_eq!(page.meta.total_pages, 0);
        assert_eq!(page.meta.total_items, 0);
    }

    #[test]
    fn zero_page_size_is_an_empty_page() {
        let page = apply(numbers(5), 1, 0);
        assert!(page.is_empty());
        assert_eq!(page.meta.total_pages, 0);
    }

    #[test]
    fn page_length_bounds_hold_across_sizes() {
        for total in [0usize, 1, 9, 10, 11, 99, 250] {
            for size in [1usize, 3, 10, 25, 100] {
                let meta = PageMeta::new(1, size, total);
                assert_eq!(meta.total_pages, total.div_ceil(size));
                for page_no in 1..=meta.total_pages + 2 {
                    let page = apply(numbers(total), page_no, size);
                    assert!(page.items.len() <= size);
                    let should_be_empty = page_no > page.meta.total_pages || total == 0;
                    assert_eq!(
                        page.is_empty(),
                        should_be_empty,
                        "total={total} size={size} page={page_no}"
                    );
                }
            }
        }
    }

    #[test]
    fn item_range() {
        assert_eq!(PageMeta::new(2, 10, 25).item_range(), Some((11, 20)));
        assert_eq!(PageMeta::new(3, 10, 25).item_range(), Some((21, 25)));
        assert_eq!(PageMeta::new(4, 10, 25).item_range(), None);
    }

    #[test]
    fn navigation_flags() {
        let meta = PageMeta::new(1, 10, 25);
        assert!(!meta.has_previous());
        assert!(meta.has_next());
        let meta = PageMeta::new(3, 10, 25);
        assert!(meta.has_previous());
        assert!(!meta.has_next());
    }

    #[test]
    fn window_shows_all_pages_when_few() {
        let meta = PageMeta::new(2, 10, 70);
        assert_eq!(meta.window(), (1..=7).map(PageLink::Page).collect::<Vec<_>>());
    }

    #[test]
    fn window_near_start() {
        use PageLink::*;
        let meta = PageMeta::new(2, 10, 160);
        assert_eq!(meta.window(), vec![Page(1), Page(2), Page(3), Gap, Page(16)]);
    }

    #[test]
    fn window_in_middle() {
        use PageLink::*;
        let meta = PageMeta::new(8, 10, 160);
        assert_eq!(
            meta.window(),
            vec![Page(1), Gap, Page(7), Page(8), Page(9), Gap, Page(16)]
        );
    }

    #[test]
    fn window_never_skips_a_page_silently() {
        use PageLink::*;
        let meta = PageMeta::new(4, 10, 160);
        assert_eq!(
            meta.window(),
            vec![Page(1), Gap, Page(3), Page(4), Page(5), Gap, Page(16)]
        );
        let meta = PageMeta::new(3, 10, 160);
        assert_eq!(
            meta.window(),
            vec![Page(1), Page(2), Page(3), Page(4), Gap, Page(16)]
        );
    }

    #[test]
    fn window_past_the_end_anchors_on_last_page() {
        use PageLink::*;
        let meta = PageMeta::new(40, 10, 160);
        assert_eq!(meta.window(), vec![Page(1), Gap, Page(15), Page(16)]);
    }

    #[test]
    fn window_near_end() {
        use PageLink::*;
        let meta = PageMeta::new(15, 10, 160);
        assert_eq!(
            meta.window(),
            vec![Page(1), Gap, Page(14), Page(15), Page(16)]
        );
    }
}
