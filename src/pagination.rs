//! Listing pagination.
//!
//! Untrusted page input is normalized by [`resolve_page`]; the pure
//! [`compute_range`] then produces the compact sequence of page links (with
//! gap markers) shown under a listing.

use std::num::IntErrorKind;
use std::ops::Range;

/// Entries shown per listing page.
pub const PAGE_SIZE: usize = 5;

/// Page counts up to this value are shown in full, without gaps.
const FULL_RANGE_LIMIT: usize = 5;

/// One slot in a pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Gap,
}

/// Resolved pagination for one listing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl Pagination {
    /// Resolve raw page input against an item count.
    pub fn resolve(raw_page: Option<&str>, total_items: usize) -> Self {
        let total_pages = total_pages(total_items);
        Self {
            current_page: resolve_page(raw_page, total_pages),
            total_pages,
            total_items,
        }
    }

    /// Pagination for an already-valid page number (clamped anyway).
    pub fn for_page(page: usize, total_items: usize) -> Self {
        let total_pages = total_pages(total_items);
        Self {
            current_page: page.clamp(1, total_pages),
            total_pages,
            total_items,
        }
    }

    /// Index range of the items on the current page.
    pub fn item_range(&self) -> Range<usize> {
        let start = ((self.current_page - 1) * PAGE_SIZE).min(self.total_items);
        let end = (start + PAGE_SIZE).min(self.total_items);
        start..end
    }

    pub fn prev_page(&self) -> Option<usize> {
        (self.current_page > 1).then(|| self.current_page - 1)
    }

    pub fn next_page(&self) -> Option<usize> {
        (self.current_page < self.total_pages).then(|| self.current_page + 1)
    }

    /// Whether navigation controls should be shown at all.
    pub fn has_pages(&self) -> bool {
        self.total_pages > 1
    }

    pub fn range(&self) -> Vec<PageItem> {
        compute_range(self.current_page, self.total_pages)
    }
}

/// Number of listing pages for `total_items`; never less than 1.
pub fn total_pages(total_items: usize) -> usize {
    total_items.div_ceil(PAGE_SIZE).max(1)
}

/// Parse a requested page number from untrusted input.
///
/// Missing, empty, non-numeric, zero and negative values all mean page 1.
/// Only plain decimal integers count, so `1e1` and `0x10` are non-numeric.
/// Values too large for `usize` saturate; [`resolve_page`] clamps them.
pub fn requested_page(raw: Option<&str>) -> usize {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return 1;
    };
    match raw.parse::<i64>() {
        Ok(n) if n >= 1 => usize::try_from(n).unwrap_or(usize::MAX),
        Ok(_) => 1,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => usize::MAX,
        Err(_) => 1,
    }
}

/// Parse and clamp a requested page into `[1, total_pages]`.
pub fn resolve_page(raw: Option<&str>, total_pages: usize) -> usize {
    requested_page(raw).clamp(1, total_pages.max(1))
}

/// Compact page sequence for a navigation control.
///
/// Expects `1 <= current_page <= total_pages`; no clamping is done here.
pub fn compute_range(current_page: usize, total_pages: usize) -> Vec<PageItem> {
    if total_pages <= FULL_RANGE_LIMIT {
        return (1..=total_pages).map(PageItem::Page).collect();
    }

    let mut pages = vec![PageItem::Page(1)];

    if current_page > 3 {
        pages.push(PageItem::Gap);
    }

    let start = current_page.saturating_sub(1).max(2);
    let end = (current_page + 1).min(total_pages - 1);
    pages.extend((start..=end).map(PageItem::Page));

    if current_page + 2 < total_pages {
        pages.push(PageItem::Gap);
    }

    pages.push(PageItem::Page(total_pages));
    pages
}
