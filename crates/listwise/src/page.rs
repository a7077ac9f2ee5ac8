//! Pagination: page arithmetic and the result page type.
//!
//! [`PagePlan::plan`] turns a raw `(total, page, page_size)` triple into
//! clamped page numbers and an index range; [`ListPage`] is the
//! evaluated page a query hands back, borrowing its items from the
//! caller's slice.

use std::ops::Range;

use serde::Serialize;

/// Page size used by a fresh query.
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Clamped pagination arithmetic for one evaluation.
///
/// A plan never points outside the collection: the page size is raised
/// to at least 1, the page count to at least 1 even for an empty
/// collection, and the requested page is clamped into
/// `1..=total_pages`.
///
/// # Example
///
/// ```
/// use listwise::PagePlan;
///
/// let plan = PagePlan::plan(25, 3, 10);
/// assert_eq!(plan.total_pages, 3);
/// assert_eq!(plan.range(), 20..25);
///
/// // Out-of-range requests clamp instead of failing
/// let plan = PagePlan::plan(3, 99_999, 10);
/// assert_eq!(plan.page, 1);
/// assert_eq!(plan.range(), 0..3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagePlan {
    /// Clamped 1-based page number.
    pub page: usize,
    /// Effective page size, at least 1.
    pub page_size: usize,
    /// Number of records being paginated.
    pub total: usize,
    /// Number of pages, at least 1.
    pub total_pages: usize,
}

impl PagePlan {
    /// Plans a page over `total` records.
    ///
    /// `page` is 1-based; 0 clamps to the first page and anything past
    /// the end clamps to the last. A `page_size` of 0 is treated as 1.
    pub fn plan(total: usize, page: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total.div_ceil(page_size).max(1);
        let page = page.clamp(1, total_pages);

        PagePlan {
            page,
            page_size,
            total,
            total_pages,
        }
    }

    /// Index range of this page within the collection.
    ///
    /// The range is in bounds for a slice of length `total`.
    pub fn range(&self) -> Range<usize> {
        let start = (self.page - 1) * self.page_size;
        let end = (start + self.page_size).min(self.total);
        start..end
    }

    /// Whether a page precedes this one.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Whether a page follows this one.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// One evaluated page of query results.
///
/// Items borrow from the record slice given to
/// [`ListQuery::evaluate`](crate::ListQuery::evaluate); the surrounding
/// counts describe the whole filtered collection, not just this page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListPage<'a, R> {
    /// Records on this page, in sorted order.
    pub items: Vec<&'a R>,
    /// Records that survived search and filters, across all pages.
    pub total: usize,
    /// Clamped 1-based page number.
    pub page: usize,
    /// Effective page size.
    pub page_size: usize,
    /// Number of pages, at least 1.
    pub total_pages: usize,
}

impl<'a, R> ListPage<'a, R> {
    /// Number of records on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page holds no records.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether a page precedes this one.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Whether a page follows this one.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Human-readable range summary, e.g. `"11-20 of 54 results"`.
    pub fn summary(&self) -> String {
        if self.total == 0 {
            return "0 results".to_string();
        }
        let start = (self.page - 1) * self.page_size + 1;
        let end = start + self.items.len() - 1;
        format!("{start}-{end} of {} results", self.total)
    }
}
