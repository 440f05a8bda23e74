//! # Pagination
//!
//! Maps a 1-based page number onto an index range of an ordered collection.
//!
//! Out-of-range pages produce no range at all rather than an empty one. Callers treat
//! that as absence.

use std::ops::Range;

pub const QUESTIONS_PER_PAGE: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub per_page: usize,
}

impl PageRequest {
    pub fn new(page: i64, per_page: usize) -> Self {
        Self { page, per_page }
    }

    /// Index range of this page within a collection of `total` items.
    ///
    /// Returns `None` when the page is below 1, the page size is zero, or the
    /// first index of the page is past the end of the collection.
    pub fn bounds(&self, total: usize) -> Option<Range<usize>> {
        if self.page < 1 || self.per_page == 0 {
            return None;
        }
        let index = usize::try_from(self.page - 1).ok()?;
        let start = index.checked_mul(self.per_page)?;
        if start >= total {
            return None;
        }
        let end = start.saturating_add(self.per_page).min(total);
        Some(start..end)
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> Option<&'a [T]> {
        self.bounds(items.len()).map(|range| &items[range])
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, QUESTIONS_PER_PAGE)
    }
}
