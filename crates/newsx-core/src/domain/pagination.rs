//! Page arithmetic for the public blog listing.

/// Fixed page size of the public listing.
pub const BLOGS_PER_PAGE: u64 = 8;

/// Maximum number of posts in the "recent" strip.
pub const RECENT_BLOGS_LIMIT: u64 = 9;

/// A 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    per_page: u64,
}

impl PageRequest {
    /// Pages below 1 are clamped to 1, as is a zero page size.
    pub fn new(page: u64, per_page: u64) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    /// Build a request for the public listing from the raw `page` query value.
    ///
    /// Absent, non-numeric, zero and negative values all fall back to page 1.
    pub fn from_query(raw: Option<&str>) -> Self {
        let page = raw
            .and_then(|value| value.trim().parse::<u64>().ok())
            .unwrap_or(1);
        Self::new(page, BLOGS_PER_PAGE)
    }

    pub const fn page(&self) -> u64 {
        self.page
    }

    pub const fn per_page(&self) -> u64 {
        self.per_page
    }

    /// Number of documents to skip: `(page - 1) * per_page`.
    pub fn skip(&self) -> u64 {
        (self.page - 1).saturating_mul(self.per_page)
    }

    /// `ceil(total / per_page)`.
    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.per_page)
    }
}

/// One page of results plus the size of the whole collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub request: PageRequest,
    pub total_items: u64,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> u64 {
        self.request.total_pages(self.total_items)
    }
}
