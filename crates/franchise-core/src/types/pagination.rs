//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Default page size.
pub const DEFAULT_PAGE_SIZE: u64 = 10;
/// Maximum page size.
pub const MAX_PAGE_SIZE: u64 = 100;
/// Largest offset ever produced.
const MAX_OFFSET: u64 = i64::MAX as u64;

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub page_size: u64,
}

impl PageRequest {
    /// Create a new page request, clamping both values into range.
    pub fn new(page: u64, page_size: u64) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Build a page request from raw query-string values.
    ///
    /// A missing or unparseable page becomes 1; a missing or unparseable
    /// size becomes [`DEFAULT_PAGE_SIZE`]. Numeric sizes are clamped to
    /// `[1, MAX_PAGE_SIZE]`.
    pub fn from_query(page: Option<&str>, page_size: Option<&str>) -> Self {
        let page = page
            .and_then(|p| p.trim().parse::<i64>().ok())
            .filter(|p| *p >= 1)
            .map_or(1, |p| p as u64);

        let page_size = page_size
            .and_then(|s| s.trim().parse::<i64>().ok())
            .map_or(DEFAULT_PAGE_SIZE, |s| s.clamp(1, MAX_PAGE_SIZE as i64) as u64);

        Self { page, page_size }
    }

    /// Calculate the SQL `OFFSET` value, saturating at `i64::MAX` so it
    /// always binds as a non-negative Postgres `BIGINT`.
    pub fn offset(&self) -> u64 {
        self.page
            .saturating_sub(1)
            .saturating_mul(self.page_size)
            .min(MAX_OFFSET)
    }

    /// Return the SQL `LIMIT` value.
    pub fn limit(&self) -> u64 {
        self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Paginated response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Current page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub limit: u64,
    /// Total number of items across all pages.
    pub total: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl<T> PageResponse<T> {
    /// Create a new paginated response.
    pub fn new(items: Vec<T>, request: &PageRequest, total: u64) -> Self {
        let total_pages = if total == 0 {
            1
        } else {
            total.div_ceil(request.page_size)
        };
        Self {
            items,
            page: request.page,
            limit: request.page_size,
            total,
            total_pages,
        }
    }

    /// Convert every item, keeping the pagination metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResponse<U> {
        PageResponse {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            limit: self.limit,
            total: self.total,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_defaults() {
        let req = PageRequest::from_query(None, None);
        assert_eq!(req, PageRequest::new(1, 10));
        assert_eq!(req.offset(), 0);
    }

    #[test]
    fn test_query_invalid_values_fall_back() {
        let req = PageRequest::from_query(Some("abc"), Some("lots"));
        assert_eq!(req.page, 1);
        assert_eq!(req.page_size, DEFAULT_PAGE_SIZE);

        let req = PageRequest::from_query(Some("-3"), Some("0"));
        assert_eq!(req.page, 1);
        assert_eq!(req.page_size, 1);
    }

    #[test]
    fn test_query_size_is_clamped() {
        let req = PageRequest::from_query(Some("3"), Some("500"));
        assert_eq!(req.page, 3);
        assert_eq!(req.page_size, MAX_PAGE_SIZE);
        assert_eq!(req.offset(), 200);
    }

    #[test]
    fn test_huge_page_offset_saturates() {
        let req = PageRequest::from_query(Some("9223372036854775807"), Some("100"));
        assert_eq!(req.page, i64::MAX as u64);
        assert_eq!(req.offset(), i64::MAX as u64);

        let req = PageRequest::new(u64::MAX, MAX_PAGE_SIZE);
        assert_eq!(req.offset(), i64::MAX as u64);
        assert!(i64::try_from(req.offset()).is_ok());
    }

    #[test]
    fn test_total_pages() {
        let req = PageRequest::new(1, 10);
        assert_eq!(PageResponse::new(Vec::<u8>::new(), &req, 0).total_pages, 1);
        assert_eq!(PageResponse::new(Vec::<u8>::new(), &req, 10).total_pages, 1);
        assert_eq!(PageResponse::new(Vec::<u8>::new(), &req, 11).total_pages, 2);
    }
}
