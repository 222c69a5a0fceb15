//! Pagination query parameter extractor.

use serde::{Deserialize, Serialize};

use franchise_core::types::pagination::PageRequest;

/// Query parameters for paginated endpoints.
///
/// Values stay as raw strings so that garbage falls back to defaults
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Page number (1-based, default: 1).
    pub page: Option<String>,
    /// Items per page (default: 10, max: 100).
    pub limit: Option<String>,
    /// Alias for `limit`.
    pub page_size: Option<String>,
}

impl PaginationParams {
    /// Converts to a `PageRequest`.
    pub fn into_page_request(self) -> PageRequest {
        PageRequest::from_query(
            self.page.as_deref(),
            self.limit.as_deref().or(self.page_size.as_deref()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_wins_over_page_size() {
        let params = PaginationParams {
            page: Some("2".into()),
            limit: Some("5".into()),
            page_size: Some("50".into()),
        };
        assert_eq!(params.into_page_request(), PageRequest::new(2, 5));
    }

    #[test]
    fn test_page_size_alias() {
        let params = PaginationParams {
            page_size: Some("20".into()),
            ..Default::default()
        };
        assert_eq!(params.into_page_request().page_size, 20);
    }
}
