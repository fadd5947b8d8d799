//! Shared pagination types
//!
//! Every list endpoint takes the same `page`/`page_size` query parameters
//! and wraps its results in [`PaginatedResponse`].

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Pagination query parameters
///
/// Both fields are optional; absent values fall back to the defaults
/// (page 1, page size 10). Out-of-range values are rejected by validation
/// before any query runs.
#[derive(Debug, Clone, Copy, Default, Deserialize, Validate)]
pub struct PaginationQuery {
    #[validate(range(min = 1))]
    pub page: Option<u32>,

    #[validate(range(min = 1, max = MAX_PAGE_SIZE))]
    pub page_size: Option<u32>,
}

impl PaginationQuery {
    /// Effective page number (1-based)
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    /// Effective page size
    pub fn page_size(&self) -> u32 {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// SQL OFFSET for the effective page
    pub fn offset(&self) -> i64 {
        ((self.page() - 1) * self.page_size()) as i64
    }

    /// SQL LIMIT for the effective page
    pub fn limit(&self) -> i64 {
        self.page_size() as i64
    }
}

/// Paginated response wrapper
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

impl<T> PaginatedResponse<T> {
    /// Wrap an already-paginated page of items.
    ///
    /// `total_pages` is always derived from `total` and `page_size` here;
    /// it is never stored or updated independently. A zero `page_size`
    /// yields zero pages rather than dividing by zero.
    pub fn new(items: Vec<T>, total: i64, page: u32, page_size: u32) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            (total.max(0) as u64).div_ceil(page_size as u64) as u32
        };

        Self {
            items,
            total,
            page,
            page_size,
            total_pages,
        }
    }

    /// Wrap a `(items, total)` pair straight out of a repository list call.
    pub fn from_query(pair: (Vec<T>, i64), pagination: &PaginationQuery) -> Self {
        let (items, total) = pair;
        Self::new(items, total, pagination.page(), pagination.page_size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_is_ceiling_division() {
        assert_eq!(PaginatedResponse::new(vec![1; 10], 25, 1, 10).total_pages, 3);
        assert_eq!(PaginatedResponse::<i32>::new(vec![], 0, 1, 10).total_pages, 0);
        assert_eq!(PaginatedResponse::new(vec![1; 10], 10, 1, 10).total_pages, 1);
        assert_eq!(PaginatedResponse::new(vec![1; 1], 11, 2, 10).total_pages, 2);
    }

    #[test]
    fn test_zero_page_size_guard() {
        // Unreachable through validated input; the constructor still
        // refuses to divide by zero.
        assert_eq!(PaginatedResponse::<i32>::new(vec![], 25, 1, 0).total_pages, 0);
    }

    #[test]
    fn test_negative_total_clamps() {
        assert_eq!(PaginatedResponse::<i32>::new(vec![], -5, 1, 10).total_pages, 0);
    }

    #[test]
    fn test_defaults_applied_when_absent() {
        let query = PaginationQuery::default();
        assert_eq!(query.page(), 1);
        assert_eq!(query.page_size(), 10);
        assert_eq!(query.offset(), 0);
        assert_eq!(query.limit(), 10);
    }

    #[test]
    fn test_offset_advances_with_page() {
        let query = PaginationQuery {
            page: Some(3),
            page_size: Some(25),
        };
        assert_eq!(query.offset(), 50);
        assert_eq!(query.limit(), 25);
    }

    #[test]
    fn test_bounds_validation() {
        let ok = PaginationQuery {
            page: Some(1),
            page_size: Some(100),
        };
        assert!(ok.validate().is_ok());

        let page_too_small = PaginationQuery {
            page: Some(0),
            page_size: None,
        };
        assert!(page_too_small.validate().is_err());

        let page_size_too_large = PaginationQuery {
            page: None,
            page_size: Some(101),
        };
        assert!(page_size_too_large.validate().is_err());

        let page_size_zero = PaginationQuery {
            page: None,
            page_size: Some(0),
        };
        assert!(page_size_zero.validate().is_err());
    }
}
