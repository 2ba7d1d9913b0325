use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct PaginationParams {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    25
}

impl PaginationParams {
    /// Effective (limit, offset) pair. Out-of-range values are clamped rather
    /// than rejected: page floors at 1, page_size at 1..=100.
    pub fn limit_offset(&self) -> (u32, u32) {
        let page = self.page.max(1);
        let page_size = self.page_size.clamp(1, MAX_PAGE_SIZE);
        (page_size, (page - 1) * page_size)
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginationMeta {
    pub page: u32,
    pub page_size: u32,
    pub total_items: i64,
    pub total_pages: u32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, params: &PaginationParams, total_items: i64) -> Self {
        let (page_size, _) = params.limit_offset();
        let total_pages = ((total_items as f64) / (page_size as f64)).ceil() as u32;
        Self {
            data,
            pagination: PaginationMeta {
                page: params.page.max(1),
                page_size,
                total_items,
                total_pages,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_offset_is_zero() {
        let params = PaginationParams {
            page: 1,
            page_size: 25,
        };
        assert_eq!(params.limit_offset(), (25, 0));
    }

    #[test]
    fn test_offset_advances_with_page() {
        let params = PaginationParams {
            page: 3,
            page_size: 10,
        };
        assert_eq!(params.limit_offset(), (10, 20));
    }

    #[test]
    fn test_page_size_is_clamped() {
        let params = PaginationParams {
            page: 0,
            page_size: 5000,
        };
        assert_eq!(params.limit_offset(), (100, 0));
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let params = PaginationParams {
            page: 1,
            page_size: 10,
        };
        let response = PaginatedResponse::new(vec![1, 2, 3], &params, 21);
        assert_eq!(response.pagination.total_pages, 3);
        assert_eq!(response.pagination.total_items, 21);
    }
}
