use serde::{Deserialize, Serialize};

use super::query::QueryBuilder;

/// Page envelope returned by every paginated `/Admin/*` list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub page_number: u32,
    pub total_pages: u32,
    pub total_count: u32,
    #[serde(default)]
    pub has_previous_page: bool,
    #[serde(default)]
    pub has_next_page: bool,
}

impl<T> Default for PaginatedResponse<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page_number: 1,
            total_pages: 0,
            total_count: 0,
            has_previous_page: false,
            has_next_page: false,
        }
    }
}

/// 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_number: u32,
    pub page_size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_number: 1,
            page_size: 10,
        }
    }
}

impl PageRequest {
    pub fn new(page_number: u32, page_size: u32) -> Self {
        Self {
            page_number,
            page_size,
        }
    }

    /// `PaginationRequest.PageSize` / `PaginationRequest.PageNumber`, used by
    /// providers, users, payments, products and services.
    pub fn write_nested(&self, q: &mut QueryBuilder) {
        q.push_opt("PaginationRequest.PageSize", non_zero(self.page_size))
            .push_opt("PaginationRequest.PageNumber", non_zero(self.page_number));
    }

    /// Flat `PageNumber` / `PageSize`, used by orders.
    pub fn write_flat(&self, q: &mut QueryBuilder) {
        q.push_opt("PageNumber", non_zero(self.page_number))
            .push_opt("PageSize", non_zero(self.page_size));
    }
}

fn non_zero(value: u32) -> Option<u32> {
    (value != 0).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_page() {
        let json = r#"{
            "items": [1, 2, 3],
            "pageNumber": 2,
            "totalPages": 5,
            "totalCount": 43,
            "hasPreviousPage": true,
            "hasNextPage": true
        }"#;
        let page: PaginatedResponse<u32> = serde_json::from_str(json).unwrap();
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.total_count, 43);
        assert!(page.has_previous_page && page.has_next_page);
    }

    #[test]
    fn test_nested_and_flat_params() {
        let page = PageRequest::new(3, 20);

        let mut nested = QueryBuilder::new();
        page.write_nested(&mut nested);
        assert_eq!(
            nested.build(),
            "PaginationRequest.PageSize=20&PaginationRequest.PageNumber=3"
        );

        let mut flat = QueryBuilder::new();
        page.write_flat(&mut flat);
        assert_eq!(flat.build(), "PageNumber=3&PageSize=20");
    }
}
