//! Page category constants for tab pages.
//!
//! Every page rendered inside a tab declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a006_order--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator keeps the entity name searchable: copy the id from the
//! DOM inspector and it leads straight to `domain/a006_order/`.

/// Table of records with filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Single record, opened from a list.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Overview with cards and charts.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DETAIL,
    PAGE_CAT_DASHBOARD,
];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a006_order--list"));
        assert!(is_valid_page_id("d400_overview--dashboard"));
        assert!(!is_valid_page_id("a006_order"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a006_order--"));
    }

    #[test]
    fn test_known_categories() {
        assert!(is_known_category(PAGE_CAT_DETAIL));
        assert!(!is_known_category("usecase"));
    }
}
