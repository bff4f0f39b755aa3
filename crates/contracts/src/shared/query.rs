//! Query string builder for the admin REST API.
//!
//! The backend binds list filters from PascalCase query parameters
//! (`Name`, `PaginationRequest.PageNumber`, ...). Absent filters are left
//! out of the query entirely.

use std::fmt::Display;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryBuilder {
    pairs: Vec<(String, String)>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Always appends the parameter.
    pub fn push(&mut self, key: &str, value: impl Display) -> &mut Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Appends the parameter when a value is present.
    pub fn push_opt<T: Display>(&mut self, key: &str, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    /// Appends a text filter unless it is missing or blank.
    pub fn push_text(&mut self, key: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
            self.push(key, value);
        }
        self
    }

    /// Appends a numeric id filter unless it is missing or zero.
    pub fn push_id(&mut self, key: &str, value: Option<i64>) -> &mut Self {
        self.push_opt(key, value.filter(|v| *v != 0))
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Encoded query without the leading `?`.
    pub fn build(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// `path` followed by `?query` when any parameter was added.
    pub fn append_to(&self, path: &str) -> String {
        if self.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, self.build())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_keeps_path() {
        let q = QueryBuilder::new();
        assert_eq!(q.append_to("/Admin/Category"), "/Admin/Category");
    }

    #[test]
    fn test_skips_blank_and_zero_filters() {
        let mut q = QueryBuilder::new();
        q.push_text("Name", Some("  "))
            .push_text("PhoneNumber", None)
            .push_id("CategoryId", Some(0))
            .push_opt("Active", Some(false));
        assert_eq!(q.build(), "Active=false");
    }

    #[test]
    fn test_encodes_values() {
        let mut q = QueryBuilder::new();
        q.push("PaginationRequest.PageNumber", 2)
            .push_text("Keyword", Some("oil & gas"));
        assert_eq!(
            q.append_to("/Admin/Product"),
            "/Admin/Product?PaginationRequest.PageNumber=2&Keyword=oil%20%26%20gas"
        );
    }
}
