use serde::{Deserialize, Serialize};

use crate::shared::pagination::PageRequest;
use crate::shared::query::QueryBuilder;

/// Platform end-user (customer).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub phone_number: String,
    pub image_path: Option<String>,
    pub is_blocked: bool,
    pub country_id: Option<i64>,
    pub city_id: Option<i64>,
    pub state_id: Option<i64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl User {
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "U".to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserListParams {
    pub page: PageRequest,
    pub name: Option<String>,
    pub phone_number: Option<String>,
}

impl UserListParams {
    pub fn to_query(&self) -> QueryBuilder {
        let mut q = QueryBuilder::new();
        self.page.write_nested(&mut q);
        q.push_text("Name", self.name.as_deref())
            .push_text("PhoneNumber", self.phone_number.as_deref());
        q
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_defaults_when_fields_missing() {
        let user: User = serde_json::from_str(r#"{"id":1,"name":"sara"}"#).unwrap();
        assert!(!user.is_blocked);
        assert_eq!(user.initial(), "S");
        assert_eq!(User::default().initial(), "U");
    }

    #[test]
    fn test_list_query() {
        let params = UserListParams {
            page: PageRequest::new(2, 10),
            phone_number: Some("0770".into()),
            ..Default::default()
        };
        assert_eq!(
            params.to_query().build(),
            "PaginationRequest.PageSize=10&PaginationRequest.PageNumber=2&PhoneNumber=0770"
        );
    }
}
