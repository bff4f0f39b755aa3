use serde::{Deserialize, Serialize};

use crate::shared::query::QueryBuilder;

pub use crate::system::auth::AdminInfo;

/// Filter for `GET /Admin/Admin`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminListParams {
    pub is_super_admin: Option<bool>,
}

impl AdminListParams {
    pub fn to_query(&self) -> QueryBuilder {
        let mut q = QueryBuilder::new();
        q.push_opt("IsSuperAdmin", self.is_super_admin);
        q
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdminRequest {
    pub name: String,
    pub phone_number: String,
    pub password: String,
    pub is_super_admin: bool,
}

impl CreateAdminRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".to_string());
        }
        if self.phone_number.trim().is_empty() {
            return Err("Phone number is required".to_string());
        }
        if self.password.is_empty() {
            return Err("Password is required".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAdminRoleRequest {
    pub is_super_admin: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAdminPasswordRequest {
    pub new_password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedId {
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params_query() {
        assert_eq!(AdminListParams::default().to_query().build(), "");
        let params = AdminListParams {
            is_super_admin: Some(true),
        };
        assert_eq!(params.to_query().build(), "IsSuperAdmin=true");
    }

    #[test]
    fn test_create_validation() {
        let mut req = CreateAdminRequest {
            name: "Ali".into(),
            phone_number: "07701234567".into(),
            password: "secret1".into(),
            is_super_admin: false,
        };
        assert!(req.validate().is_ok());
        req.password = String::new();
        assert_eq!(req.validate(), Err("Password is required".to_string()));
        req.password = "secret1".into();
        req.phone_number = "   ".into();
        assert_eq!(req.validate(), Err("Phone number is required".to_string()));
    }

    #[test]
    fn test_create_wire_names() {
        let req = CreateAdminRequest {
            name: "Ali".into(),
            phone_number: "07701234567".into(),
            password: "secret1".into(),
            is_super_admin: true,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["isSuperAdmin"], true);
        assert_eq!(json["phoneNumber"], "07701234567");
    }
}
