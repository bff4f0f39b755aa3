use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub phone_number: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: AdminInfo,
    pub token: String,
}

/// The signed-in operator, as returned by `/Admin/Auth/Me` and by login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminInfo {
    pub id: i64,
    pub name: Option<String>,
    pub phone_number: Option<String>,
    #[serde(default)]
    pub is_super_admin: bool,
}

impl AdminInfo {
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .or_else(|| self.phone_number.clone())
            .unwrap_or_else(|| format!("Admin #{}", self.id))
    }
}

/// Claims carried by the backend-issued JWT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    #[serde(rename = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/nameidentifier")]
    pub id: Option<String>,
    #[serde(rename = "http://schemas.microsoft.com/ws/2008/06/identity/claims/role")]
    pub role: Option<String>,
    #[serde(rename = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/sid")]
    pub sid: Option<String>,
    pub exp: Option<i64>,
    pub iat: Option<i64>,
}

impl TokenClaims {
    /// `true` when `exp` is present and not after `now` (unix seconds).
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.exp.map(|exp| exp <= now).unwrap_or(false)
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(chrono::Utc::now().timestamp())
    }

    pub fn expires_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.exp
            .and_then(|exp| chrono::DateTime::<chrono::Utc>::from_timestamp(exp, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_wire_names() {
        let req = LoginRequest {
            phone_number: "07700000000".into(),
            password: "secret".into(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["phoneNumber"], "07700000000");
        assert_eq!(json["password"], "secret");
    }

    #[test]
    fn test_admin_display_name_fallbacks() {
        let mut admin = AdminInfo {
            id: 3,
            name: Some("  ".into()),
            phone_number: Some("0770".into()),
            is_super_admin: false,
        };
        assert_eq!(admin.display_name(), "0770");
        admin.phone_number = None;
        assert_eq!(admin.display_name(), "Admin #3");
    }

    #[test]
    fn test_claims_from_payload() {
        let payload = r#"{
            "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/nameidentifier": "12",
            "http://schemas.microsoft.com/ws/2008/06/identity/claims/role": "Admin",
            "exp": 1700000000,
            "iat": 1690000000
        }"#;
        let claims: TokenClaims = serde_json::from_str(payload).unwrap();
        assert_eq!(claims.id.as_deref(), Some("12"));
        assert_eq!(claims.role.as_deref(), Some("Admin"));
        assert!(claims.sid.is_none());
        assert!(claims.is_expired_at(1700000000));
        assert!(!claims.is_expired_at(1699999999));
        assert!(claims.is_expired());
        assert_eq!(
            claims.expires_at().unwrap().to_rfc3339(),
            "2023-11-14T22:13:20+00:00"
        );
    }
}
