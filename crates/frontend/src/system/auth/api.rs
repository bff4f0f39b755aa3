use contracts::system::auth::{AdminInfo, LoginRequest, LoginResponse};

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::{ApiClient, HttpMethod};

/// Login with phone number and password
pub async fn login(
    client: &ApiClient,
    phone_number: String,
    password: String,
) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest {
        phone_number,
        password,
    };
    client
        .send_json(HttpMethod::Post, "/Admin/Auth/Login", &request)
        .await
        .map_err(login_error)
}

const LOGIN_FAILED: &str = "Login failed";

/// Rejected logins show the body's `detail` verbatim.
fn login_error(error: ApiError) -> ApiError {
    match error {
        ApiError::Status { status, detail, .. } => ApiError::Status {
            status,
            message: detail.clone().unwrap_or_else(|| LOGIN_FAILED.to_string()),
            detail,
        },
        other => other,
    }
}

/// Get current admin info
pub async fn get_current_admin(client: &ApiClient) -> Result<AdminInfo, ApiError> {
    client.get("/Admin/Auth/Me").await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_error_prefers_detail() {
        let err = login_error(ApiError::rejected(
            400,
            "Bad Request",
            r#"{"message":"Validation failed","detail":"Wrong phone or password"}"#,
        ));
        assert_eq!(err.to_string(), "Wrong phone or password");
    }

    #[test]
    fn test_login_error_without_detail() {
        let err = login_error(ApiError::rejected(401, "Unauthorized", r#"{"title":"Unauthorized"}"#));
        assert_eq!(err.to_string(), LOGIN_FAILED);

        let err = login_error(ApiError::rejected(500, "Internal Server Error", "<html>"));
        assert_eq!(err.to_string(), LOGIN_FAILED);
    }

    #[test]
    fn test_login_error_keeps_network_failure() {
        let err = login_error(ApiError::Network("Failed to fetch".into()));
        assert!(matches!(err, ApiError::Network(_)));
    }
}
