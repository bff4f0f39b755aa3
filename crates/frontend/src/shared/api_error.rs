use thiserror::Error;

pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired. Please log in again.";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error: Unable to connect to the server";

/// Failure of a backend call, already normalised for display.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// 401 from any endpoint. The auth layer turns this into a logout.
    #[error("Session expired. Please log in again.")]
    Unauthorized,

    /// `detail` keeps the body's own `detail` field for callers that show it verbatim.
    #[error("{message}")]
    Status {
        status: u16,
        message: String,
        detail: Option<String>,
    },

    /// Transport failure; the payload is the underlying error for logs.
    #[error("Network error: Unable to connect to the server")]
    Network(String),

    #[error("Failed to serialize request: {0}")]
    Encode(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classifies a non-2xx response. `body` is the raw response text.
    pub fn from_response(status: u16, status_text: &str, body: &str) -> Self {
        if status == 401 {
            return ApiError::Unauthorized;
        }
        ApiError::rejected(status, status_text, body)
    }

    /// Non-2xx without the 401 session handling.
    pub fn rejected(status: u16, status_text: &str, body: &str) -> Self {
        ApiError::Status {
            status,
            message: error_message(status, status_text, body),
            detail: body_field(body, "detail"),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

/// Non-empty string field of a JSON error body.
fn body_field(body: &str, key: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get(key)?
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// `message`, then `detail` from a JSON error body, else a generic line.
pub fn error_message(status: u16, status_text: &str, body: &str) -> String {
    body_field(body, "message")
        .or_else(|| body_field(body, "detail"))
        .unwrap_or_else(|| format!("API error: {} {}", status, status_text).trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_401_is_unauthorized() {
        let err = ApiError::from_response(401, "Unauthorized", r#"{"message":"nope"}"#);
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), SESSION_EXPIRED_MESSAGE);
    }

    #[test]
    fn test_message_then_detail() {
        assert_eq!(
            error_message(400, "Bad Request", r#"{"message":"Name taken","detail":"x"}"#),
            "Name taken"
        );
        assert_eq!(
            error_message(400, "Bad Request", r#"{"title":"t","detail":"Invalid phone"}"#),
            "Invalid phone"
        );
    }

    #[test]
    fn test_status_keeps_detail() {
        let err = ApiError::from_response(
            400,
            "Bad Request",
            r#"{"message":"Validation failed","detail":"Wrong phone or password"}"#,
        );
        assert_eq!(err.to_string(), "Validation failed");
        assert!(matches!(
            err,
            ApiError::Status { detail: Some(ref d), .. } if d == "Wrong phone or password"
        ));
    }

    #[test]
    fn test_generic_message_for_non_json() {
        let err = ApiError::from_response(502, "Bad Gateway", "<html>");
        assert_eq!(err.to_string(), "API error: 502 Bad Gateway");
        assert!(matches!(err, ApiError::Status { status: 502, detail: None, .. }));
        assert_eq!(error_message(500, "", ""), "API error: 500");
    }

    #[test]
    fn test_network_display_hides_detail() {
        let err = ApiError::Network("TypeError: Failed to fetch".into());
        assert_eq!(err.to_string(), NETWORK_ERROR_MESSAGE);
    }
}
