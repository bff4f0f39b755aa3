//! Read-only view of the JWT payload. The signature is never checked here;
//! the backend remains the authority on validity.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use contracts::system::auth::TokenClaims;

/// Decodes the payload segment of a JWT. `None` for anything malformed.
pub fn parse_claims(token: &str) -> Option<TokenClaims> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| log::warn!("Error parsing token: {}", e))
        .ok()?;
    serde_json::from_slice(&bytes)
        .map_err(|e| log::warn!("Error parsing token claims: {}", e))
        .ok()
}

/// A token worth presenting to the backend: decodable and not past `exp`.
/// Opaque tokens are given the benefit of the doubt.
pub fn is_usable(token: &str) -> bool {
    match parse_claims(token) {
        Some(claims) => !claims.is_expired(),
        None => !token.trim().is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_token(payload: &str) -> String {
        format!(
            "{}.{}.sig",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    #[test]
    fn test_parse_dotnet_claims() {
        let token = make_token(
            r#"{"http://schemas.xmlsoap.org/ws/2005/05/identity/claims/nameidentifier":"5",
                "http://schemas.microsoft.com/ws/2008/06/identity/claims/role":"SuperAdmin",
                "exp":4102444800,"iat":1700000000}"#,
        );
        let claims = parse_claims(&token).unwrap();
        assert_eq!(claims.id.as_deref(), Some("5"));
        assert_eq!(claims.role.as_deref(), Some("SuperAdmin"));
        assert_eq!(claims.exp, Some(4102444800));
        assert!(is_usable(&token));
    }

    #[test]
    fn test_expired_token_is_not_usable() {
        let token = make_token(r#"{"exp":1000}"#);
        assert!(!is_usable(&token));
    }

    #[test]
    fn test_malformed_tokens() {
        assert!(parse_claims("not-a-jwt").is_none());
        assert!(parse_claims("a.!!!.c").is_none());
        assert!(is_usable("opaque-session-token"));
        assert!(!is_usable("  "));
    }
}
