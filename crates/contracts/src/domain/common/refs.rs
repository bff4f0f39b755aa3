use serde::{Deserialize, Serialize};

/// Image attachment (`{ path }`) of products and services.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageRef {
    pub path: Option<String>,
}

/// Normalises a stored colour code (`4CAF50` or `#4CAF50`) into CSS form.
pub fn css_color(code: Option<&str>) -> Option<String> {
    let code = code?.trim();
    if code.is_empty() {
        None
    } else if code.starts_with('#') {
        Some(code.to_string())
    } else {
        Some(format!("#{}", code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_color() {
        assert_eq!(css_color(Some("4CAF50")).as_deref(), Some("#4CAF50"));
        assert_eq!(css_color(Some("#2196F3")).as_deref(), Some("#2196F3"));
        assert_eq!(css_color(Some(" ")), None);
        assert_eq!(css_color(None), None);
    }
}
