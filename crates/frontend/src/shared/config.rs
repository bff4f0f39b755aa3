//! Build-time configuration.
//!
//! Every value has a compiled-in default and can be overridden when the
//! wasm bundle is built, e.g.
//! `BKHDMTAK_API_BASE_URL=https://staging.example trunk build`.

use once_cell::sync::Lazy;

const DEFAULT_API_BASE_URL: &str = "https://backend.bkhdmtak.app";
const DEFAULT_IMAGE_BASE_URL: &str = "https://backend.bkhdmtak.app/Media/";
const DEFAULT_MAPS_SCRIPT_URL: &str = "https://maps.googleapis.com/maps/api/js";

/// Shown for users without a profile picture.
pub const DEFAULT_USER_AVATAR: &str =
    "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/person-9MNxkxRFh15nnv2pvalYwqUd8fj0DJ.png";

/// Shown for any other missing image.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=200&width=200";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub image_base_url: String,
    pub maps_script_url: String,
    pub maps_api_key: String,
}

impl AppConfig {
    fn from_build_env() -> Self {
        Self {
            api_base_url: pick(option_env!("BKHDMTAK_API_BASE_URL"), DEFAULT_API_BASE_URL),
            image_base_url: pick(
                option_env!("BKHDMTAK_IMAGE_BASE_URL"),
                DEFAULT_IMAGE_BASE_URL,
            ),
            maps_script_url: pick(
                option_env!("BKHDMTAK_MAPS_SCRIPT_URL"),
                DEFAULT_MAPS_SCRIPT_URL,
            ),
            maps_api_key: option_env!("BKHDMTAK_MAPS_API_KEY")
                .unwrap_or_default()
                .to_string(),
        }
    }

    /// Script URL with the API key appended.
    pub fn maps_script_src(&self) -> String {
        if self.maps_api_key.is_empty() {
            self.maps_script_url.clone()
        } else {
            format!(
                "{}?key={}",
                self.maps_script_url,
                urlencoding::encode(&self.maps_api_key)
            )
        }
    }
}

/// Override or default, normalised to the default's trailing-slash style.
fn pick(value: Option<&str>, default: &str) -> String {
    let mut url = value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
        .trim_end_matches('/')
        .to_string();
    if default.ends_with('/') {
        url.push('/');
    }
    url
}

pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_build_env);

pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_falls_back_on_blank() {
        assert_eq!(pick(None, DEFAULT_API_BASE_URL), "https://backend.bkhdmtak.app");
        assert_eq!(pick(Some("  "), DEFAULT_API_BASE_URL), "https://backend.bkhdmtak.app");
        assert_eq!(pick(Some("http://localhost:5000/"), DEFAULT_API_BASE_URL), "http://localhost:5000");
    }

    #[test]
    fn test_pick_keeps_trailing_slash_for_media() {
        assert_eq!(pick(Some("http://cdn.local/m"), DEFAULT_IMAGE_BASE_URL), "http://cdn.local/m/");
        assert_eq!(pick(None, DEFAULT_IMAGE_BASE_URL), "https://backend.bkhdmtak.app/Media/");
    }

    #[test]
    fn test_script_src_with_key() {
        let cfg = AppConfig {
            api_base_url: String::new(),
            image_base_url: String::new(),
            maps_script_url: DEFAULT_MAPS_SCRIPT_URL.to_string(),
            maps_api_key: "abc".to_string(),
        };
        assert_eq!(cfg.maps_script_src(), "https://maps.googleapis.com/maps/api/js?key=abc");
    }
}
