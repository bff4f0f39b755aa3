use super::config::{config, DEFAULT_USER_AVATAR, PLACEHOLDER_IMAGE};

/// Absolute URL of a media path returned by the backend.
///
/// Empty paths fall back to the default avatar for user pictures and to the
/// generic placeholder for everything else. Absolute URLs pass through.
pub fn image_url(path: Option<&str>, is_user_image: bool) -> String {
    resolve(&config().image_base_url, path, is_user_image)
}

fn resolve(base: &str, path: Option<&str>, is_user_image: bool) -> String {
    match path.map(str::trim).filter(|p| !p.is_empty()) {
        Some(p) if p.starts_with("http://") || p.starts_with("https://") => p.to_string(),
        Some(p) => format!("{}{}", base, p.trim_start_matches('/')),
        None if is_user_image => DEFAULT_USER_AVATAR.to_string(),
        None => PLACEHOLDER_IMAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://backend.bkhdmtak.app/Media/";

    #[test]
    fn test_relative_path_is_prefixed() {
        assert_eq!(
            resolve(BASE, Some("providers/7.png"), false),
            "https://backend.bkhdmtak.app/Media/providers/7.png"
        );
        assert_eq!(
            resolve(BASE, Some("/a.png"), false),
            "https://backend.bkhdmtak.app/Media/a.png"
        );
    }

    #[test]
    fn test_missing_images() {
        assert_eq!(resolve(BASE, None, true), DEFAULT_USER_AVATAR);
        assert_eq!(resolve(BASE, Some(" "), false), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_absolute_url_passes_through() {
        assert_eq!(resolve(BASE, Some("https://cdn/x.png"), false), "https://cdn/x.png");
    }
}
