//! Plain data of the provider proximity map: coordinates, the search
//! radius, marker descriptions and the offline fallback dataset.

use contracts::domain::a004_provider::nearby::{
    NearbyCategory, NearbyProvider, NearbyProvidersResponse,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    fn offset(&self, delta: f64) -> Self {
        Self::new(self.lat + delta, self.lng + delta)
    }
}

/// Baghdad. Used whenever the browser cannot or will not report a position.
pub const DEFAULT_LOCATION: GeoPoint = GeoPoint::new(33.3152, 44.3661);

pub const DEFAULT_ZOOM: u8 = 13;

/// Loading longer than this is reported as a timeout.
pub const WATCHDOG_MS: u32 = 15_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeolocationOptions {
    pub enable_high_accuracy: bool,
    pub timeout_ms: u32,
    pub maximum_age_ms: u32,
}

impl Default for GeolocationOptions {
    fn default() -> Self {
        Self {
            enable_high_accuracy: true,
            timeout_ms: 10_000,
            maximum_age_ms: 0,
        }
    }
}

/// Search radius in whole kilometres, always within `[MIN, MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRadius(u32);

impl SearchRadius {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 100;
    pub const DEFAULT: SearchRadius = SearchRadius(25);

    pub fn clamped(km: i64) -> Self {
        Self(km.clamp(Self::MIN as i64, Self::MAX as i64) as u32)
    }

    /// Parses user input the way a numeric field reads it: the leading
    /// integer is taken, anything unparsable or zero becomes the minimum.
    pub fn parse(input: &str) -> Self {
        Self::clamped(leading_integer(input).filter(|v| *v != 0).unwrap_or(1))
    }

    pub fn km(&self) -> u32 {
        self.0
    }
}

impl Default for SearchRadius {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn leading_integer(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // Saturate on absurdly long input; it is clamped afterwards anyway.
    Some(digits[..end].parse::<i64>().unwrap_or(i64::MAX) * sign)
}

/// Appearance of a marker.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkerIcon {
    /// Filled circle drawn by the map library.
    Circle {
        scale: f64,
        fill_color: &'static str,
        fill_opacity: f64,
        stroke_color: &'static str,
        stroke_weight: f64,
    },
    /// Remote image scaled to `size` x `size` pixels.
    Image { url: String, size: u32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub position: GeoPoint,
    pub title: String,
    pub icon: MarkerIcon,
    /// Popup opened on click.
    pub info_html: Option<String>,
}

pub fn user_location_marker(position: GeoPoint) -> MarkerSpec {
    MarkerSpec {
        position,
        title: "Your Location".to_string(),
        icon: MarkerIcon::Circle {
            scale: 7.0,
            fill_color: "#4285F4",
            fill_opacity: 1.0,
            stroke_color: "#ffffff",
            stroke_weight: 2.0,
        },
        info_html: None,
    }
}

pub const PROVIDER_ICON_SIZE: u32 = 48;

pub fn provider_marker(provider: &NearbyProvider) -> MarkerSpec {
    let icon = match provider.marker_icon() {
        Some(url) => MarkerIcon::Image {
            url: url.to_string(),
            size: PROVIDER_ICON_SIZE,
        },
        None => MarkerIcon::Circle {
            scale: 12.0,
            fill_color: "#FF5722",
            fill_opacity: 0.9,
            stroke_color: "#FFFFFF",
            stroke_weight: 2.0,
        },
    };
    MarkerSpec {
        position: GeoPoint::new(provider.current_latitude, provider.current_longitude),
        title: provider.name.clone(),
        icon,
        info_html: Some(info_window_html(provider)),
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn non_empty(value: Option<&str>) -> &str {
    value.map(str::trim).filter(|v| !v.is_empty()).unwrap_or("N/A")
}

/// Popup body: name, address, phone, distance and, when present, the
/// English category names.
pub fn info_window_html(provider: &NearbyProvider) -> String {
    let mut html = String::from(r#"<div style="padding: 8px; max-width: 200px;">"#);
    html.push_str(&format!(
        r#"<h3 style="margin: 0 0 8px; font-size: 16px;">{}</h3>"#,
        escape_html(&provider.name)
    ));
    html.push_str(&format!(
        r#"<p style="margin: 4px 0;"><strong>Address:</strong> {}</p>"#,
        escape_html(non_empty(provider.address.as_deref()))
    ));
    html.push_str(&format!(
        r#"<p style="margin: 4px 0;"><strong>Phone:</strong> {}</p>"#,
        escape_html(non_empty(provider.phone_number.as_deref()))
    ));
    html.push_str(&format!(
        r#"<p style="margin: 4px 0;"><strong>Distance:</strong> {:.2} km</p>"#,
        provider.distance_km
    ));
    if !provider.categories.is_empty() {
        html.push_str(&format!(
            r#"<p style="margin: 4px 0;"><strong>Categories:</strong> {}</p>"#,
            escape_html(&provider.category_names())
        ));
    }
    html.push_str("</div>");
    html
}

/// Panel headline for `count` providers on the map.
pub fn summary_text(count: usize) -> String {
    match count {
        0 => "No providers found".to_string(),
        1 => "Showing 1 active provider".to_string(),
        n => format!("Showing {} active providers", n),
    }
}

fn mock_category(id: i64, name: &str) -> NearbyCategory {
    NearbyCategory {
        id,
        name_ar: Some(name.to_string()),
        name_en: Some(name.to_string()),
    }
}

/// Two stand-in providers around `center`, shown when the nearby search
/// fails so the map stays usable.
pub fn fallback_providers(center: GeoPoint) -> NearbyProvidersResponse {
    let first = center.offset(0.01);
    let second = center.offset(-0.01);
    NearbyProvidersResponse {
        providers: vec![
            NearbyProvider {
                id: 1,
                name: "Test Provider 1".to_string(),
                address: Some("Test Address 1".to_string()),
                phone_number: Some("1234567890".to_string()),
                current_latitude: first.lat,
                current_longitude: first.lng,
                profile_image: Some(String::new()),
                distance_km: 1.5,
                marker_image: Some(String::new()),
                rating: 4.5,
                categories: vec![mock_category(1, "Test Category")],
            },
            NearbyProvider {
                id: 2,
                name: "Test Provider 2".to_string(),
                address: Some("Test Address 2".to_string()),
                phone_number: Some("0987654321".to_string()),
                current_latitude: second.lat,
                current_longitude: second.lng,
                profile_image: Some(String::new()),
                distance_km: 2.3,
                marker_image: Some(String::new()),
                rating: 3.8,
                categories: vec![mock_category(2, "Another Category")],
            },
        ],
        count: 2,
        message: "Providers found successfully.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_bounds() {
        assert_eq!(SearchRadius::clamped(200).km(), 100);
        assert_eq!(SearchRadius::clamped(0).km(), 1);
        assert_eq!(SearchRadius::parse("200").km(), 100);
        assert_eq!(SearchRadius::parse("0").km(), 1);
        assert_eq!(SearchRadius::parse("-5").km(), 1);
        assert_eq!(SearchRadius::parse("abc").km(), 1);
        assert_eq!(SearchRadius::parse("").km(), 1);
        assert_eq!(SearchRadius::parse("42.9").km(), 42);
        assert_eq!(SearchRadius::parse(" 12km").km(), 12);
        assert_eq!(SearchRadius::parse("99999999999999999999999").km(), 100);
        assert_eq!(SearchRadius::default().km(), 25);
    }

    #[test]
    fn test_summary_text() {
        assert_eq!(summary_text(0), "No providers found");
        assert_eq!(summary_text(1), "Showing 1 active provider");
        assert_eq!(summary_text(5), "Showing 5 active providers");
    }

    #[test]
    fn test_provider_marker_icons() {
        let mut provider = NearbyProvider {
            id: 9,
            name: "Fixit".into(),
            ..Default::default()
        };
        assert!(matches!(
            provider_marker(&provider).icon,
            MarkerIcon::Circle { fill_color: "#FF5722", .. }
        ));

        provider.marker_image = Some("https://cdn/pin.png".into());
        assert_eq!(
            provider_marker(&provider).icon,
            MarkerIcon::Image {
                url: "https://cdn/pin.png".into(),
                size: 48
            }
        );
    }

    #[test]
    fn test_info_window_content() {
        let provider = NearbyProvider {
            name: "Tom & Sons".into(),
            phone_number: Some("0770".into()),
            distance_km: 1.0 / 3.0,
            ..Default::default()
        };
        let html = info_window_html(&provider);
        assert!(html.contains("Tom &amp; Sons"));
        assert!(html.contains("<strong>Address:</strong> N/A"));
        assert!(html.contains("<strong>Distance:</strong> 0.33 km"));
        assert!(!html.contains("Categories"));

        let with_categories = NearbyProvider {
            categories: vec![mock_category(1, "Cleaning"), mock_category(2, "Plumbing")],
            ..provider
        };
        assert!(info_window_html(&with_categories)
            .contains("<strong>Categories:</strong> Cleaning, Plumbing"));
    }

    #[test]
    fn test_fallback_dataset() {
        let data = fallback_providers(GeoPoint::new(33.0, 44.0));
        assert_eq!(data.count, 2);
        let ids: Vec<i64> = data.providers.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert!((data.providers[0].current_latitude - 33.01).abs() < 1e-9);
        assert!((data.providers[1].current_longitude - 43.99).abs() < 1e-9);
        assert_eq!(data.providers[0].distance_km, 1.5);
        assert_eq!(data.providers[1].rating, 3.8);
        assert!(data.providers.iter().all(|p| p.marker_icon().is_none()));
    }
}
