//! Wire types of `GET /Admin/Provider/nearby`.

use serde::{Deserialize, Serialize};

use crate::shared::query::QueryBuilder;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NearbyCategory {
    pub id: i64,
    pub name_ar: Option<String>,
    pub name_en: Option<String>,
}

/// Provider as returned by the proximity search. Transient: re-fetched on
/// every location or radius change.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NearbyProvider {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub current_latitude: f64,
    pub current_longitude: f64,
    pub profile_image: Option<String>,
    pub distance_km: f64,
    pub marker_image: Option<String>,
    pub rating: f64,
    pub categories: Vec<NearbyCategory>,
}

impl NearbyProvider {
    /// Custom marker icon URL, if the provider's category defines one.
    pub fn marker_icon(&self) -> Option<&str> {
        self.marker_image.as_deref().filter(|m| !m.trim().is_empty())
    }

    pub fn category_names(&self) -> String {
        self.categories
            .iter()
            .filter_map(|c| c.name_en.as_deref())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NearbyProvidersResponse {
    pub providers: Vec<NearbyProvider>,
    pub count: u32,
    pub message: String,
}

/// Query of the proximity search. `radius` is in kilometres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearbyQuery {
    pub latitude: f64,
    pub longitude: f64,
    pub radius: u32,
    pub page_number: u32,
    pub page_size: u32,
}

impl NearbyQuery {
    pub const PAGE_SIZE: u32 = 100;

    /// First page of up to 100 providers around a point.
    pub fn first_page(latitude: f64, longitude: f64, radius: u32) -> Self {
        Self {
            latitude,
            longitude,
            radius,
            page_number: 1,
            page_size: Self::PAGE_SIZE,
        }
    }

    pub fn to_query(&self) -> QueryBuilder {
        let mut q = QueryBuilder::new();
        q.push("latitude", self.latitude)
            .push("longitude", self.longitude)
            .push("radius", self.radius)
            .push("pageNumber", self.page_number)
            .push("pageSize", self.page_size);
        q
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string() {
        let q = NearbyQuery::first_page(33.3, 44.4, 25);
        assert_eq!(
            q.to_query().append_to("/Admin/Provider/nearby"),
            "/Admin/Provider/nearby?latitude=33.3&longitude=44.4&radius=25&pageNumber=1&pageSize=100"
        );
    }

    #[test]
    fn test_null_marker_image_means_default_icon() {
        let json = r#"{
            "providers": [{
                "id": 7,
                "name": "Acme Cleaning",
                "currentLatitude": 33.31,
                "currentLongitude": 44.41,
                "distanceKm": 1.2,
                "categories": [{"id": 1, "nameEn": "Cleaning"}],
                "markerImage": null
            }],
            "count": 1,
            "message": "ok"
        }"#;
        let response: NearbyProvidersResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.count, 1);
        let provider = &response.providers[0];
        assert_eq!(provider.marker_icon(), None);
        assert_eq!(provider.category_names(), "Cleaning");
        assert!(provider.address.is_none());
    }

    #[test]
    fn test_blank_marker_image_is_ignored() {
        let provider = NearbyProvider {
            marker_image: Some(" ".into()),
            ..Default::default()
        };
        assert_eq!(provider.marker_icon(), None);
    }
}
