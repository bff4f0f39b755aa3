use serde::{Deserialize, Serialize};

use crate::domain::a002_category::aggregate::Category;
use crate::shared::pagination::PageRequest;
use crate::shared::query::QueryBuilder;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Provider {
    pub id: i64,
    pub name: String,
    pub phone_number: String,
    pub image_path: Option<String>,
    pub email: Option<String>,
    pub country_id: Option<i64>,
    pub city_id: Option<i64>,
    pub state_id: Option<i64>,
    pub is_available: bool,
    pub is_active: bool,
    pub practicing_image: Option<String>,
    pub unified_card_image_front: Option<String>,
    pub unified_card_image_back: Option<String>,
    pub residence_card_image_front: Option<String>,
    pub residence_card_image_back: Option<String>,
    pub account_or_card_number: Option<String>,
    pub current_latitude: Option<f64>,
    pub current_longitude: Option<f64>,
    pub distance_in_km: Option<f64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Provider {
    /// Identity document images that were actually uploaded, with captions.
    pub fn documents(&self) -> Vec<(&'static str, String)> {
        [
            ("Practicing license", &self.practicing_image),
            ("Unified card (front)", &self.unified_card_image_front),
            ("Unified card (back)", &self.unified_card_image_back),
            ("Residence card (front)", &self.residence_card_image_front),
            ("Residence card (back)", &self.residence_card_image_back),
        ]
        .into_iter()
        .filter_map(|(caption, path)| {
            path.as_ref()
                .filter(|p| !p.is_empty())
                .map(|p| (caption, p.clone()))
        })
        .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderListParams {
    pub page: PageRequest,
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub active: Option<bool>,
    pub available: Option<bool>,
}

impl ProviderListParams {
    pub fn to_query(&self) -> QueryBuilder {
        let mut q = QueryBuilder::new();
        self.page.write_nested(&mut q);
        q.push_text("Name", self.name.as_deref())
            .push_text("PhoneNumber", self.phone_number.as_deref())
            .push_opt("Active", self.active)
            .push_opt("Available", self.available);
        q
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProviderCategoryLink {
    pub category: Category,
    pub is_approved: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProviderWithCategories {
    pub provider: Provider,
    pub provider_categories: Vec<ProviderCategoryLink>,
}

impl ProviderWithCategories {
    pub fn approved_count(&self) -> usize {
        self.provider_categories
            .iter()
            .filter(|link| link.is_approved)
            .count()
    }

    /// Applies a confirmed approval change locally.
    pub fn set_approval(&mut self, category_id: i64, approved: bool) -> bool {
        match self
            .provider_categories
            .iter_mut()
            .find(|link| link.category.id == category_id)
        {
            Some(link) => {
                link.is_approved = approved;
                true
            }
            None => false,
        }
    }
}

/// Body of `PATCH /Admin/ProviderCategory`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProviderCategoryStatus {
    pub provider_id: i64,
    pub category_id: i64,
    pub new_status: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query() {
        let params = ProviderListParams {
            page: PageRequest::new(1, 10),
            name: Some("Acme".into()),
            active: Some(true),
            ..Default::default()
        };
        assert_eq!(
            params.to_query().build(),
            "PaginationRequest.PageSize=10&PaginationRequest.PageNumber=1&Name=Acme&Active=true"
        );
    }

    #[test]
    fn test_with_categories_approval() {
        let json = r#"{
            "provider": {"id": 5, "name": "Fix-It", "phoneNumber": "0770", "isActive": true},
            "providerCategories": [
                {"category": {"id": 1, "nameEn": "Plumbing"}, "isApproved": false},
                {"category": {"id": 2, "nameEn": "Electric"}, "isApproved": true}
            ]
        }"#;
        let mut data: ProviderWithCategories = serde_json::from_str(json).unwrap();
        assert_eq!(data.provider.id, 5);
        assert_eq!(data.approved_count(), 1);
        assert!(data.set_approval(1, true));
        assert_eq!(data.approved_count(), 2);
        assert!(!data.set_approval(99, true));
    }

    #[test]
    fn test_documents_skip_missing() {
        let provider = Provider {
            practicing_image: Some("docs/p.png".into()),
            unified_card_image_front: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(
            provider.documents(),
            vec![("Practicing license", "docs/p.png".to_string())]
        );
    }

    #[test]
    fn test_status_body_wire_names() {
        let body = UpdateProviderCategoryStatus {
            provider_id: 5,
            category_id: 2,
            new_status: false,
        };
        let json = serde_json::to_value(body).unwrap();
        assert_eq!(json["providerId"], 5);
        assert_eq!(json["newStatus"], false);
    }
}
