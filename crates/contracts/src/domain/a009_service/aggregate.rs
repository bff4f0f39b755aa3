use serde::{Deserialize, Serialize};

use crate::domain::a002_category::aggregate::Category;
use crate::domain::a003_subcategory::aggregate::SubCategory;
use crate::domain::a004_provider::aggregate::Provider;
use crate::domain::a008_product::aggregate::discounted_price;
use crate::domain::common::ImageRef;
use crate::shared::pagination::PageRequest;
use crate::shared::query::QueryBuilder;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Service {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub discount_amount: Option<f64>,
    /// Platform commission in percent. The backend spells it `platformRation`.
    #[serde(alias = "platformRation")]
    pub platform_ratio: Option<f64>,
    pub is_approved: bool,
    pub images: Vec<ImageRef>,
    pub category_id: Option<i64>,
    pub sub_category_id: Option<i64>,
    pub provider_id: Option<i64>,
    pub category: Option<Category>,
    pub sub_category: Option<SubCategory>,
    pub provider: Option<Provider>,
    pub created_at: Option<String>,
}

impl Service {
    pub fn first_image(&self) -> Option<&str> {
        self.images.iter().find_map(|img| img.path.as_deref())
    }

    pub fn final_price(&self) -> f64 {
        discounted_price(self.price, self.discount_amount.unwrap_or_default())
    }

    /// Already a percentage on services, unlike products.
    pub fn commission_percent(&self) -> f64 {
        self.platform_ratio.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceListParams {
    pub page: PageRequest,
    pub provider_id: Option<i64>,
    pub category_id: Option<i64>,
    pub sub_category_id: Option<i64>,
    pub is_approved: Option<bool>,
}

impl ServiceListParams {
    pub fn to_query(&self) -> QueryBuilder {
        let mut q = QueryBuilder::new();
        self.page.write_nested(&mut q);
        q.push_id("ProviderId", self.provider_id)
            .push_id("CategoryId", self.category_id)
            .push_id("SubCategoryId", self.sub_category_id)
            .push_opt("IsApproved", self.is_approved);
        q
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_misspelled_ratio() {
        let json = r#"{"id": 3, "name": "Home Cleaning", "price": 50, "platformRation": 10}"#;
        let service: Service = serde_json::from_str(json).unwrap();
        assert_eq!(service.platform_ratio, Some(10.0));
        assert_eq!(service.final_price(), 50.0);
        assert_eq!(service.commission_percent(), 10.0);
    }

    #[test]
    fn test_list_query() {
        let params = ServiceListParams {
            page: PageRequest::new(1, 10),
            provider_id: Some(8),
            ..Default::default()
        };
        assert_eq!(
            params.to_query().build(),
            "PaginationRequest.PageSize=10&PaginationRequest.PageNumber=1&ProviderId=8"
        );
    }
}
