use serde::{Deserialize, Serialize};

use crate::domain::a002_category::aggregate::Category;
use crate::domain::a003_subcategory::aggregate::SubCategory;
use crate::domain::a004_provider::aggregate::Provider;
use crate::domain::common::ImageRef;
use crate::shared::pagination::PageRequest;
use crate::shared::query::QueryBuilder;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    /// Fraction of the price, e.g. `0.2` for 20 %.
    pub discount_amount: Option<f64>,
    /// Platform commission as a fraction.
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

impl Product {
    pub fn first_image(&self) -> Option<&str> {
        self.images.iter().find_map(|img| img.path.as_deref())
    }

    pub fn final_price(&self) -> f64 {
        discounted_price(self.price, self.discount_amount.unwrap_or_default())
    }

    pub fn commission_percent(&self) -> f64 {
        self.platform_ratio.unwrap_or_default() * 100.0
    }
}

/// Price after a fractional discount; non-positive discounts leave it as is.
pub fn discounted_price(price: f64, discount: f64) -> f64 {
    if discount > 0.0 {
        price - price * discount
    } else {
        price
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductListParams {
    pub page: PageRequest,
    pub provider_id: Option<i64>,
    pub category_id: Option<i64>,
    pub sub_category_id: Option<i64>,
    pub is_approved: Option<bool>,
    pub keyword: Option<String>,
}

impl ProductListParams {
    pub fn to_query(&self) -> QueryBuilder {
        let mut q = QueryBuilder::new();
        self.page.write_nested(&mut q);
        q.push_id("ProviderId", self.provider_id)
            .push_id("CategoryId", self.category_id)
            .push_id("SubCategoryId", self.sub_category_id)
            .push_opt("IsApproved", self.is_approved)
            .push_text("Keyword", self.keyword.as_deref());
        q
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discounted_price() {
        assert_eq!(discounted_price(100.0, 0.2), 80.0);
        assert_eq!(discounted_price(100.0, 0.0), 100.0);
        assert_eq!(discounted_price(100.0, -1.0), 100.0);
    }

    #[test]
    fn test_product_from_json() {
        let json = r#"{
            "id": 11,
            "name": "Cleaning Supplies Kit",
            "price": 25000,
            "discountAmount": 0.1,
            "platformRatio": 0.05,
            "isApproved": true,
            "images": [{"path": null}, {"path": "products/kit.png"}],
            "category": {"id": 1, "nameEn": "Cleaning"}
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.first_image(), Some("products/kit.png"));
        assert_eq!(product.final_price(), 22500.0);
        assert_eq!(product.commission_percent(), 5.0);
        assert_eq!(product.category.unwrap().label(), "Cleaning");
    }

    #[test]
    fn test_list_query() {
        let params = ProductListParams {
            page: PageRequest::new(1, 10),
            category_id: Some(3),
            is_approved: Some(false),
            keyword: Some("kit".into()),
            ..Default::default()
        };
        assert_eq!(
            params.to_query().build(),
            "PaginationRequest.PageSize=10&PaginationRequest.PageNumber=1&CategoryId=3&IsApproved=false&Keyword=kit"
        );
    }
}
