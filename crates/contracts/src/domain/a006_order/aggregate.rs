use serde::{Deserialize, Serialize};

use crate::domain::a004_provider::aggregate::Provider;
use crate::domain::a005_user::aggregate::User;
use crate::domain::a008_product::aggregate::Product;
use crate::domain::a009_service::aggregate::Service;
use crate::enums::order_status::OrderStatus;
use crate::shared::pagination::PageRequest;
use crate::shared::query::QueryBuilder;

/// Order row of `GET /Admin/Order`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    #[serde(default)]
    pub total: f64,
    pub order_status: OrderStatus,
    #[serde(default)]
    pub total_services: u32,
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub provider_id: Option<i64>,
    #[serde(default)]
    pub provider: Option<Provider>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Order {
    pub fn customer_name(&self) -> String {
        self.user
            .as_ref()
            .map(|u| u.name.clone())
            .unwrap_or_else(|| format!("User #{}", self.user_id))
    }

    pub fn provider_name(&self) -> String {
        self.provider
            .as_ref()
            .map(|p| p.name.clone())
            .unwrap_or_else(|| "Unassigned".to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderProductLine {
    pub quantity: u32,
    pub product: Product,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderServiceLine {
    pub quantity: u32,
    pub service: Service,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomService {
    pub name: String,
    pub description: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetails {
    pub id: i64,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub final_total: f64,
    pub order_status: OrderStatus,
    #[serde(default)]
    pub payment_type: i32,
    #[serde(default)]
    pub total_products: u32,
    #[serde(default)]
    pub total_services: u32,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub provider_id: Option<i64>,
    #[serde(default)]
    pub provider: Option<Provider>,
    #[serde(default)]
    pub products: Vec<OrderProductLine>,
    #[serde(default)]
    pub services: Vec<OrderServiceLine>,
    #[serde(default)]
    pub custom_service: Option<CustomService>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderRating {
    pub rating: f64,
    pub comment: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
}

impl OrderRating {
    /// Five-star strip, filled up to the rounded rating.
    pub fn stars(&self) -> String {
        let filled = self.rating.round().clamp(0.0, 5.0) as usize;
        format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusLog {
    pub status: OrderStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetailsResponse {
    pub order: OrderDetails,
    #[serde(default)]
    pub rating: Option<OrderRating>,
    #[serde(default)]
    pub status_logs: Vec<OrderStatusLog>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderListParams {
    pub page: PageRequest,
    pub user_id: Option<i64>,
    pub provider_id: Option<i64>,
    pub order_status: Option<OrderStatus>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
}

impl Default for OrderListParams {
    fn default() -> Self {
        Self {
            page: PageRequest::new(1, 10),
            user_id: None,
            provider_id: None,
            order_status: None,
            from_date: None,
            to_date: None,
        }
    }
}

impl OrderListParams {
    /// The five latest bookings shown on the overview page.
    pub fn recent() -> Self {
        Self {
            page: PageRequest::new(1, 5),
            ..Default::default()
        }
    }

    pub fn to_query(&self) -> QueryBuilder {
        let mut q = QueryBuilder::new();
        self.page.write_flat(&mut q);
        q.push_id("UserId", self.user_id)
            .push_id("ProviderId", self.provider_id)
            .push_opt("OrderStatus", self.order_status.map(|s| s.code()))
            .push_text("FromDate", self.from_date.as_deref())
            .push_text("ToDate", self.to_date.as_deref());
        q
    }
}

/// Body of `PATCH /Admin/Order/{id}/Status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_query() {
        assert_eq!(
            OrderListParams::recent().to_query().build(),
            "PageNumber=1&PageSize=5"
        );
    }

    #[test]
    fn test_filtered_query() {
        let params = OrderListParams {
            order_status: Some(OrderStatus::Completed),
            from_date: Some("2025-03-01".into()),
            ..Default::default()
        };
        assert_eq!(
            params.to_query().build(),
            "PageNumber=1&PageSize=10&OrderStatus=6&FromDate=2025-03-01"
        );
    }

    #[test]
    fn test_details_from_json() {
        let json = r#"{
            "order": {
                "id": 40,
                "total": 60,
                "finalTotal": 55,
                "orderStatus": 5,
                "userId": 2,
                "user": {"id": 2, "name": "Ahmed Ali", "phoneNumber": "0770"},
                "services": [{"quantity": 2, "service": {"id": 3, "name": "Home Cleaning", "price": 30}}],
                "customService": null
            },
            "rating": {"rating": 4, "comment": "Great service"},
            "statusLogs": [{"status": 1, "createdAt": "2025-03-01T10:00:00Z"}, {"status": 5}]
        }"#;
        let details: OrderDetailsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(details.order.order_status, OrderStatus::InProgress);
        assert_eq!(details.order.services[0].quantity, 2);
        assert!(details.order.custom_service.is_none());
        assert_eq!(details.status_logs.len(), 2);
        assert_eq!(details.status_logs[1].status, OrderStatus::InProgress);
        let rating = details.rating.unwrap();
        assert_eq!(rating.rating, 4.0);
        assert_eq!(rating.stars(), "★★★★☆");
    }

    #[test]
    fn test_status_body() {
        let body = UpdateOrderStatusRequest {
            status: OrderStatus::Approved,
        };
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"status":2}"#);
    }

    #[test]
    fn test_names_fallback() {
        let order: Order =
            serde_json::from_str(r#"{"id": 1, "orderStatus": 1, "userId": 9}"#).unwrap();
        assert_eq!(order.customer_name(), "User #9");
        assert_eq!(order.provider_name(), "Unassigned");
    }
}
