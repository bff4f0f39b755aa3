use serde::{Deserialize, Serialize};

use crate::domain::a005_user::aggregate::User;
use crate::enums::payment_status::PaymentStatus;
use crate::shared::pagination::PageRequest;
use crate::shared::query::QueryBuilder;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: i64,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub payment_method: i32,
    pub status: PaymentStatus,
    #[serde(default)]
    pub order_id: i64,
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSummary {
    pub id: i64,
    #[serde(default)]
    pub amount: f64,
    pub status: PaymentStatus,
    #[serde(default)]
    pub order_id: i64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentLog {
    pub status: PaymentStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// `GET /Admin/Payment/{id}`: the payment and its gateway status history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentDetails {
    pub payment: PaymentSummary,
    #[serde(default)]
    pub logs: Vec<PaymentLog>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentListParams {
    pub page: PageRequest,
    pub status: Option<PaymentStatus>,
}

impl Default for PaymentListParams {
    fn default() -> Self {
        Self {
            page: PageRequest::new(1, 10),
            status: None,
        }
    }
}

impl PaymentListParams {
    pub fn to_query(&self) -> QueryBuilder {
        let mut q = QueryBuilder::new();
        self.page.write_nested(&mut q);
        q.push_opt("Status", self.status.as_ref().map(PaymentStatus::code));
        q
    }
}

/// Ids of the payments on a page that may be settled to PAID.
pub fn settleable_ids(payments: &[Payment]) -> Vec<i64> {
    payments
        .iter()
        .filter(|p| p.status.can_mark_paid())
        .map(|p| p.id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payment(id: i64, status: &str) -> Payment {
        Payment {
            id,
            amount: 10.0,
            payment_method: 1,
            status: PaymentStatus::from_code(status),
            order_id: id * 10,
            user_id: 1,
            user: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_settleable_ids() {
        let page = vec![
            payment(1, "SUCCESS"),
            payment(2, "PAID"),
            payment(3, "SUCCESS"),
            payment(4, "FAILED"),
        ];
        assert_eq!(settleable_ids(&page), vec![1, 3]);
    }

    #[test]
    fn test_query_with_status() {
        let params = PaymentListParams {
            status: Some(PaymentStatus::Success),
            ..Default::default()
        };
        assert_eq!(
            params.to_query().build(),
            "PaginationRequest.PageSize=10&PaginationRequest.PageNumber=1&Status=SUCCESS"
        );
    }

    #[test]
    fn test_details_from_json() {
        let json = r#"{
            "payment": {"id": 5, "amount": 1500, "status": "SUCCESS", "orderId": 40},
            "logs": [
                {"status": "CREATED", "createdAt": "2025-03-14T10:20:03Z"},
                {"status": "SUCCESS", "createdAt": "2025-03-14T10:21:00Z"}
            ]
        }"#;
        let details: PaymentDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.payment.status, PaymentStatus::Success);
        assert_eq!(details.logs.len(), 2);
        assert_eq!(details.logs[0].status, PaymentStatus::Created);
    }
}
