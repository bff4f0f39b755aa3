use contracts::domain::a007_payment::aggregate::{Payment, PaymentDetails, PaymentListParams};
use contracts::shared::pagination::PaginatedResponse;

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::{ApiClient, HttpMethod};

const API_BASE: &str = "/Admin/Payment";

pub async fn list_payments(
    client: &ApiClient,
    params: &PaymentListParams,
) -> Result<PaginatedResponse<Payment>, ApiError> {
    client.get(&params.to_query().append_to(API_BASE)).await
}

pub async fn get_payment(client: &ApiClient, id: i64) -> Result<PaymentDetails, ApiError> {
    client.get(&format!("{}/{}", API_BASE, id)).await
}

/// Settles the given SUCCESS payments to PAID in one request.
pub async fn update_to_paid(client: &ApiClient, ids: &[i64]) -> Result<(), ApiError> {
    let path = format!("{}/UpdateToPaid", API_BASE);
    client
        .send_json_no_content(HttpMethod::Post, &path, ids)
        .await
}

/// Spreadsheet of all payments, as generated by the server.
pub async fn export_payments(client: &ApiClient) -> Result<Vec<u8>, ApiError> {
    client.get_bytes(&format!("{}/Export", API_BASE)).await
}
