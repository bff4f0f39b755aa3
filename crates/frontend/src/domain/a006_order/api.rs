use contracts::domain::a006_order::aggregate::{
    Order, OrderDetailsResponse, OrderListParams, UpdateOrderStatusRequest,
};
use contracts::enums::order_status::OrderStatus;
use contracts::shared::pagination::PaginatedResponse;

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::{ApiClient, HttpMethod};

const API_BASE: &str = "/Admin/Order";

pub async fn list_orders(
    client: &ApiClient,
    params: &OrderListParams,
) -> Result<PaginatedResponse<Order>, ApiError> {
    client.get(&params.to_query().append_to(API_BASE)).await
}

/// Latest bookings for the overview page.
pub async fn recent_orders(client: &ApiClient) -> Result<PaginatedResponse<Order>, ApiError> {
    list_orders(client, &OrderListParams::recent()).await
}

pub async fn get_order(client: &ApiClient, id: i64) -> Result<OrderDetailsResponse, ApiError> {
    client.get(&format!("{}/{}", API_BASE, id)).await
}

pub async fn update_order_status(
    client: &ApiClient,
    id: i64,
    status: OrderStatus,
) -> Result<(), ApiError> {
    let path = format!("{}/{}/Status", API_BASE, id);
    let body = UpdateOrderStatusRequest { status };
    client
        .send_json_no_content(HttpMethod::Patch, &path, &body)
        .await
}
