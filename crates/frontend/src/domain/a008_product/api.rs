use contracts::domain::a008_product::aggregate::{Product, ProductListParams};
use contracts::shared::pagination::PaginatedResponse;

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::ApiClient;

const API_BASE: &str = "/Admin/Product";

pub async fn list_products(
    client: &ApiClient,
    params: &ProductListParams,
) -> Result<PaginatedResponse<Product>, ApiError> {
    client.get(&params.to_query().append_to(API_BASE)).await
}

pub async fn get_product(client: &ApiClient, id: i64) -> Result<Product, ApiError> {
    client.get(&format!("{}/{}", API_BASE, id)).await
}
