use contracts::domain::a009_service::aggregate::{Service, ServiceListParams};
use contracts::shared::pagination::PaginatedResponse;

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::ApiClient;

const API_BASE: &str = "/Admin/Service";

pub async fn list_services(
    client: &ApiClient,
    params: &ServiceListParams,
) -> Result<PaginatedResponse<Service>, ApiError> {
    client.get(&params.to_query().append_to(API_BASE)).await
}

pub async fn get_service(client: &ApiClient, id: i64) -> Result<Service, ApiError> {
    client.get(&format!("{}/{}", API_BASE, id)).await
}
