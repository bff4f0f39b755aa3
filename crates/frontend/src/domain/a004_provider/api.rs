use async_trait::async_trait;
use contracts::domain::a004_provider::aggregate::{
    Provider, ProviderListParams, ProviderWithCategories, UpdateProviderCategoryStatus,
};
use contracts::domain::a004_provider::nearby::{NearbyProvidersResponse, NearbyQuery};
use contracts::shared::pagination::PaginatedResponse;

use super::ui::map::platform::NearbyProviderSource;
use crate::shared::api_error::ApiError;
use crate::shared::api_utils::{ApiClient, HttpMethod};

const API_BASE: &str = "/Admin/Provider";

/// Paged provider list with name/phone/active/available filters
pub async fn list_providers(
    client: &ApiClient,
    params: &ProviderListParams,
) -> Result<PaginatedResponse<Provider>, ApiError> {
    client.get(&params.to_query().append_to(API_BASE)).await
}

pub async fn set_provider_active(
    client: &ApiClient,
    id: i64,
    is_active: bool,
) -> Result<(), ApiError> {
    let path = format!("{}/{}/SetActive?isActive={}", API_BASE, id, is_active);
    client.send_no_content(HttpMethod::Put, &path).await
}

/// Provider profile together with every category it applied for
pub async fn get_provider_with_categories(
    client: &ApiClient,
    id: i64,
) -> Result<ProviderWithCategories, ApiError> {
    let path = format!("/Admin/ProviderCategory/GetProviderWithCategories/{}", id);
    client.get(&path).await
}

pub async fn set_category_status(
    client: &ApiClient,
    request: &UpdateProviderCategoryStatus,
) -> Result<(), ApiError> {
    client
        .send_json_no_content(HttpMethod::Patch, "/Admin/ProviderCategory", request)
        .await
}

/// Active providers around a point, nearest first
pub async fn nearby_providers(
    client: &ApiClient,
    query: &NearbyQuery,
) -> Result<NearbyProvidersResponse, ApiError> {
    let path = query.to_query().append_to(&format!("{}/nearby", API_BASE));
    client.get(&path).await
}

#[async_trait(?Send)]
impl NearbyProviderSource for ApiClient {
    async fn nearby(&self, query: &NearbyQuery) -> Result<NearbyProvidersResponse, ApiError> {
        nearby_providers(self, query).await
    }
}
