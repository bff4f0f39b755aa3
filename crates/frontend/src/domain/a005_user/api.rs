use contracts::domain::a005_user::aggregate::{User, UserListParams};
use contracts::shared::pagination::PaginatedResponse;

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::{ApiClient, HttpMethod};

const API_BASE: &str = "/Admin/User";

pub async fn list_users(
    client: &ApiClient,
    params: &UserListParams,
) -> Result<PaginatedResponse<User>, ApiError> {
    client.get(&params.to_query().append_to(API_BASE)).await
}

pub async fn get_user(client: &ApiClient, id: i64) -> Result<User, ApiError> {
    client.get(&format!("{}/{}", API_BASE, id)).await
}

pub async fn set_user_blocked(
    client: &ApiClient,
    id: i64,
    is_blocked: bool,
) -> Result<(), ApiError> {
    let path = format!("{}/{}/SetBlock?isBlocked={}", API_BASE, id, is_blocked);
    client.send_no_content(HttpMethod::Put, &path).await
}
