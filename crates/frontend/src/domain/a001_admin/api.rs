use contracts::domain::a001_admin::aggregate::{
    AdminInfo, AdminListParams, CreateAdminRequest, CreatedId, UpdateAdminPasswordRequest,
    UpdateAdminRoleRequest,
};

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::{ApiClient, HttpMethod};

const API_BASE: &str = "/Admin/Admin";

pub async fn list_admins(
    client: &ApiClient,
    params: &AdminListParams,
) -> Result<Vec<AdminInfo>, ApiError> {
    client.get(&params.to_query().append_to(API_BASE)).await
}

pub async fn create_admin(
    client: &ApiClient,
    request: &CreateAdminRequest,
) -> Result<CreatedId, ApiError> {
    client.send_json(HttpMethod::Post, API_BASE, request).await
}

pub async fn delete_admin(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client
        .send_no_content(HttpMethod::Delete, &format!("{}/{}", API_BASE, id))
        .await
}

pub async fn update_admin_role(
    client: &ApiClient,
    id: i64,
    is_super_admin: bool,
) -> Result<(), ApiError> {
    let body = UpdateAdminRoleRequest { is_super_admin };
    client
        .send_json_no_content(HttpMethod::Patch, &format!("{}/{}", API_BASE, id), &body)
        .await
}

pub async fn update_admin_password(
    client: &ApiClient,
    id: i64,
    new_password: String,
) -> Result<(), ApiError> {
    let body = UpdateAdminPasswordRequest { new_password };
    let path = format!("{}/{}/UpdatePassword", API_BASE, id);
    client
        .send_json_no_content(HttpMethod::Patch, &path, &body)
        .await
}
