use contracts::domain::a002_category::aggregate::{Category, CategoryForm, CategoryListParams};
use web_sys::File;

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::{build_form, ApiClient, HttpMethod};

const API_BASE: &str = "/Admin/Category";

pub async fn list_categories(
    client: &ApiClient,
    params: &CategoryListParams,
) -> Result<Vec<Category>, ApiError> {
    client.get(&params.to_query().append_to(API_BASE)).await
}

pub async fn get_category(client: &ApiClient, id: i64) -> Result<Category, ApiError> {
    client.get(&format!("{}/{}", API_BASE, id)).await
}

/// `POST` for a new category, `PUT /{id}` for an existing one.
pub async fn save_category(
    client: &ApiClient,
    id: Option<i64>,
    form: &CategoryForm,
    marker_image: Option<File>,
    image: Option<File>,
) -> Result<(), ApiError> {
    let body = build_form(
        &form.text_fields(),
        &[("MarkerImage", marker_image), ("Image", image)],
    )?;
    match id {
        Some(id) => {
            client
                .send_form_no_content(HttpMethod::Put, &format!("{}/{}", API_BASE, id), &body)
                .await
        }
        None => client.send_form_no_content(HttpMethod::Post, API_BASE, &body).await,
    }
}

pub async fn delete_category(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client
        .send_no_content(HttpMethod::Delete, &format!("{}/{}", API_BASE, id))
        .await
}
