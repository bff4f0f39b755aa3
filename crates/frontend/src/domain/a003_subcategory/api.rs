use contracts::domain::a003_subcategory::aggregate::{
    SubCategory, SubCategoryForm, SubCategoryListParams,
};
use web_sys::File;

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::{build_form, ApiClient, HttpMethod};

const API_BASE: &str = "/Admin/SubCategory";

pub async fn list_subcategories(
    client: &ApiClient,
    params: &SubCategoryListParams,
) -> Result<Vec<SubCategory>, ApiError> {
    client.get(&params.to_query().append_to(API_BASE)).await
}

pub async fn get_subcategory(client: &ApiClient, id: i64) -> Result<SubCategory, ApiError> {
    client.get(&format!("{}/{}", API_BASE, id)).await
}

pub async fn save_subcategory(
    client: &ApiClient,
    id: Option<i64>,
    form: &SubCategoryForm,
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

pub async fn delete_subcategory(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client
        .send_no_content(HttpMethod::Delete, &format!("{}/{}", API_BASE, id))
        .await
}
