use contracts::domain::a002_category::aggregate::{Category, CategoryListParams};
use contracts::domain::a003_subcategory::aggregate::{SubCategory, SubCategoryForm};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_category::api as category_api;
use crate::domain::a003_subcategory::api;
use crate::shared::components::image_input::{picked_file, ImageInput};
use crate::shared::modal::Modal;
use crate::system::auth::context::use_auth;

/// Select value -> category id; the empty option maps to 0.
fn parse_category_id(value: &str) -> i64 {
    value.trim().parse().unwrap_or(0)
}

#[component]
pub fn SubCategoryFormModal(
    subcategory: Option<SubCategory>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let auth = use_auth();
    let id = subcategory.as_ref().map(|s| s.id);
    let initial = subcategory
        .as_ref()
        .map(SubCategoryForm::from_subcategory)
        .unwrap_or_default();
    let current_marker = subcategory.as_ref().and_then(|s| s.marker_image.clone());
    let current_image = subcategory.as_ref().and_then(|s| s.image.clone());

    let name_ar = RwSignal::new(initial.name_ar);
    let name_en = RwSignal::new(initial.name_en);
    let description_ar = RwSignal::new(initial.description_ar);
    let description_en = RwSignal::new(initial.description_en);
    let color_code = RwSignal::new(initial.color_code);
    let category_id = RwSignal::new(if initial.category_id > 0 {
        initial.category_id.to_string()
    } else {
        String::new()
    });
    let categories: RwSignal<Vec<Category>> = RwSignal::new(Vec::new());
    let marker_file = picked_file();
    let image_file = picked_file();
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    spawn_local(async move {
        let client = auth.client();
        let result = category_api::list_categories(&client, &CategoryListParams::default()).await;
        match auth.check(result) {
            Ok(items) => categories.set(items),
            Err(e) => set_error.set(Some(format!("Failed to load categories: {}", e))),
        }
    });

    let on_save = move |_| {
        let form = SubCategoryForm {
            name_ar: name_ar.get_untracked().trim().to_string(),
            name_en: name_en.get_untracked().trim().to_string(),
            description_ar: description_ar.get_untracked(),
            description_en: description_en.get_untracked(),
            color_code: color_code.get_untracked().trim().trim_start_matches('#').to_string(),
            category_id: parse_category_id(&category_id.get_untracked()),
        };
        if let Err(e) = form.validate() {
            set_error.set(Some(e));
            return;
        }
        set_saving.set(true);
        set_error.set(None);
        let marker = marker_file.get_value();
        let image = image_file.get_value();
        spawn_local(async move {
            let client = auth.client();
            match auth.check(api::save_subcategory(&client, id, &form, marker, image).await) {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    set_error.set(Some(format!("Failed to save subcategory: {}", e)));
                    set_saving.set(false);
                }
            }
        });
    };

    let disabled = Signal::derive(move || saving.get());
    let title = if id.is_some() { "Edit Subcategory" } else { "New Subcategory" };

    view! {
        <Modal title=title on_close=on_close class="modal--wide">
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="form__group">
                <Label>"Parent category"</Label>
                <Select value=category_id>
                    <option value="">"Select a category"</option>
                    {move || categories.get().into_iter().map(|c| view! {
                        <option value=c.id.to_string()>{c.label()}</option>
                    }).collect_view()}
                </Select>
            </div>
            <div class="form__row">
                <div class="form__group">
                    <Label>"Name (Arabic)"</Label>
                    <Input value=name_ar disabled=disabled attr:dir="rtl" />
                </div>
                <div class="form__group">
                    <Label>"Name (English)"</Label>
                    <Input value=name_en disabled=disabled />
                </div>
            </div>
            <div class="form__row">
                <div class="form__group">
                    <Label>"Description (Arabic)"</Label>
                    <Textarea value=description_ar disabled=disabled attr:rows=3 attr:dir="rtl" />
                </div>
                <div class="form__group">
                    <Label>"Description (English)"</Label>
                    <Textarea value=description_en disabled=disabled attr:rows=3 />
                </div>
            </div>
            <div class="form__group">
                <Label>"Color code"</Label>
                <Input value=color_code disabled=disabled />
            </div>
            <div class="form__row">
                <ImageInput label="Marker image" current=current_marker file=marker_file disabled=disabled />
                <ImageInput label="Image" current=current_image file=image_file disabled=disabled />
            </div>

            <div class="modal__footer">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_close.run(())
                    disabled=disabled
                >
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=on_save disabled=disabled>
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </Button>
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category_id() {
        assert_eq!(parse_category_id("12"), 12);
        assert_eq!(parse_category_id(""), 0);
        assert_eq!(parse_category_id("abc"), 0);
    }
}
