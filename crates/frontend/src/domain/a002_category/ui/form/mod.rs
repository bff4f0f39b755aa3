use contracts::domain::a002_category::aggregate::{Category, CategoryForm};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_category::api;
use crate::shared::components::image_input::{picked_file, ImageInput};
use crate::shared::modal::Modal;
use crate::system::auth::context::use_auth;

/// "15" -> 0.15. Empty means no discount.
fn parse_discount_percent(input: &str) -> Result<f64, String> {
    let input = input.trim().trim_end_matches('%').trim();
    if input.is_empty() {
        return Ok(0.0);
    }
    input
        .parse::<f64>()
        .map(|pct| pct / 100.0)
        .map_err(|_| "Platform discount must be a number.".to_string())
}

fn percent_text(fraction: f64) -> String {
    let pct = (fraction * 10000.0).round() / 100.0;
    pct.to_string()
}

/// Create (`category == None`) or edit dialog
#[component]
pub fn CategoryFormModal(
    category: Option<Category>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let auth = use_auth();
    let id = category.as_ref().map(|c| c.id);
    let initial = category
        .as_ref()
        .map(CategoryForm::from_category)
        .unwrap_or_default();
    let current_marker = category.as_ref().and_then(|c| c.marker_image.clone());
    let current_image = category.as_ref().and_then(|c| c.image.clone());

    let name_ar = RwSignal::new(initial.name_ar);
    let name_en = RwSignal::new(initial.name_en);
    let description_ar = RwSignal::new(initial.description_ar);
    let description_en = RwSignal::new(initial.description_en);
    let color_code = RwSignal::new(initial.color_code);
    let discount = RwSignal::new(percent_text(initial.platform_discount));
    let marker_file = picked_file();
    let image_file = picked_file();
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        let platform_discount = match parse_discount_percent(&discount.get_untracked()) {
            Ok(value) => value,
            Err(e) => {
                set_error.set(Some(e));
                return;
            }
        };
        let form = CategoryForm {
            name_ar: name_ar.get_untracked().trim().to_string(),
            name_en: name_en.get_untracked().trim().to_string(),
            description_ar: description_ar.get_untracked(),
            description_en: description_en.get_untracked(),
            color_code: color_code.get_untracked().trim().trim_start_matches('#').to_string(),
            platform_discount,
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
            match auth.check(api::save_category(&client, id, &form, marker, image).await) {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    set_error.set(Some(format!("Failed to save category: {}", e)));
                    set_saving.set(false);
                }
            }
        });
    };

    let disabled = Signal::derive(move || saving.get());
    let title = if id.is_some() { "Edit Category" } else { "New Category" };

    view! {
        <Modal title=title on_close=on_close class="modal--wide">
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

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
            <div class="form__row">
                <div class="form__group">
                    <Label>"Color code"</Label>
                    <Input value=color_code disabled=disabled placeholder="2196F3" />
                </div>
                <div class="form__group">
                    <Label>"Platform discount (%)"</Label>
                    <Input value=discount input_type=InputType::Number disabled=disabled />
                </div>
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
    fn test_parse_discount_percent() {
        assert_eq!(parse_discount_percent(""), Ok(0.0));
        assert_eq!(parse_discount_percent("15"), Ok(0.15));
        assert_eq!(parse_discount_percent(" 50 % "), Ok(0.5));
        assert!(parse_discount_percent("ten").is_err());
    }

    #[test]
    fn test_percent_text() {
        assert_eq!(percent_text(0.15), "15");
        assert_eq!(percent_text(0.0), "0");
        assert_eq!(percent_text(0.125), "12.5");
    }
}
