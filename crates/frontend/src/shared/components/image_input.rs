use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement};

use crate::shared::media::image_url;

/// Picked image for a multipart upload. `None` keeps the stored image.
pub type PickedFile = StoredValue<Option<File>, LocalStorage>;

pub fn picked_file() -> PickedFile {
    StoredValue::new_local(None)
}

/// File picker for a single image, with a preview of the current one.
#[component]
pub fn ImageInput(
    #[prop(into)]
    label: String,
    /// Path of the image already stored on the backend
    #[prop(optional_no_strip, into)]
    current: Option<String>,
    file: PickedFile,
    #[prop(into, optional)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let (picked_name, set_picked_name) = signal::<Option<String>>(None);

    let on_change = move |ev: leptos::ev::Event| {
        let picked = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        set_picked_name.set(picked.as_ref().map(|f| f.name()));
        file.set_value(picked);
    };

    view! {
        <div class="form__group image-input">
            <label class="form__label">{label}</label>
            {current.filter(|p| !p.is_empty()).map(|path| view! {
                <img class="image-input__preview" src=image_url(Some(&path), false) alt="" />
            })}
            <input
                type="file"
                accept="image/*"
                on:change=on_change
                disabled=move || disabled.get()
            />
            {move || picked_name.get().map(|name| view! {
                <span class="image-input__name">{name}</span>
            })}
        </div>
    }
}
