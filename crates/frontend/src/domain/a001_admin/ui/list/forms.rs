use contracts::domain::a001_admin::aggregate::{AdminInfo, CreateAdminRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::super::super::api;
use crate::shared::modal::Modal;
use crate::system::auth::context::use_auth;

const MIN_PASSWORD_LEN: usize = 6;

fn check_new_password(password: &str, confirm: &str) -> Result<(), String> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        ));
    }
    if password != confirm {
        return Err("Passwords do not match".to_string());
    }
    Ok(())
}

#[component]
pub fn CreateAdminForm(on_created: Callback<()>, on_close: Callback<()>) -> impl IntoView {
    let auth = use_auth();
    let name = RwSignal::new(String::new());
    let phone_number = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let is_super_admin = RwSignal::new(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        let request = CreateAdminRequest {
            name: name.get_untracked().trim().to_string(),
            phone_number: phone_number.get_untracked().trim().to_string(),
            password: password.get_untracked(),
            is_super_admin: is_super_admin.get_untracked(),
        };
        if let Err(e) = request.validate() {
            set_error.set(Some(e));
            return;
        }
        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            match auth.check(api::create_admin(&auth.client(), &request).await) {
                Ok(created) => {
                    log::info!("Created admin {}", created.id);
                    on_created.run(());
                }
                Err(e) => {
                    set_error.set(Some(format!("Failed to create admin: {}", e)));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <Modal title="New Admin" on_close=on_close>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="form__group">
                <Label>"Name"</Label>
                <Input value=name disabled=Signal::derive(move || saving.get()) />
            </div>
            <div class="form__group">
                <Label>"Phone number"</Label>
                <Input
                    value=phone_number
                    input_type=InputType::Tel
                    disabled=Signal::derive(move || saving.get())
                />
            </div>
            <div class="form__group">
                <Label>"Password"</Label>
                <Input
                    value=password
                    input_type=InputType::Password
                    disabled=Signal::derive(move || saving.get())
                />
            </div>
            <div class="form__group">
                <Checkbox checked=is_super_admin label="Super admin" />
            </div>

            <div class="modal__footer">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_close.run(())
                    disabled=Signal::derive(move || saving.get())
                >
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_save
                    disabled=Signal::derive(move || saving.get())
                >
                    {move || if saving.get() { "Saving..." } else { "Create" }}
                </Button>
            </div>
        </Modal>
    }
}

#[component]
pub fn PasswordForm(admin: AdminInfo, on_close: Callback<()>) -> impl IntoView {
    let auth = use_auth();
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);
    let admin_id = admin.id;

    let on_save = move |_| {
        let new_password = password.get_untracked();
        if let Err(e) = check_new_password(&new_password, &confirm.get_untracked()) {
            set_error.set(Some(e));
            return;
        }
        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            let client = auth.client();
            match auth.check(api::update_admin_password(&client, admin_id, new_password).await) {
                Ok(()) => on_close.run(()),
                Err(e) => {
                    set_error.set(Some(format!("Failed to change password: {}", e)));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <Modal title=format!("Change Password: {}", admin.display_name()) on_close=on_close>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="form__group">
                <Label>"New password"</Label>
                <Input
                    value=password
                    input_type=InputType::Password
                    disabled=Signal::derive(move || saving.get())
                />
            </div>
            <div class="form__group">
                <Label>"Confirm password"</Label>
                <Input
                    value=confirm
                    input_type=InputType::Password
                    disabled=Signal::derive(move || saving.get())
                />
            </div>

            <div class="modal__footer">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_close.run(())
                    disabled=Signal::derive(move || saving.get())
                >
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_save
                    disabled=Signal::derive(move || saving.get())
                >
                    {move || if saving.get() { "Saving..." } else { "Change Password" }}
                </Button>
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_new_password() {
        assert!(check_new_password("secret1", "secret1").is_ok());
        assert_eq!(
            check_new_password("abc", "abc"),
            Err("Password must be at least 6 characters".to_string())
        );
        assert_eq!(
            check_new_password("secret1", "secret2"),
            Err("Passwords do not match".to_string())
        );
    }
}
