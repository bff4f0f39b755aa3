use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_error::SESSION_EXPIRED_MESSAGE;
use crate::system::auth::context::{do_login, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (phone_number, set_phone_number) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let auth = use_auth();
    let session_expired = move || auth.state.with(|s| s.session_expired);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let phone_val = phone_number.get().trim().to_string();
        let password_val = password.get();
        if phone_val.is_empty() || password_val.is_empty() {
            set_error_message.set(Some("Phone number and password are required".to_string()));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            // On success the auth state flips and AppShell swaps to the dashboard.
            if let Err(e) = do_login(auth, phone_val, password_val).await {
                set_error_message.set(Some(e));
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Bkhdmtak"</h1>
                <h2>"Admin Dashboard"</h2>

                <Show when=move || session_expired() && error_message.get().is_none()>
                    <div class="warning-message">{SESSION_EXPIRED_MESSAGE}</div>
                </Show>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="phone-number">"Phone Number"</label>
                        <input
                            type="tel"
                            id="phone-number"
                            placeholder="07XXXXXXXXX"
                            value=move || phone_number.get()
                            on:input=move |ev| set_phone_number.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
