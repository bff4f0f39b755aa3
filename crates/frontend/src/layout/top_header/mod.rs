//! Top bar: sidebar toggle, brand, signed-in admin and logout.

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();
    let auth = use_auth();

    let is_sidebar_visible = move || ctx.left_open.get();
    let admin_name = move || {
        auth.state
            .with(|s| s.user.as_ref().map(|u| u.display_name()))
            .unwrap_or_default()
    };
    let role = move || if auth.is_super_admin() { "Super Admin" } else { "Admin" };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Bkhdmtak Admin"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    <span class="top-header__user-name">{admin_name}</span>
                    <span class="top-header__user-role">{role}</span>
                </div>
                <button class="top-header__icon-btn" on:click=move |_| auth.logout() title="Log out">
                    {icon("logout")}
                </button>
            </div>
        </div>
    }
}
