//! Auth gate and the signed-in layout.

use crate::layout::center::TabBar;
use crate::layout::global_context::{use_app_context, Tab as TabData};
use crate::layout::left::Sidebar;
use crate::layout::tabs::TabPage;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

const HOME_TAB: &str = "d400_overview";

/// Sidebar, tab bar and the open tabs. Syncs the active tab with `?active=`.
#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = use_app_context();
    tabs_store.init_router_integration(HOME_TAB);

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <TabBar />
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| view! { <TabPage tab=tab tabs_store=tabs_store /> }
                    />
                }
                .into_any()
            }
        />
    }
}

/// Spinner while the stored session is verified, then login or the main layout.
#[component]
pub fn AppShell() -> impl IntoView {
    let auth = use_auth();
    let loading = move || auth.state.with(|s| s.loading);
    let signed_in = move || auth.state.with(|s| s.is_authenticated() && s.user.is_some());

    view! {
        <Show
            when=move || !loading()
            fallback=|| view! { <div class="app-loading"><div class="spinner"></div></div> }
        >
            <Show when=signed_in fallback=|| view! { <LoginPage /> }>
                <MainLayout />
            </Show>
        </Show>
    }
}
