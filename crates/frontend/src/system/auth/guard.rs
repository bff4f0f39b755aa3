use leptos::prelude::*;

use super::context::use_auth;

/// Renders children only for super admins
#[component]
pub fn RequireSuperAdmin(
    /// Shown instead of the children; nothing by default
    #[prop(optional, into)]
    fallback: Option<ViewFn>,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = use_auth();
    let fallback = fallback.unwrap_or_else(|| ViewFn::from(|| ()));

    view! {
        <Show when=move || auth.is_super_admin() fallback=fallback>
            {children()}
        </Show>
    }
}
