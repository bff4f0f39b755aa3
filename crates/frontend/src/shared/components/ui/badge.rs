use contracts::enums::order_status::OrderStatus;
use contracts::enums::payment_status::PaymentStatus;
use leptos::prelude::*;

/// Coloured pill; `tone` is one of the `badge--*` modifiers.
#[component]
pub fn Badge(
    tone: &'static str,
    #[prop(into)]
    label: String,
) -> impl IntoView {
    view! {
        <span class=format!("badge {}", tone)>{label}</span>
    }
}

#[component]
pub fn OrderStatusBadge(status: OrderStatus) -> impl IntoView {
    view! { <Badge tone=status.badge_class() label=status.display_name() /> }
}

#[component]
pub fn PaymentStatusBadge(status: PaymentStatus) -> impl IntoView {
    view! { <Badge tone=status.tone().badge_class() label=status.code().to_string() /> }
}

/// Two-state badge (Active/Inactive, Approved/Pending, ...).
#[component]
pub fn FlagBadge(
    value: bool,
    on_label: &'static str,
    off_label: &'static str,
    #[prop(default = "badge--red")]
    off_tone: &'static str,
) -> impl IntoView {
    if value {
        view! { <Badge tone="badge--green" label=on_label /> }
    } else {
        view! { <Badge tone=off_tone label=off_label /> }
    }
}
