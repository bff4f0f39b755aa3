use crate::shared::date_utils::format_number;
use crate::shared::icons::icon;
use contracts::dashboards::d400_overview::change_label;
use leptos::prelude::*;

/// Arrow and modifier class for a month-over-month change.
fn change_class(percent: f64) -> &'static str {
    if percent > 0.0 {
        "stat-card__change stat-card__change--up"
    } else if percent < 0.0 {
        "stat-card__change stat-card__change--down"
    } else {
        "stat-card__change stat-card__change--flat"
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Total (None while loading)
    #[prop(into)]
    value: Signal<Option<u64>>,
    /// Change % relative to the previous month
    #[prop(into)]
    change_percent: Signal<Option<f64>>,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => format_number(v as f64),
        None => "—".to_string(),
    };

    let change_view = move || {
        change_percent.get().map(|pct| {
            view! { <div class=change_class(pct)>{change_label(pct)}</div> }
        })
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {change_view}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_class() {
        assert!(change_class(4.2).ends_with("--up"));
        assert!(change_class(-0.1).ends_with("--down"));
        assert!(change_class(0.0).ends_with("--flat"));
    }
}
