use contracts::dashboards::d400_overview::{DashboardData, MONTH_LABELS};
use contracts::domain::a006_order::aggregate::Order;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::dashboards::d400_overview::api;
use crate::domain::a004_provider::ui::map::ProvidersMap;
use crate::domain::a006_order::api as order_api;
use crate::domain::a006_order::ui::table::OrdersTable;
use crate::layout::global_context::use_app_context;
use crate::layout::tabs::tab_labels::title_for_key;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::context::use_auth;

/// Bar heights in percent of the busiest month.
fn bar_heights(months: &[u32; 12]) -> [u32; 12] {
    let max = months.iter().copied().max().unwrap_or(0);
    let mut heights = [0u32; 12];
    if max == 0 {
        return heights;
    }
    for (height, value) in heights.iter_mut().zip(months) {
        *height = value * 100 / max;
    }
    heights
}

#[component]
fn MonthlyOrdersChart(#[prop(into)] data: Signal<Option<DashboardData>>) -> impl IntoView {
    let months = move || data.with(|d| d.as_ref().map(|d| d.orders_per_month()).unwrap_or([0; 12]));

    view! {
        <div class="detail-card">
            <h4 class="detail-card__title">"Orders per Month"</h4>
            <div class="bar-chart">
                {move || {
                    let counts = months();
                    let heights = bar_heights(&counts);
                    MONTH_LABELS
                        .iter()
                        .enumerate()
                        .map(|(i, label)| view! {
                            <div class="bar-chart__column" title=format!("{}: {}", label, counts[i])>
                                <div class="bar-chart__bar" style=format!("height: {}%", heights[i])></div>
                                <span class="bar-chart__label">{*label}</span>
                            </div>
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

/// Landing page: totals, monthly orders, latest bookings and the provider map
#[component]
#[allow(non_snake_case)]
pub fn OverviewDashboard() -> impl IntoView {
    let auth = use_auth();
    let tabs = use_app_context();
    let data: RwSignal<Option<DashboardData>> = RwSignal::new(None);
    let recent: RwSignal<Vec<Order>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (recent_error, set_recent_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let load_stats = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let client = auth.client();
            match auth.check(api::get_dashboard(&client).await) {
                Ok(d) => data.set(Some(d)),
                Err(e) => set_error.set(Some(format!("Failed to load dashboard data: {}", e))),
            }
            set_loading.set(false);
        });
    };

    let load_recent = move || {
        set_recent_error.set(None);
        spawn_local(async move {
            let client = auth.client();
            match auth.check(order_api::recent_orders(&client).await) {
                Ok(page) => recent.set(page.items),
                Err(e) => set_recent_error.set(Some(format!("Failed to load recent bookings: {}", e))),
            }
        });
    };

    load_stats();
    load_recent();

    let stat = move |f: fn(&DashboardData) -> u64| Signal::derive(move || data.with(|d| d.as_ref().map(f)));
    let change = move |f: fn(&DashboardData) -> f64| Signal::derive(move || data.with(|d| d.as_ref().map(f)));

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Overview"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=Signal::derive(move || loading.get())
                        on_click=move |_| {
                            load_stats();
                            load_recent();
                        }
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <ErrorBanner error=error on_retry=Callback::new(move |_| load_stats()) />

                <div class="stat-grid">
                    <StatCard
                        label="Total Users"
                        icon_name="users"
                        value=stat(|d| d.total_users)
                        change_percent=change(|d| d.users_percentage_change)
                    />
                    <StatCard
                        label="Total Providers"
                        icon_name="providers"
                        value=stat(|d| d.total_providers)
                        change_percent=change(|d| d.providers_percentage_change)
                    />
                    <StatCard
                        label="Total Orders"
                        icon_name="orders"
                        value=stat(|d| d.total_orders)
                        change_percent=change(|d| d.orders_percentage_change)
                    />
                    <StatCard
                        label="Total Services"
                        icon_name="services"
                        value=stat(|d| d.total_services)
                        change_percent=change(|d| d.services_percentage_change)
                    />
                </div>

                <MonthlyOrdersChart data=data />

                <div class="detail-card">
                    <div class="detail-card__header">
                        <h4 class="detail-card__title">"Recent Bookings"</h4>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            size=ButtonSize::Small
                            on_click=move |_| tabs.open_tab("a006_order", &title_for_key("a006_order"))
                        >
                            "View all"
                        </Button>
                    </div>
                    <ErrorBanner error=recent_error on_retry=Callback::new(move |_| load_recent()) />
                    <div class="table-wrapper">
                        <OrdersTable orders=recent />
                        <Show when=move || recent.with(|r| r.is_empty()) && recent_error.with(|e| e.is_none())>
                            <div class="table__empty">"No recent bookings"</div>
                        </Show>
                    </div>
                </div>

                <div class="detail-card">
                    <h4 class="detail-card__title">"Provider Locations"</h4>
                    <ProvidersMap />
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_heights() {
        let mut months = [0u32; 12];
        assert_eq!(bar_heights(&months), [0; 12]);
        months[0] = 5;
        months[6] = 10;
        let heights = bar_heights(&months);
        assert_eq!(heights[0], 50);
        assert_eq!(heights[6], 100);
        assert_eq!(heights[1], 0);
    }
}
