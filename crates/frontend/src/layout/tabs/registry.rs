//! Tab content registry: the one place that maps a tab key to its view.

use super::tab_labels::parse_detail_key;
use crate::dashboards::d400_overview::ui::OverviewDashboard;
use crate::domain::a001_admin::ui::list::AdminList;
use crate::domain::a002_category::ui::list::CategoryList;
use crate::domain::a003_subcategory::ui::list::SubCategoryList;
use crate::domain::a004_provider::ui::list::ProviderList;
use crate::domain::a004_provider::ui::map::ProvidersMap;
use crate::domain::a005_user::ui::details::UserDetails;
use crate::domain::a005_user::ui::list::UserList;
use crate::domain::a006_order::ui::details::OrderDetails;
use crate::domain::a006_order::ui::list::OrderList;
use crate::domain::a007_payment::ui::details::PaymentDetails;
use crate::domain::a007_payment::ui::list::PaymentList;
use crate::domain::a008_product::ui::details::ProductDetails;
use crate::domain::a008_product::ui::list::ProductList;
use crate::domain::a009_service::ui::details::ServiceDetails;
use crate::domain::a009_service::ui::list::ServiceList;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use leptos::prelude::*;

/// Content of the tab with the given key, or a placeholder for unknown keys.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();
    let on_close = Callback::new(move |_| tabs_store.close_tab(&key_for_close));

    if let Some((aggregate, id)) = parse_detail_key(key) {
        return match aggregate {
            "a005_user" => view! { <UserDetails id=id on_close=on_close /> }.into_any(),
            "a006_order" => view! { <OrderDetails id=id on_close=on_close /> }.into_any(),
            "a007_payment" => view! { <PaymentDetails id=id on_close=on_close /> }.into_any(),
            "a008_product" => view! { <ProductDetails id=id on_close=on_close /> }.into_any(),
            "a009_service" => view! { <ServiceDetails id=id on_close=on_close /> }.into_any(),
            _ => unknown(key),
        };
    }

    match key {
        "d400_overview" => view! { <OverviewDashboard /> }.into_any(),
        "a001_admin" => view! { <AdminList /> }.into_any(),
        "a002_category" => view! { <CategoryList /> }.into_any(),
        "a003_subcategory" => view! { <SubCategoryList /> }.into_any(),
        "a004_provider" => view! { <ProviderList /> }.into_any(),
        "a004_provider_map" => view! {
            <PageFrame page_id="a004_provider_map--dashboard" category=PAGE_CAT_DASHBOARD>
                <div class="page__header">
                    <div class="page__header-left">
                        <h1 class="page__title">"Provider Map"</h1>
                    </div>
                </div>
                <div class="page__content">
                    <ProvidersMap />
                </div>
            </PageFrame>
        }
        .into_any(),
        "a005_user" => view! { <UserList /> }.into_any(),
        "a006_order" => view! { <OrderList /> }.into_any(),
        "a007_payment" => view! { <PaymentList /> }.into_any(),
        "a008_product" => view! { <ProductList /> }.into_any(),
        "a009_service" => view! { <ServiceList /> }.into_any(),
        _ => unknown(key),
    }
}

fn unknown(key: &str) -> AnyView {
    log::warn!("Unknown tab type: {}", key);
    view! { <div class="placeholder">"Page not found"</div> }.into_any()
}
