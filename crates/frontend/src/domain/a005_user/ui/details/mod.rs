use contracts::domain::a005_user::aggregate::User;
use contracts::domain::a006_order::aggregate::{Order, OrderListParams};
use contracts::shared::pagination::PageRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a005_user::api;
use crate::domain::a006_order::api as order_api;
use crate::domain::a006_order::ui::table::OrdersTable;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::ui::badge::FlagBadge;
use crate::shared::date_utils::format_opt_date;
use crate::shared::icons::icon;
use crate::shared::media::image_url;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::system::auth::context::use_auth;

const USER_ORDERS_PAGE_SIZE: u32 = 20;

fn user_orders_params(user_id: i64) -> OrderListParams {
    OrderListParams {
        page: PageRequest::new(1, USER_ORDERS_PAGE_SIZE),
        user_id: Some(user_id),
        ..Default::default()
    }
}

/// Customer profile and the latest bookings they placed
#[component]
#[allow(non_snake_case)]
pub fn UserDetails(id: i64, on_close: Callback<()>) -> impl IntoView {
    let auth = use_auth();
    let user: RwSignal<Option<User>> = RwSignal::new(None);
    let orders: RwSignal<Vec<Order>> = RwSignal::new(Vec::new());
    let (orders_total, set_orders_total) = signal(0u32);
    let (error, set_error) = signal::<Option<String>>(None);

    let load = move || {
        set_error.set(None);
        spawn_local(async move {
            let client = auth.client();
            match auth.check(api::get_user(&client, id).await) {
                Ok(u) => user.set(Some(u)),
                Err(e) => {
                    set_error.set(Some(format!("Failed to load user: {}", e)));
                    return;
                }
            }
            match auth.check(order_api::list_orders(&client, &user_orders_params(id)).await) {
                Ok(page) => {
                    set_orders_total.set(page.total_count);
                    orders.set(page.items);
                }
                Err(e) => set_error.set(Some(format!("Failed to load user orders: {}", e))),
            }
        });
    };

    load();

    view! {
        <PageFrame page_id="a005_user--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || user.with(|u| u.as_ref().map(|u| u.name.clone()).unwrap_or_else(|| format!("User #{}", id)))}
                    </h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| load()>
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                        {icon("x")}
                        " Close"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <ErrorBanner error=error on_retry=Callback::new(move |_| load()) />

                {move || user.get().map(|u| view! {
                    <div class="detail-card">
                        <div class="party">
                            {match u.image_path.clone() {
                                Some(path) => view! {
                                    <img class="party__avatar" src=image_url(Some(&path), true) alt=u.name.clone() />
                                }.into_any(),
                                None => view! {
                                    <div class="party__avatar party__avatar--initial">{u.initial()}</div>
                                }.into_any(),
                            }}
                            <div>
                                <p class="party__name">{u.name.clone()}</p>
                                <p class="party__meta">{format!("Phone: {}", u.phone_number)}</p>
                                <p class="party__meta">{format!("Joined: {}", format_opt_date(u.created_at.as_deref()))}</p>
                                <FlagBadge value=!u.is_blocked on_label="Active" off_label="Blocked" />
                            </div>
                        </div>
                    </div>
                })}

                <div class="detail-card">
                    <h4 class="detail-card__title">
                        {move || format!("Orders ({})", orders_total.get())}
                    </h4>
                    <div class="table-wrapper">
                        <OrdersTable orders=orders hide_customer=true />
                        <Show when=move || orders.with(|o| o.is_empty())>
                            <div class="table__empty">"This user has no orders yet"</div>
                        </Show>
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_orders_params() {
        assert_eq!(
            user_orders_params(7).to_query().build(),
            "PageNumber=1&PageSize=20&UserId=7"
        );
    }
}
