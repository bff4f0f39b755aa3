use contracts::domain::a006_order::aggregate::{OrderDetails as Order, OrderDetailsResponse};
use contracts::domain::a004_provider::aggregate::Provider;
use contracts::domain::a005_user::aggregate::User;
use contracts::enums::order_status::OrderStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a006_order::api;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::ui::badge::OrderStatusBadge;
use crate::shared::date_utils::{format_datetime, format_iqd, format_opt_date};
use crate::shared::icons::icon;
use crate::shared::media::image_url;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::system::auth::context::use_auth;

/// Statuses an operator can move a live order to.
fn next_statuses(current: OrderStatus) -> Vec<OrderStatus> {
    if current.is_terminal() {
        return Vec::new();
    }
    OrderStatus::all()
        .into_iter()
        .filter(|s| *s != current)
        .collect()
}

fn line_total(quantity: u32, unit_price: f64) -> String {
    format!("{} x {}", quantity, format_iqd(unit_price))
}

#[component]
fn PartyCard(
    title: &'static str,
    name: String,
    phone: String,
    image: Option<String>,
    id: i64,
) -> impl IntoView {
    view! {
        <div class="detail-card">
            <h4 class="detail-card__title">{title}</h4>
            <div class="party">
                <img class="party__avatar" src=image_url(image.as_deref(), true) alt=name.clone() />
                <div>
                    <p class="party__name">{name}</p>
                    <p class="party__meta">{format!("Phone: {}", phone)}</p>
                    <p class="party__meta">{format!("ID: {}", id)}</p>
                </div>
            </div>
        </div>
    }
}

fn customer_card(user: Option<User>, user_id: i64) -> impl IntoView {
    let user = user.unwrap_or(User {
        id: user_id,
        name: "N/A".to_string(),
        ..Default::default()
    });
    let phone = if user.phone_number.is_empty() {
        "N/A".to_string()
    } else {
        user.phone_number.clone()
    };
    view! {
        <PartyCard title="Customer" name=user.name phone=phone image=user.image_path id=user.id />
    }
}

fn provider_card(provider: Option<Provider>) -> impl IntoView {
    provider.map(|p| {
        view! {
            <PartyCard title="Provider" name=p.name phone=p.phone_number image=p.image_path id=p.id />
        }
    })
}

fn order_items(order: &Order) -> impl IntoView {
    let services = order.services.clone();
    let products = order.products.clone();
    let custom = order.custom_service.clone();
    view! {
        <div class="detail-card">
            <h4 class="detail-card__title">"Order Items"</h4>
            {(!services.is_empty()).then(|| view! {
                <h5>"Services"</h5>
                {services.into_iter().map(|line| view! {
                    <div class="order-line">
                        <img class="order-line__image" src=image_url(line.service.first_image(), false) alt="" />
                        <div class="order-line__body">
                            <span class="order-line__name">{line.service.name.clone()}</span>
                            <span class="order-line__desc">{line.service.description.clone().unwrap_or_default()}</span>
                        </div>
                        <span class="order-line__price">{line_total(line.quantity, line.service.price)}</span>
                    </div>
                }).collect_view()}
            })}
            {(!products.is_empty()).then(|| view! {
                <h5>"Products"</h5>
                {products.into_iter().map(|line| view! {
                    <div class="order-line">
                        <img class="order-line__image" src=image_url(line.product.first_image(), false) alt="" />
                        <div class="order-line__body">
                            <span class="order-line__name">{line.product.name.clone()}</span>
                            <span class="order-line__desc">{line.product.description.clone().unwrap_or_default()}</span>
                        </div>
                        <span class="order-line__price">{line_total(line.quantity, line.product.price)}</span>
                    </div>
                }).collect_view()}
            })}
            {custom.map(|c| view! {
                <h5>"Custom Service"</h5>
                <div class="order-line">
                    <div class="order-line__body">
                        <span class="order-line__name">{c.name}</span>
                        <span class="order-line__desc">{c.description}</span>
                    </div>
                    <span class="order-line__price">{format!("Quantity: {}", c.quantity)}</span>
                </div>
            })}
        </div>
    }
}

/// Full order: parties, items, totals, rating, status history and status change
#[component]
#[allow(non_snake_case)]
pub fn OrderDetails(id: i64, on_close: Callback<()>) -> impl IntoView {
    let auth = use_auth();
    let data: RwSignal<Option<OrderDetailsResponse>> = RwSignal::new(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let new_status = RwSignal::new(String::new());
    let (saving, set_saving) = signal(false);

    let load = move || {
        set_error.set(None);
        spawn_local(async move {
            let client = auth.client();
            match auth.check(api::get_order(&client, id).await) {
                Ok(details) => data.set(Some(details)),
                Err(e) => set_error.set(Some(format!("Failed to load order details: {}", e))),
            }
        });
    };

    load();

    let update_status = move || {
        let Ok(code) = new_status.get_untracked().parse::<i32>() else {
            return;
        };
        let status = OrderStatus::from_code(code);
        set_saving.set(true);
        spawn_local(async move {
            let client = auth.client();
            match auth.check(api::update_order_status(&client, id, status).await) {
                Ok(()) => {
                    log::info!("Order {} moved to {}", id, status.display_name());
                    new_status.set(String::new());
                    load();
                }
                Err(e) => set_error.set(Some(format!("Failed to update order status: {}", e))),
            }
            set_saving.set(false);
        });
    };

    view! {
        <PageFrame page_id="a006_order--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{format!("Order #{}", id)}</h1>
                    {move || data.with(|d| d.as_ref().map(|d| d.order.order_status)).map(|status| view! {
                        <OrderStatusBadge status=status />
                    })}
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

                {move || match data.get() {
                    None => view! { <div class="page__loading"><Spinner /></div> }.into_any(),
                    Some(OrderDetailsResponse { order, rating, status_logs }) => {
                        let choices = next_statuses(order.order_status);
                        view! {
                            <div class="detail-grid">
                                <div class="detail-card">
                                    <h4 class="detail-card__title">"Summary"</h4>
                                    <dl class="detail-list">
                                        <dt>"Created"</dt>
                                        <dd>{format_opt_date(order.created_at.as_deref())}</dd>
                                        <dt>"Updated"</dt>
                                        <dd>{format_opt_date(order.updated_at.as_deref())}</dd>
                                        <dt>"Total"</dt>
                                        <dd>{format_iqd(order.total)}</dd>
                                        <dt>"Final total"</dt>
                                        <dd class="detail-list__strong">{format_iqd(order.final_total)}</dd>
                                        <dt>"Payment type"</dt>
                                        <dd>{order.payment_type}</dd>
                                    </dl>
                                </div>

                                {(!choices.is_empty()).then(|| view! {
                                    <div class="detail-card">
                                        <h4 class="detail-card__title">"Change Status"</h4>
                                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                                            <Select value=new_status>
                                                <option value="">"Select status"</option>
                                                {choices.into_iter().map(|s| view! {
                                                    <option value=s.code().to_string()>{s.display_name()}</option>
                                                }).collect_view()}
                                            </Select>
                                            <Button
                                                appearance=ButtonAppearance::Primary
                                                disabled=Signal::derive(move || saving.get() || new_status.get().is_empty())
                                                on_click=move |_| update_status()
                                            >
                                                {move || if saving.get() { "Updating..." } else { "Update Status" }}
                                            </Button>
                                        </Flex>
                                    </div>
                                })}

                                {customer_card(order.user.clone(), order.user_id)}
                                {provider_card(order.provider.clone())}

                                {order.address.clone().map(|address| view! {
                                    <div class="detail-card">
                                        <h4 class="detail-card__title">"Location"</h4>
                                        <p>{address}</p>
                                        {order.latitude.zip(order.longitude).map(|(lat, lng)| view! {
                                            <p class="party__meta">{format!("Coordinates: {}, {}", lat, lng)}</p>
                                        })}
                                    </div>
                                })}
                            </div>

                            {order_items(&order)}

                            {order.notes.clone().filter(|n| !n.is_empty()).map(|notes| view! {
                                <div class="detail-card">
                                    <h4 class="detail-card__title">"Notes"</h4>
                                    <p>{notes}</p>
                                </div>
                            })}

                            {rating.map(|r| view! {
                                <div class="detail-card">
                                    <h4 class="detail-card__title">"Rating"</h4>
                                    <p>
                                        <span class="rating__value">{format!("{}/5", r.rating)}</span>
                                        " "
                                        <span class="rating__stars">{r.stars()}</span>
                                    </p>
                                    {r.comment.clone().map(|c| view! { <p class="party__meta">{c}</p> })}
                                    {r.created_at.clone().map(|at| view! {
                                        <p class="party__meta">{format!("Submitted on {}", format_datetime(&at))}</p>
                                    })}
                                </div>
                            })}

                            {(!status_logs.is_empty()).then(|| view! {
                                <div class="detail-card">
                                    <h4 class="detail-card__title">"Status History"</h4>
                                    {status_logs.into_iter().map(|log| view! {
                                        <div class="status-log">
                                            <OrderStatusBadge status=log.status />
                                            <span class="party__meta">
                                                {log.created_at.as_deref().map(format_datetime).unwrap_or_default()}
                                            </span>
                                        </div>
                                    }).collect_view()}
                                </div>
                            })}
                        }.into_any()
                    }
                }}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_statuses() {
        let from_pending = next_statuses(OrderStatus::Pending);
        assert_eq!(from_pending.len(), 6);
        assert!(!from_pending.contains(&OrderStatus::Pending));
        assert!(next_statuses(OrderStatus::Completed).is_empty());
        assert!(next_statuses(OrderStatus::Refunded).is_empty());
    }

    #[test]
    fn test_line_total() {
        assert_eq!(line_total(2, 15000.0), "2 x 15,000 IQD");
    }
}
