use contracts::domain::a007_payment::aggregate::PaymentDetails as Details;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a007_payment::api;
use crate::layout::global_context::use_app_context;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::ui::badge::PaymentStatusBadge;
use crate::shared::date_utils::{format_datetime, format_iqd, format_opt_date};
use crate::shared::icons::icon;
use crate::shared::modal::ConfirmDialog;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::system::auth::context::use_auth;

/// Payment summary with its gateway status history
#[component]
#[allow(non_snake_case)]
pub fn PaymentDetails(id: i64, on_close: Callback<()>) -> impl IntoView {
    let auth = use_auth();
    let tabs = use_app_context();
    let data: RwSignal<Option<Details>> = RwSignal::new(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let confirming = RwSignal::new(false);
    let (busy, set_busy) = signal(false);

    let load = move || {
        set_error.set(None);
        spawn_local(async move {
            let client = auth.client();
            match auth.check(api::get_payment(&client, id).await) {
                Ok(details) => data.set(Some(details)),
                Err(e) => set_error.set(Some(format!("Failed to load payment details: {}", e))),
            }
        });
    };

    load();

    let mark_paid = move || {
        set_busy.set(true);
        spawn_local(async move {
            let client = auth.client();
            match auth.check(api::update_to_paid(&client, &[id]).await) {
                Ok(()) => load(),
                Err(e) => set_error.set(Some(format!("Failed to mark payment as paid: {}", e))),
            }
            set_busy.set(false);
            confirming.set(false);
        });
    };

    let can_mark_paid =
        move || data.with(|d| d.as_ref().is_some_and(|d| d.payment.status.can_mark_paid()));

    view! {
        <PageFrame page_id="a007_payment--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{format!("Payment #{}", id)}</h1>
                    {move || data.with(|d| d.as_ref().map(|d| d.payment.status.clone())).map(|status| view! {
                        <PaymentStatusBadge status=status />
                    })}
                </div>
                <div class="page__header-right">
                    <Show when=can_mark_paid>
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| confirming.set(true)>
                            {icon("check")}
                            " Mark as Paid"
                        </Button>
                    </Show>
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
                    Some(Details { payment, logs }) => {
                        let order_id = payment.order_id;
                        view! {
                            <div class="detail-grid">
                                <div class="detail-card">
                                    <h4 class="detail-card__title">"Payment"</h4>
                                    <dl class="detail-list">
                                        <dt>"Amount"</dt>
                                        <dd class="detail-list__strong">{format_iqd(payment.amount)}</dd>
                                        <dt>"Order"</dt>
                                        <dd>
                                            <a
                                                href="#"
                                                class="table__link"
                                                on:click=move |ev| {
                                                    ev.prevent_default();
                                                    tabs.open_detail("a006_order", order_id);
                                                }
                                            >
                                                {format!("#{}", order_id)}
                                            </a>
                                        </dd>
                                        <dt>"Created"</dt>
                                        <dd>{format_opt_date(payment.created_at.as_deref())}</dd>
                                        <dt>"Updated"</dt>
                                        <dd>{format_opt_date(payment.updated_at.as_deref())}</dd>
                                    </dl>
                                </div>

                                <div class="detail-card">
                                    <h4 class="detail-card__title">"Status History"</h4>
                                    {if logs.is_empty() {
                                        view! { <p class="party__meta">"No status changes recorded"</p> }.into_any()
                                    } else {
                                        logs.into_iter().map(|log| view! {
                                            <div class="status-log">
                                                <PaymentStatusBadge status=log.status />
                                                <span class="party__meta">
                                                    {log.created_at.as_deref().map(format_datetime).unwrap_or_default()}
                                                </span>
                                            </div>
                                        }).collect_view().into_any()
                                    }}
                                </div>
                            </div>
                        }.into_any()
                    }
                }}
            </div>

            <Show when=move || confirming.get()>
                <ConfirmDialog
                    title="Mark as Paid"
                    message=format!("Mark payment #{} as paid?", id)
                    confirm_label="Mark as Paid"
                    busy=busy
                    on_confirm=Callback::new(move |_| mark_paid())
                    on_cancel=Callback::new(move |_| confirming.set(false))
                />
            </Show>
        </PageFrame>
    }
}
