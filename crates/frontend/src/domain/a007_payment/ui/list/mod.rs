mod state;

use contracts::enums::payment_status::PaymentStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a007_payment::api;
use crate::layout::global_context::use_app_context;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table_checkbox::{TableCheckbox, TableHeaderCheckbox};
use crate::shared::components::ui::badge::PaymentStatusBadge;
use crate::shared::date_utils::{format_iqd, format_opt_date};
use crate::shared::export::{download_bytes, XLSX_MIME};
use crate::shared::icons::icon;
use crate::shared::modal::ConfirmDialog;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_auth;
use state::create_state;

const EXPORT_FILE_NAME: &str = "payments.xlsx";

fn settle_message(count: usize) -> String {
    if count == 1 {
        "Mark the selected payment as paid?".to_string()
    } else {
        format!("Mark {} selected payments as paid?", count)
    }
}

#[component]
#[allow(non_snake_case)]
pub fn PaymentList() -> impl IntoView {
    let auth = use_auth();
    let tabs = use_app_context();
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let is_filter_expanded = RwSignal::new(false);
    let status = RwSignal::new(String::new());
    let confirming = RwSignal::new(false);
    let (busy, set_busy) = signal(false);
    let (exporting, set_exporting) = signal(false);

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        let params = state.with_untracked(|s| s.params());
        spawn_local(async move {
            let client = auth.client();
            match auth.check(api::list_payments(&client, &params).await) {
                Ok(response) => state.update(|s| {
                    s.page.update_from(&response);
                    s.set_items(response.items);
                }),
                Err(e) => set_error.set(Some(format!("Failed to load payments: {}", e))),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load();
        }
    });

    let apply_filters = move || {
        state.update(|s| {
            s.status = status.get_untracked();
            s.page.page = 1;
        });
        load();
    };

    let clear_filters = move || {
        status.set(String::new());
        state.update(|s| {
            s.status.clear();
            s.page.page = 1;
        });
        load();
    };

    let go_to_page = move |page: u32| {
        state.update(|s| s.page.page = page);
        load();
    };

    let change_page_size = move |size: u32| {
        state.update(|s| s.page.set_page_size(size));
        load();
    };

    let settle = move || {
        let ids = state.with_untracked(|s| s.selected.clone());
        if ids.is_empty() {
            confirming.set(false);
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            let client = auth.client();
            match auth.check(api::update_to_paid(&client, &ids).await) {
                Ok(()) => {
                    log::info!("Marked {} payments as paid", ids.len());
                    load();
                }
                Err(e) => set_error.set(Some(format!("Failed to update payments: {}", e))),
            }
            set_busy.set(false);
            confirming.set(false);
        });
    };

    let export = move || {
        set_exporting.set(true);
        spawn_local(async move {
            let client = auth.client();
            let result = auth
                .check(api::export_payments(&client).await)
                .and_then(|bytes| download_bytes(&bytes, EXPORT_FILE_NAME, XLSX_MIME));
            if let Err(e) = result {
                set_error.set(Some(format!("Failed to export payments: {}", e)));
            }
            set_exporting.set(false);
        });
    };

    let selected_count = move || state.with(|s| s.selected.len());

    view! {
        <PageFrame page_id="a007_payment--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Payments"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| confirming.set(true)
                        disabled=Signal::derive(move || selected_count() == 0)
                    >
                        {icon("check")}
                        {move || format!(" Mark as Paid ({})", selected_count())}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| export()
                        disabled=Signal::derive(move || exporting.get())
                    >
                        {icon("download")}
                        {move || if exporting.get() { " Exporting..." } else { " Export" }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <FilterPanel
                    is_expanded=is_filter_expanded
                    active_filters_count=Signal::derive(move || state.with(|s| s.active_filters_count()))
                    pagination_controls=move || view! {
                        <PaginationControls
                            current_page=Signal::derive(move || state.with(|s| s.page.page))
                            total_pages=Signal::derive(move || state.with(|s| s.page.total_pages))
                            total_count=Signal::derive(move || state.with(|s| s.page.total_count))
                            page_size=Signal::derive(move || state.with(|s| s.page.page_size))
                            on_page_change=Callback::new(go_to_page)
                            on_page_size_change=Callback::new(change_page_size)
                        />
                    }
                    filter_content=move || view! {
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Status:"</Label>
                                <Select value=status>
                                    <option value="">"Any"</option>
                                    {PaymentStatus::all().into_iter().map(|s| {
                                        let code = s.code().to_string();
                                        let value = code.clone();
                                        view! { <option value=value>{code}</option> }
                                    }).collect_view()}
                                </Select>
                            </Flex>
                            <Button appearance=ButtonAppearance::Primary on_click=move |_| apply_filters()>
                                "Apply"
                            </Button>
                            <Button appearance=ButtonAppearance::Subtle on_click=move |_| clear_filters()>
                                "Clear"
                            </Button>
                        </Flex>
                    }
                />

                <ErrorBanner error=error on_retry=Callback::new(move |_| load()) />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCheckbox
                                    checked=Signal::derive(move || state.with(|s| s.all_selected()))
                                    disabled=Signal::derive(move || state.with(|s| s.selectable().is_empty()))
                                    on_change=Callback::new(move |checked| state.update(|s| s.select_all(checked)))
                                />
                                <TableHeaderCell min_width=70.0>"#"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Order"</TableHeaderCell>
                                <TableHeaderCell min_width=160.0>"Customer"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Amount"</TableHeaderCell>
                                <TableHeaderCell min_width=80.0>"Method"</TableHeaderCell>
                                <TableHeaderCell min_width=140.0>"Status"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Created"</TableHeaderCell>
                                <TableHeaderCell min_width=80.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || state.with(|s| s.items.clone())
                                key=|p| (p.id, p.status.clone())
                                children=move |payment| {
                                    let id = payment.id;
                                    let order_id = payment.order_id;
                                    let settleable = payment.status.can_mark_paid();
                                    let customer = payment
                                        .user
                                        .as_ref()
                                        .map(|u| u.name.clone())
                                        .unwrap_or_else(|| format!("User #{}", payment.user_id));
                                    view! {
                                        <TableRow>
                                            <TableCheckbox
                                                checked=Signal::derive(move || state.with(|s| s.is_selected(id)))
                                                disabled=!settleable
                                                on_change=Callback::new(move |checked| state.update(|s| s.toggle(id, checked)))
                                            />
                                            <TableCell>
                                                <TableCellLayout>{id}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
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
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{customer}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_iqd(payment.amount)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{payment.payment_method}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <PaymentStatusBadge status=payment.status.clone() />
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_opt_date(payment.created_at.as_deref())}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    size=ButtonSize::Small
                                                    on_click=move |_| tabs.open_detail("a007_payment", id)
                                                >
                                                    {icon("eye")}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || !loading.get() && state.with(|s| s.is_loaded && s.items.is_empty())>
                        <div class="table__empty">"No payments found"</div>
                    </Show>
                </div>
            </div>

            <Show when=move || confirming.get()>
                <ConfirmDialog
                    title="Mark as Paid"
                    message=settle_message(state.with_untracked(|s| s.selected.len()))
                    confirm_label="Mark as Paid"
                    busy=busy
                    on_confirm=Callback::new(move |_| settle())
                    on_cancel=Callback::new(move |_| confirming.set(false))
                />
            </Show>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settle_message() {
        assert_eq!(settle_message(1), "Mark the selected payment as paid?");
        assert_eq!(settle_message(3), "Mark 3 selected payments as paid?");
    }
}
