mod state;

use contracts::enums::order_status::OrderStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::table::OrdersTable;
use crate::domain::a006_order::api;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_auth;
use state::create_state;

#[component]
#[allow(non_snake_case)]
pub fn OrderList() -> impl IntoView {
    let auth = use_auth();
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let is_filter_expanded = RwSignal::new(false);
    let status = RwSignal::new(String::new());
    let from_date = RwSignal::new(String::new());
    let to_date = RwSignal::new(String::new());
    let user_id = RwSignal::new(String::new());
    let provider_id = RwSignal::new(String::new());

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        let params = state.with_untracked(|s| s.params());
        spawn_local(async move {
            let client = auth.client();
            match auth.check(api::list_orders(&client, &params).await) {
                Ok(response) => state.update(|s| {
                    s.page.update_from(&response);
                    s.items = response.items;
                    s.is_loaded = true;
                }),
                Err(e) => set_error.set(Some(format!("Failed to load orders: {}", e))),
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
            s.from_date = from_date.get_untracked();
            s.to_date = to_date.get_untracked();
            s.user_id = user_id.get_untracked();
            s.provider_id = provider_id.get_untracked();
            s.page.page = 1;
        });
        load();
    };

    let clear_filters = move || {
        for field in [status, from_date, to_date, user_id, provider_id] {
            field.set(String::new());
        }
        state.update(|s| s.clear_filters());
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

    view! {
        <PageFrame page_id="a006_order--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Orders"</h1>
                </div>
                <div class="page__header-right">
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
                                    {OrderStatus::all().into_iter().map(|s| view! {
                                        <option value=s.code().to_string()>{s.display_name()}</option>
                                    }).collect_view()}
                                </Select>
                            </Flex>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"From:"</Label>
                                <Input value=from_date input_type=InputType::Date />
                            </Flex>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"To:"</Label>
                                <Input value=to_date input_type=InputType::Date />
                            </Flex>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"User ID:"</Label>
                                <Input value=user_id input_type=InputType::Number />
                            </Flex>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Provider ID:"</Label>
                                <Input value=provider_id input_type=InputType::Number />
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
                    <OrdersTable orders=Signal::derive(move || state.with(|s| s.items.clone())) />
                    <Show when=move || !loading.get() && state.with(|s| s.is_loaded && s.items.is_empty())>
                        <div class="table__empty">"No orders found"</div>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}
