mod state;

use contracts::domain::a003_subcategory::aggregate::classification_label;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a009_service::api;
use crate::layout::global_context::use_app_context;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::badge::FlagBadge;
use crate::shared::date_utils::format_iqd;
use crate::shared::icons::icon;
use crate::shared::media::image_url;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_auth;
use state::create_state;

#[component]
#[allow(non_snake_case)]
pub fn ServiceList() -> impl IntoView {
    let auth = use_auth();
    let tabs = use_app_context();
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let is_filter_expanded = RwSignal::new(false);
    let provider_id = RwSignal::new(String::new());
    let category_id = RwSignal::new(String::new());
    let sub_category_id = RwSignal::new(String::new());
    let approved = RwSignal::new(String::new());

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        let params = state.with_untracked(|s| s.params());
        spawn_local(async move {
            let client = auth.client();
            match auth.check(api::list_services(&client, &params).await) {
                Ok(response) => state.update(|s| {
                    s.page.update_from(&response);
                    s.items = response.items;
                    s.is_loaded = true;
                }),
                Err(e) => set_error.set(Some(format!("Failed to load services: {}", e))),
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
            s.provider_id = provider_id.get_untracked();
            s.category_id = category_id.get_untracked();
            s.sub_category_id = sub_category_id.get_untracked();
            s.approved = approved.get_untracked();
            s.page.page = 1;
        });
        load();
    };

    let clear_filters = move || {
        for field in [provider_id, category_id, sub_category_id, approved] {
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
        <PageFrame page_id="a009_service--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Services"</h1>
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
                                <Label>"Provider ID:"</Label>
                                <Input value=provider_id input_type=InputType::Number />
                            </Flex>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Category ID:"</Label>
                                <Input value=category_id input_type=InputType::Number />
                            </Flex>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Subcategory ID:"</Label>
                                <Input value=sub_category_id input_type=InputType::Number />
                            </Flex>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Approval:"</Label>
                                <Select value=approved>
                                    <option value="">"Any"</option>
                                    <option value="true">"Approved"</option>
                                    <option value="false">"Pending"</option>
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
                    <Table attr:style="width: 100%; min-width: 1000px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=70.0>""</TableHeaderCell>
                                <TableHeaderCell min_width=180.0>"Name"</TableHeaderCell>
                                <TableHeaderCell min_width=150.0>"Provider"</TableHeaderCell>
                                <TableHeaderCell min_width=180.0>"Category"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Price"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Final Price"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Commission"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Status"</TableHeaderCell>
                                <TableHeaderCell min_width=70.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || state.with(|s| s.items.clone())
                                key=|p| p.id
                                children=move |service| {
                                    let id = service.id;
                                    let provider = service
                                        .provider
                                        .as_ref()
                                        .map(|p| p.name.clone())
                                        .unwrap_or_else(|| "—".to_string());
                                    let image_src = image_url(service.first_image(), false);
                                    let name = service.name.clone();
                                    let alt = name.clone();
                                    let classification = classification_label(service.category.as_ref(), service.sub_category.as_ref());
                                    let price = format_iqd(service.price);
                                    let final_price = format_iqd(service.final_price());
                                    let commission = format!("{:.1}%", service.commission_percent());
                                    let is_approved = service.is_approved;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <img
                                                    class="table__thumb"
                                                    src=image_src
                                                    alt=alt
                                                />
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{name}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{provider}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{classification}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{price}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{final_price}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{commission}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <FlagBadge
                                                    value=is_approved
                                                    on_label="Approved"
                                                    off_label="Pending"
                                                    off_tone="badge--yellow"
                                                />
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    size=ButtonSize::Small
                                                    on_click=move |_| tabs.open_detail("a009_service", id)
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
                        <div class="table__empty">"No services found"</div>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}
