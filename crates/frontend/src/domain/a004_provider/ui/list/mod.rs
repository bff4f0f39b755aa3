mod state;

use contracts::domain::a004_provider::aggregate::Provider;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::categories::ProviderCategoriesDialog;
use crate::domain::a004_provider::api;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::badge::FlagBadge;
use crate::shared::date_utils::format_opt_date;
use crate::shared::icons::icon;
use crate::shared::media::image_url;
use crate::shared::modal::ConfirmDialog;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_auth;
use state::create_state;

#[component]
#[allow(non_snake_case)]
pub fn ProviderList() -> impl IntoView {
    let auth = use_auth();
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let is_filter_expanded = RwSignal::new(false);
    let name = RwSignal::new(String::new());
    let phone_number = RwSignal::new(String::new());
    let active = RwSignal::new(String::new());
    let available = RwSignal::new(String::new());
    let toggling: RwSignal<Option<Provider>> = RwSignal::new(None);
    let reviewing: RwSignal<Option<i64>> = RwSignal::new(None);
    let (busy, set_busy) = signal(false);

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        let params = state.with_untracked(|s| s.params());
        spawn_local(async move {
            let client = auth.client();
            match auth.check(api::list_providers(&client, &params).await) {
                Ok(response) => state.update(|s| {
                    s.page.update_from(&response);
                    s.items = response.items;
                    s.is_loaded = true;
                }),
                Err(e) => set_error.set(Some(format!("Failed to load providers: {}", e))),
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
            s.name = name.get_untracked();
            s.phone_number = phone_number.get_untracked();
            s.active = active.get_untracked();
            s.available = available.get_untracked();
            s.page.page = 1;
        });
        load();
    };

    let clear_filters = move || {
        name.set(String::new());
        phone_number.set(String::new());
        active.set(String::new());
        available.set(String::new());
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

    let confirm_toggle = move || {
        let Some(provider) = toggling.get_untracked() else {
            return;
        };
        set_busy.set(true);
        spawn_local(async move {
            let client = auth.client();
            let target = !provider.is_active;
            match auth.check(api::set_provider_active(&client, provider.id, target).await) {
                Ok(()) => state.update(|s| {
                    if let Some(p) = s.items.iter_mut().find(|p| p.id == provider.id) {
                        p.is_active = target;
                    }
                }),
                Err(e) => set_error.set(Some(format!("Failed to update provider: {}", e))),
            }
            set_busy.set(false);
            toggling.set(None);
        });
    };

    view! {
        <PageFrame page_id="a004_provider--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Providers"</h1>
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
                                <Label>"Name:"</Label>
                                <Input value=name placeholder="Provider name" />
                            </Flex>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Phone:"</Label>
                                <Input value=phone_number placeholder="07..." />
                            </Flex>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Active:"</Label>
                                <Select value=active>
                                    <option value="">"Any"</option>
                                    <option value="true">"Active"</option>
                                    <option value="false">"Inactive"</option>
                                </Select>
                            </Flex>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Available:"</Label>
                                <Select value=available>
                                    <option value="">"Any"</option>
                                    <option value="true">"Available"</option>
                                    <option value="false">"Unavailable"</option>
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
                                <TableHeaderCell min_width=60.0>""</TableHeaderCell>
                                <TableHeaderCell min_width=180.0>"Name"</TableHeaderCell>
                                <TableHeaderCell min_width=130.0>"Phone"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Status"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Availability"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Joined"</TableHeaderCell>
                                <TableHeaderCell min_width=220.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || state.with(|s| s.items.clone())
                                key=|p| (p.id, p.is_active)
                                children=move |provider| {
                                    let id = provider.id;
                                    let for_toggle = provider.clone();
                                    let image_src = image_url(provider.image_path.as_deref(), true);
                                    let name = provider.name.clone();
                                    let alt = name.clone();
                                    let phone = provider.phone_number.clone();
                                    let is_active = provider.is_active;
                                    let is_available = provider.is_available;
                                    let joined = format_opt_date(provider.created_at.as_deref());
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <img
                                                    class="table__avatar"
                                                    src=image_src
                                                    alt=alt
                                                />
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{name}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{phone}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <FlagBadge value=is_active on_label="Active" off_label="Inactive" />
                                            </TableCell>
                                            <TableCell>
                                                <FlagBadge
                                                    value=is_available
                                                    on_label="Available"
                                                    off_label="Busy"
                                                    off_tone="badge--neutral"
                                                />
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{joined}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <div class="table__actions">
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        size=ButtonSize::Small
                                                        on_click=move |_| reviewing.set(Some(id))
                                                    >
                                                        {icon("categories")}
                                                        " Categories"
                                                    </Button>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        size=ButtonSize::Small
                                                        on_click=move |_| toggling.set(Some(for_toggle.clone()))
                                                    >
                                                        {if is_active {
                                                            view! { {icon("ban")} " Deactivate" }.into_any()
                                                        } else {
                                                            view! { {icon("check")} " Activate" }.into_any()
                                                        }}
                                                    </Button>
                                                </div>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || !loading.get() && state.with(|s| s.is_loaded && s.items.is_empty())>
                        <div class="table__empty">"No providers found"</div>
                    </Show>
                </div>
            </div>

            {move || toggling.get().map(|provider| {
                let (title, verb) = if provider.is_active {
                    ("Deactivate Provider", "Deactivate")
                } else {
                    ("Activate Provider", "Activate")
                };
                view! {
                    <ConfirmDialog
                        title=title
                        message=format!("{} {}?", verb, provider.name)
                        confirm_label=verb
                        busy=busy
                        on_confirm=Callback::new(move |_| confirm_toggle())
                        on_cancel=Callback::new(move |_| toggling.set(None))
                    />
                }
            })}

            {move || reviewing.get().map(|provider_id| view! {
                <ProviderCategoriesDialog
                    provider_id=provider_id
                    on_close=Callback::new(move |_| reviewing.set(None))
                />
            })}
        </PageFrame>
    }
}
