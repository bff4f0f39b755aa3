mod state;

use contracts::domain::a005_user::aggregate::User;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a005_user::api;
use crate::layout::global_context::use_app_context;
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
pub fn UserList() -> impl IntoView {
    let auth = use_auth();
    let tabs = use_app_context();
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let is_filter_expanded = RwSignal::new(false);
    let name = RwSignal::new(String::new());
    let phone_number = RwSignal::new(String::new());
    let blocking: RwSignal<Option<User>> = RwSignal::new(None);
    let (busy, set_busy) = signal(false);

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        let params = state.with_untracked(|s| s.params());
        spawn_local(async move {
            let client = auth.client();
            match auth.check(api::list_users(&client, &params).await) {
                Ok(response) => state.update(|s| {
                    s.page.update_from(&response);
                    s.items = response.items;
                    s.is_loaded = true;
                }),
                Err(e) => set_error.set(Some(format!("Failed to load users: {}", e))),
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

    let confirm_block = move || {
        let Some(user) = blocking.get_untracked() else {
            return;
        };
        set_busy.set(true);
        spawn_local(async move {
            let client = auth.client();
            let target = !user.is_blocked;
            match auth.check(api::set_user_blocked(&client, user.id, target).await) {
                Ok(()) => state.update(|s| s.set_blocked(user.id, target)),
                Err(e) => set_error.set(Some(format!("Failed to update user: {}", e))),
            }
            set_busy.set(false);
            blocking.set(None);
        });
    };

    view! {
        <PageFrame page_id="a005_user--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Users"</h1>
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
                                <Input value=name placeholder="User name" />
                            </Flex>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Phone:"</Label>
                                <Input value=phone_number placeholder="07..." />
                            </Flex>
                            <Button appearance=ButtonAppearance::Primary on_click=move |_| apply_filters()>
                                "Apply"
                            </Button>
                        </Flex>
                    }
                />

                <ErrorBanner error=error on_retry=Callback::new(move |_| load()) />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 800px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=60.0>""</TableHeaderCell>
                                <TableHeaderCell min_width=180.0>"Name"</TableHeaderCell>
                                <TableHeaderCell min_width=130.0>"Phone"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Status"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Joined"</TableHeaderCell>
                                <TableHeaderCell min_width=200.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || state.with(|s| s.items.clone())
                                key=|u| (u.id, u.is_blocked)
                                children=move |user| {
                                    let id = user.id;
                                    let for_block = user.clone();
                                    let is_blocked = user.is_blocked;
                                    let image_src = image_url(user.image_path.as_deref(), true);
                                    let initial = user.initial();
                                    let name = user.name.clone();
                                    let phone = user.phone_number.clone();
                                    let joined = format_opt_date(user.created_at.as_deref());
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <img
                                                    class="table__avatar"
                                                    src=image_src
                                                    alt=initial
                                                />
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{name}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{phone}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <FlagBadge value=!is_blocked on_label="Active" off_label="Blocked" />
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{joined}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <div class="table__actions">
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        size=ButtonSize::Small
                                                        on_click=move |_| tabs.open_detail("a005_user", id)
                                                    >
                                                        {icon("eye")}
                                                        " View"
                                                    </Button>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        size=ButtonSize::Small
                                                        on_click=move |_| blocking.set(Some(for_block.clone()))
                                                    >
                                                        {icon("ban")}
                                                        {if is_blocked { " Unblock" } else { " Block" }}
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
                        <div class="table__empty">"No users found"</div>
                    </Show>
                </div>
            </div>

            {move || blocking.get().map(|user| {
                let verb = if user.is_blocked { "Unblock" } else { "Block" };
                view! {
                    <ConfirmDialog
                        title=format!("{} User", verb)
                        message=format!("{} {}?", verb, user.name)
                        confirm_label=verb
                        busy=busy
                        on_confirm=Callback::new(move |_| confirm_block())
                        on_cancel=Callback::new(move |_| blocking.set(None))
                    />
                }
            })}
        </PageFrame>
    }
}
