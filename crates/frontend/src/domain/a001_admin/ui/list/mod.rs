mod forms;

use contracts::domain::a001_admin::aggregate::{AdminInfo, AdminListParams};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::super::api;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::ui::badge::FlagBadge;
use crate::shared::icons::icon;
use crate::shared::list_utils::{any_field_contains, filter_list, SearchInput, Searchable};
use crate::shared::modal::ConfirmDialog;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_auth;
use crate::system::auth::guard::RequireSuperAdmin;
use forms::{CreateAdminForm, PasswordForm};

impl Searchable for AdminInfo {
    fn matches_filter(&self, filter: &str) -> bool {
        any_field_contains(
            &[self.name.as_deref(), self.phone_number.as_deref()],
            filter,
        )
    }
}

/// Role select value -> backend filter. "all" sends no filter.
fn role_filter(value: &str) -> AdminListParams {
    AdminListParams {
        is_super_admin: match value {
            "super" => Some(true),
            "regular" => Some(false),
            _ => None,
        },
    }
}

/// Pending confirmation on a single admin
#[derive(Clone, Debug, PartialEq)]
enum AdminAction {
    ToggleRole(AdminInfo),
    Delete(AdminInfo),
}

impl AdminAction {
    fn admin(&self) -> &AdminInfo {
        match self {
            AdminAction::ToggleRole(admin) | AdminAction::Delete(admin) => admin,
        }
    }

    fn title(&self) -> &'static str {
        match self {
            AdminAction::ToggleRole(_) => "Change Role",
            AdminAction::Delete(_) => "Delete Admin",
        }
    }

    fn message(&self) -> String {
        match self {
            AdminAction::ToggleRole(admin) if admin.is_super_admin => format!(
                "Remove super admin rights from {}?",
                admin.display_name()
            ),
            AdminAction::ToggleRole(admin) => {
                format!("Make {} a super admin?", admin.display_name())
            }
            AdminAction::Delete(admin) => format!(
                "Delete {}? This cannot be undone.",
                admin.display_name()
            ),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn AdminList() -> impl IntoView {
    let auth = use_auth();
    let all_admins: RwSignal<Vec<AdminInfo>> = RwSignal::new(Vec::new());
    let (search, set_search) = signal(String::new());
    let role = RwSignal::new("all".to_string());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (show_create, set_show_create) = signal(false);
    let password_target: RwSignal<Option<AdminInfo>> = RwSignal::new(None);
    let pending: RwSignal<Option<AdminAction>> = RwSignal::new(None);
    let (busy, set_busy) = signal(false);

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        let params = role_filter(&role.get_untracked());
        spawn_local(async move {
            let client = auth.client();
            match auth.check(api::list_admins(&client, &params).await) {
                Ok(admins) => all_admins.set(admins),
                Err(e) => set_error.set(Some(format!("Failed to load admins: {}", e))),
            }
            set_loading.set(false);
        });
    };

    // Reload whenever the role filter changes
    Effect::new(move |_| {
        role.track();
        load();
    });

    let visible = Memo::new(move |_| {
        all_admins.with(|admins| search.with(|filter| filter_list(admins, filter)))
    });

    let run_pending = move || {
        let Some(action) = pending.get_untracked() else {
            return;
        };
        set_busy.set(true);
        spawn_local(async move {
            let client = auth.client();
            let result = match &action {
                AdminAction::ToggleRole(admin) => {
                    api::update_admin_role(&client, admin.id, !admin.is_super_admin).await
                }
                AdminAction::Delete(admin) => api::delete_admin(&client, admin.id).await,
            };
            match auth.check(result) {
                Ok(()) => {
                    log::info!("{} done for admin {}", action.title(), action.admin().id);
                    load();
                }
                Err(e) => set_error.set(Some(format!("{} failed: {}", action.title(), e))),
            }
            set_busy.set(false);
            pending.set(None);
        });
    };

    view! {
        <PageFrame page_id="a001_admin--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Admins"</h1>
                </div>
                <div class="page__header-right">
                    <RequireSuperAdmin>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| set_show_create.set(true)
                        >
                            {icon("plus")}
                            " New Admin"
                        </Button>
                    </RequireSuperAdmin>
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
                <div class="list-toolbar">
                    <SearchInput
                        on_change=Callback::new(move |value| set_search.set(value))
                        placeholder="Search by name or phone..."
                    />
                    <div class="list-toolbar__field">
                        <Label>"Role:"</Label>
                        <Select value=role>
                            <option value="all">"All"</option>
                            <option value="super">"Super admins"</option>
                            <option value="regular">"Admins"</option>
                        </Select>
                    </div>
                </div>

                <ErrorBanner error=error on_retry=Callback::new(move |_| load()) />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=60.0>"ID"</TableHeaderCell>
                                <TableHeaderCell min_width=180.0>"Name"</TableHeaderCell>
                                <TableHeaderCell min_width=140.0>"Phone"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Role"</TableHeaderCell>
                                <TableHeaderCell min_width=220.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visible.get()
                                key=|admin| (admin.id, admin.is_super_admin)
                                children=move |admin| {
                                    let for_role = admin.clone();
                                    let for_password = admin.clone();
                                    let for_delete = admin.clone();
                                    let admin_id = admin.id;
                                    let display_name = admin.display_name();
                                    let phone = admin.phone_number.clone().unwrap_or_else(|| "N/A".to_string());
                                    let is_super_admin = admin.is_super_admin;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{admin_id}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {display_name}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {phone}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <FlagBadge
                                                        value=is_super_admin
                                                        on_label="Super Admin"
                                                        off_label="Admin"
                                                        off_tone="badge--neutral"
                                                    />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <RequireSuperAdmin>
                                                    <div class="table__actions">
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            size=ButtonSize::Small
                                                            on_click={
                                                                let admin = for_role.clone();
                                                                move |_| pending.set(Some(AdminAction::ToggleRole(admin.clone())))
                                                            }
                                                        >
                                                            {icon("admins")}
                                                            " Role"
                                                        </Button>
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            size=ButtonSize::Small
                                                            on_click={
                                                                let admin = for_password.clone();
                                                                move |_| password_target.set(Some(admin.clone()))
                                                            }
                                                        >
                                                            {icon("key")}
                                                            " Password"
                                                        </Button>
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            size=ButtonSize::Small
                                                            on_click={
                                                                let admin = for_delete.clone();
                                                                move |_| pending.set(Some(AdminAction::Delete(admin.clone())))
                                                            }
                                                        >
                                                            {icon("delete")}
                                                        </Button>
                                                    </div>
                                                </RequireSuperAdmin>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || !loading.get() && visible.with(|v| v.is_empty())>
                        <div class="table__empty">"No admins found"</div>
                    </Show>
                </div>
            </div>

            <Show when=move || show_create.get()>
                <CreateAdminForm
                    on_created=Callback::new(move |_| {
                        set_show_create.set(false);
                        load();
                    })
                    on_close=Callback::new(move |_| set_show_create.set(false))
                />
            </Show>

            {move || password_target.get().map(|admin| view! {
                <PasswordForm
                    admin=admin
                    on_close=Callback::new(move |_| password_target.set(None))
                />
            })}

            {move || pending.get().map(|action| view! {
                <ConfirmDialog
                    title=action.title()
                    message=action.message()
                    busy=busy
                    on_confirm=Callback::new(move |_| run_pending())
                    on_cancel=Callback::new(move |_| pending.set(None))
                />
            })}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin(name: &str, phone: &str, is_super_admin: bool) -> AdminInfo {
        AdminInfo {
            id: 7,
            name: Some(name.to_string()),
            phone_number: Some(phone.to_string()),
            is_super_admin,
        }
    }

    #[test]
    fn test_role_filter() {
        assert_eq!(role_filter("all").is_super_admin, None);
        assert_eq!(role_filter("super").is_super_admin, Some(true));
        assert_eq!(role_filter("regular").is_super_admin, Some(false));
    }

    #[test]
    fn test_search_matches_name_and_phone() {
        let admins = vec![admin("Zainab", "07701111111", false), admin("Omar", "07802222222", true)];
        assert_eq!(filter_list(&admins, "zain").len(), 1);
        assert_eq!(filter_list(&admins, "0780").len(), 1);
        assert_eq!(filter_list(&admins, "  ").len(), 2);
    }

    #[test]
    fn test_action_messages() {
        let demote = AdminAction::ToggleRole(admin("Omar", "0780", true));
        assert_eq!(demote.message(), "Remove super admin rights from Omar?");
        let promote = AdminAction::ToggleRole(admin("Zainab", "0770", false));
        assert_eq!(promote.message(), "Make Zainab a super admin?");
        assert_eq!(AdminAction::Delete(admin("Omar", "0780", true)).title(), "Delete Admin");
    }
}
