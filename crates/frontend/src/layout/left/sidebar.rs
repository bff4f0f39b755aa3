//! Sidebar with collapsible menu groups. Every item opens (or focuses) a tab.

use crate::layout::global_context::use_app_context;
use crate::layout::tabs::tab_labels::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
}

fn item(key: &'static str, icon: &'static str) -> (&'static str, &'static str, &'static str) {
    (key, tab_label_for_key(key), icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "dashboard",
            label: "Dashboard",
            icon: "dashboard",
            items: vec![
                item("d400_overview", "dashboard"),
                item("a004_provider_map", "map-pin"),
            ],
        },
        MenuGroup {
            id: "catalog",
            label: "Catalog",
            icon: "categories",
            items: vec![
                item("a002_category", "categories"),
                item("a003_subcategory", "subcategories"),
                item("a008_product", "products"),
                item("a009_service", "services"),
            ],
        },
        MenuGroup {
            id: "people",
            label: "People",
            icon: "users",
            items: vec![
                item("a004_provider", "providers"),
                item("a005_user", "users"),
                item("a001_admin", "admins"),
            ],
        },
        MenuGroup {
            id: "operations",
            label: "Operations",
            icon: "orders",
            items: vec![
                item("a006_order", "orders"),
                item("a007_payment", "payments"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let expanded_groups = RwSignal::new(
        get_menu_groups()
            .iter()
            .map(|g| g.id.to_string())
            .collect::<Vec<_>>(),
    );

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                let group_id = group.id.to_string();
                let group_id_for_exp = group_id.clone();
                let group_id_for_show = group_id.clone();
                let items = StoredValue::new(group.items);

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = group_id.clone();
                                expanded_groups.update(move |ids| {
                                    if let Some(pos) = ids.iter().position(|x| x == &gid) {
                                        ids.remove(pos);
                                    } else {
                                        ids.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.with(|ids| ids.contains(&group_id_for_exp))
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.with(|ids| ids.contains(&group_id_for_show))>
                            <div class="app-sidebar__children">
                                {items.get_value().into_iter().map(|(id, label, icon_name)| {
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || ctx.active.with(|a| a.as_deref() == Some(id))
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.open_tab(id, label)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_menu_item_has_a_label() {
        for group in get_menu_groups() {
            for (id, label, _) in group.items {
                assert!(!label.is_empty(), "missing label for {}", id);
            }
        }
    }
}
