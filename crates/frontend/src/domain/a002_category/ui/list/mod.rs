use contracts::domain::a002_category::aggregate::{Category, CategoryListParams};
use contracts::domain::common::css_color;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::form::CategoryFormModal;
use crate::domain::a002_category::api;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::icons::icon;
use crate::shared::list_utils::{any_field_contains, filter_list, SearchInput, Searchable};
use crate::shared::media::image_url;
use crate::shared::modal::ConfirmDialog;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_auth;

impl Searchable for Category {
    fn matches_filter(&self, filter: &str) -> bool {
        any_field_contains(
            &[
                self.name_en.as_deref(),
                self.name_ar.as_deref(),
                self.description_en.as_deref(),
            ],
            filter,
        )
    }
}

fn discount_label(discount: Option<f64>) -> String {
    match discount {
        Some(d) if d > 0.0 => format!("{}%", (d * 1000.0).round() / 10.0),
        _ => "-".to_string(),
    }
}

/// Category editor state: closed, new or editing an existing one
#[derive(Clone, Debug, PartialEq)]
enum Editor {
    Closed,
    New,
    Edit(Category),
}

#[component]
#[allow(non_snake_case)]
pub fn CategoryList() -> impl IntoView {
    let auth = use_auth();
    let all: RwSignal<Vec<Category>> = RwSignal::new(Vec::new());
    let (search, set_search) = signal(String::new());
    let color_filter = RwSignal::new(String::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let editor = RwSignal::new(Editor::Closed);
    let deleting: RwSignal<Option<Category>> = RwSignal::new(None);
    let (busy, set_busy) = signal(false);

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        let color = color_filter.get_untracked();
        let params = CategoryListParams {
            color_code: Some(color.trim().trim_start_matches('#').to_string()),
            ..Default::default()
        };
        spawn_local(async move {
            let client = auth.client();
            match auth.check(api::list_categories(&client, &params).await) {
                Ok(items) => all.set(items),
                Err(e) => set_error.set(Some(format!("Failed to load categories: {}", e))),
            }
            set_loading.set(false);
        });
    };

    load();

    let visible = Memo::new(move |_| all.with(|items| search.with(|f| filter_list(items, f))));

    // Row actions fetch the full record so the form sees every field
    let open_edit = move |id: i64| {
        spawn_local(async move {
            let client = auth.client();
            match auth.check(api::get_category(&client, id).await) {
                Ok(category) => editor.set(Editor::Edit(category)),
                Err(e) => set_error.set(Some(format!("Failed to load category: {}", e))),
            }
        });
    };

    let confirm_delete = move || {
        let Some(category) = deleting.get_untracked() else {
            return;
        };
        set_busy.set(true);
        spawn_local(async move {
            let client = auth.client();
            match auth.check(api::delete_category(&client, category.id).await) {
                Ok(()) => load(),
                Err(e) => set_error.set(Some(format!("Failed to delete category: {}", e))),
            }
            set_busy.set(false);
            deleting.set(None);
        });
    };

    view! {
        <PageFrame page_id="a002_category--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Categories"</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| editor.set(Editor::New)>
                        {icon("plus")}
                        " New Category"
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
                <div class="list-toolbar">
                    <SearchInput
                        on_change=Callback::new(move |value| set_search.set(value))
                        placeholder="Search categories..."
                    />
                    <div class="list-toolbar__field">
                        <Label>"Color:"</Label>
                        <Input value=color_filter placeholder="2196F3" />
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| load()>
                            {icon("search")}
                        </Button>
                    </div>
                </div>

                <ErrorBanner error=error on_retry=Callback::new(move |_| load()) />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=70.0>"Image"</TableHeaderCell>
                                <TableHeaderCell min_width=160.0>"Name (EN)"</TableHeaderCell>
                                <TableHeaderCell min_width=160.0>"Name (AR)"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Color"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Discount"</TableHeaderCell>
                                <TableHeaderCell min_width=140.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visible.get()
                                key=|c| c.id
                                children=move |category| {
                                    let id = category.id;
                                    let color = css_color(category.color_code.as_deref());
                                    let for_delete = category.clone();
                                    let image_src = image_url(category.image.as_deref(), false);
                                    let label = category.label();
                                    let name_en = category.name_en.clone().unwrap_or_default();
                                    let name_ar = category.name_ar.clone().unwrap_or_default();
                                    let discount = discount_label(category.platform_discount);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <img
                                                    class="table__thumb"
                                                    src=image_src
                                                    alt=label
                                                />
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {name_en}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span dir="rtl">{name_ar}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                {color.map(|c| view! {
                                                    <span class="color-swatch" style=format!("background-color: {}", c) title=c.clone()></span>
                                                })}
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{discount}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <div class="table__actions">
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        size=ButtonSize::Small
                                                        on_click=move |_| open_edit(id)
                                                    >
                                                        {icon("edit")}
                                                    </Button>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        size=ButtonSize::Small
                                                        on_click=move |_| deleting.set(Some(for_delete.clone()))
                                                    >
                                                        {icon("delete")}
                                                    </Button>
                                                </div>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || !loading.get() && visible.with(|v| v.is_empty())>
                        <div class="table__empty">"No categories found"</div>
                    </Show>
                </div>
            </div>

            {move || {
                let close = Callback::new(move |_| editor.set(Editor::Closed));
                let saved = Callback::new(move |_| {
                    editor.set(Editor::Closed);
                    load();
                });
                match editor.get() {
                    Editor::Closed => None,
                    Editor::New => Some(view! {
                        <CategoryFormModal category=None on_saved=saved on_close=close />
                    }),
                    Editor::Edit(category) => Some(view! {
                        <CategoryFormModal category=Some(category) on_saved=saved on_close=close />
                    }),
                }
            }}

            {move || deleting.get().map(|category| view! {
                <ConfirmDialog
                    title="Delete Category"
                    message=format!("Delete category \"{}\"? Its subcategories may stop working.", category.label())
                    confirm_label="Delete"
                    busy=busy
                    on_confirm=Callback::new(move |_| confirm_delete())
                    on_cancel=Callback::new(move |_| deleting.set(None))
                />
            })}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_label() {
        assert_eq!(discount_label(Some(0.15)), "15%");
        assert_eq!(discount_label(Some(0.075)), "7.5%");
        assert_eq!(discount_label(Some(0.0)), "-");
        assert_eq!(discount_label(None), "-");
    }

    #[test]
    fn test_search_covers_both_languages() {
        let items = vec![
            Category {
                id: 1,
                name_en: Some("Plumbing".into()),
                name_ar: Some("سباكة".into()),
                ..Default::default()
            },
            Category {
                id: 2,
                name_en: Some("Cleaning".into()),
                ..Default::default()
            },
        ];
        assert_eq!(filter_list(&items, "PLUMB").len(), 1);
        assert_eq!(filter_list(&items, "سباكة")[0].id, 1);
    }
}
