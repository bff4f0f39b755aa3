use contracts::domain::a002_category::aggregate::{Category, CategoryListParams};
use contracts::domain::a003_subcategory::aggregate::{SubCategory, SubCategoryListParams};
use contracts::domain::common::css_color;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::form::SubCategoryFormModal;
use crate::domain::a002_category::api as category_api;
use crate::domain::a003_subcategory::api;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::icons::icon;
use crate::shared::list_utils::{any_field_contains, filter_list, SearchInput, Searchable};
use crate::shared::media::image_url;
use crate::shared::modal::ConfirmDialog;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_auth;

impl Searchable for SubCategory {
    fn matches_filter(&self, filter: &str) -> bool {
        let parent = self.parent_label();
        any_field_contains(
            &[
                self.name_en.as_deref(),
                self.name_ar.as_deref(),
                Some(parent.as_str()),
            ],
            filter,
        )
    }
}

fn list_params(category_filter: &str) -> SubCategoryListParams {
    SubCategoryListParams {
        category_id: category_filter.parse().ok(),
        ..Default::default()
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Editor {
    Closed,
    New,
    Edit(SubCategory),
}

#[component]
#[allow(non_snake_case)]
pub fn SubCategoryList() -> impl IntoView {
    let auth = use_auth();
    let all: RwSignal<Vec<SubCategory>> = RwSignal::new(Vec::new());
    let categories: RwSignal<Vec<Category>> = RwSignal::new(Vec::new());
    let category_filter = RwSignal::new(String::new());
    let (search, set_search) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let editor = RwSignal::new(Editor::Closed);
    let deleting: RwSignal<Option<SubCategory>> = RwSignal::new(None);
    let (busy, set_busy) = signal(false);

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        let params = list_params(&category_filter.get_untracked());
        spawn_local(async move {
            let client = auth.client();
            match auth.check(api::list_subcategories(&client, &params).await) {
                Ok(items) => all.set(items),
                Err(e) => set_error.set(Some(format!("Failed to load subcategories: {}", e))),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        category_filter.track();
        load();
    });

    spawn_local(async move {
        let client = auth.client();
        let result = category_api::list_categories(&client, &CategoryListParams::default()).await;
        match auth.check(result) {
            Ok(items) => categories.set(items),
            Err(e) => log::warn!("Category filter unavailable: {}", e),
        }
    });

    let visible = Memo::new(move |_| all.with(|items| search.with(|f| filter_list(items, f))));

    let open_edit = move |id: i64| {
        spawn_local(async move {
            let client = auth.client();
            match auth.check(api::get_subcategory(&client, id).await) {
                Ok(sub) => editor.set(Editor::Edit(sub)),
                Err(e) => set_error.set(Some(format!("Failed to load subcategory: {}", e))),
            }
        });
    };

    let confirm_delete = move || {
        let Some(sub) = deleting.get_untracked() else {
            return;
        };
        set_busy.set(true);
        spawn_local(async move {
            let client = auth.client();
            match auth.check(api::delete_subcategory(&client, sub.id).await) {
                Ok(()) => load(),
                Err(e) => set_error.set(Some(format!("Failed to delete subcategory: {}", e))),
            }
            set_busy.set(false);
            deleting.set(None);
        });
    };

    view! {
        <PageFrame page_id="a003_subcategory--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Subcategories"</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| editor.set(Editor::New)>
                        {icon("plus")}
                        " New Subcategory"
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
                        placeholder="Search subcategories..."
                    />
                    <div class="list-toolbar__field">
                        <Label>"Category:"</Label>
                        <Select value=category_filter>
                            <option value="">"All categories"</option>
                            {move || categories.get().into_iter().map(|c| view! {
                                <option value=c.id.to_string()>{c.label()}</option>
                            }).collect_view()}
                        </Select>
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
                                <TableHeaderCell min_width=160.0>"Category"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Color"</TableHeaderCell>
                                <TableHeaderCell min_width=140.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visible.get()
                                key=|s| s.id
                                children=move |sub| {
                                    let id = sub.id;
                                    let color = css_color(sub.color_code.as_deref());
                                    let for_delete = sub.clone();
                                    let image_src = image_url(sub.image.as_deref(), false);
                                    let label = sub.label();
                                    let name_en = sub.name_en.clone().unwrap_or_default();
                                    let name_ar = sub.name_ar.clone().unwrap_or_default();
                                    let parent_label = sub.parent_label();
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
                                                <TableCellLayout truncate=true>{parent_label}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                {color.map(|c| view! {
                                                    <span class="color-swatch" style=format!("background-color: {}", c)></span>
                                                })}
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
                        <div class="table__empty">"No subcategories found"</div>
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
                        <SubCategoryFormModal subcategory=None on_saved=saved on_close=close />
                    }),
                    Editor::Edit(sub) => Some(view! {
                        <SubCategoryFormModal subcategory=Some(sub) on_saved=saved on_close=close />
                    }),
                }
            }}

            {move || deleting.get().map(|sub| view! {
                <ConfirmDialog
                    title="Delete Subcategory"
                    message=format!("Delete subcategory \"{}\"?", sub.label())
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
    fn test_list_params_from_filter() {
        assert_eq!(list_params("").category_id, None);
        assert_eq!(list_params("5").category_id, Some(5));
        assert_eq!(list_params("5").to_query().build(), "CategoryId=5");
    }

    #[test]
    fn test_search_includes_parent() {
        let items = vec![SubCategory {
            id: 3,
            name_en: Some("Pipes".into()),
            category_name: Some("Plumbing".into()),
            category_id: 1,
            ..Default::default()
        }];
        assert_eq!(filter_list(&items, "plumb").len(), 1);
        assert!(filter_list(&items, "electric").is_empty());
    }
}
