use crate::shared::icons::icon;
use contracts::shared::pagination::{PageRequest, PaginatedResponse};
use leptos::prelude::*;

pub const PAGE_SIZE_OPTIONS: [u32; 4] = [10, 20, 50, 100];

/// Position of a paged list, kept in each list's state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageInfo {
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub total_count: u32,
}

impl Default for PageInfo {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: PAGE_SIZE_OPTIONS[0],
            total_pages: 0,
            total_count: 0,
        }
    }
}

impl PageInfo {
    pub fn request(&self) -> PageRequest {
        PageRequest::new(self.page, self.page_size)
    }

    pub fn update_from<T>(&mut self, response: &PaginatedResponse<T>) {
        self.page = response.page_number.max(1);
        self.total_pages = response.total_pages;
        self.total_count = response.total_count;
    }

    /// A new page size starts again from the first page.
    pub fn set_page_size(&mut self, page_size: u32) {
        self.page_size = page_size;
        self.page = 1;
    }
}

/// "Page 2 of 5 (43 total)"
pub fn page_label(page: u32, total_pages: u32, total_count: u32) -> String {
    format!(
        "Page {} of {} ({} total)",
        page.max(1),
        total_pages.max(1),
        total_count
    )
}

/// Pager over the backend's 1-based pages.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<u32>,

    #[prop(into)]
    total_pages: Signal<u32>,

    #[prop(into)]
    total_count: Signal<u32>,

    #[prop(into)]
    page_size: Signal<u32>,

    on_page_change: Callback<u32>,

    on_page_size_change: Callback<u32>,
) -> impl IntoView {
    let on_first = move || current_page.get() <= 1;
    let on_last = move || current_page.get() >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=on_first
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=on_first
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || page_label(current_page.get(), total_pages.get(), total_count.get())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=on_last
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let total = total_pages.get();
                    if total > 0 {
                        on_page_change.run(total);
                    }
                }
                disabled=on_last
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    let val = event_target_value(&ev).parse().unwrap_or(PAGE_SIZE_OPTIONS[0]);
                    on_page_size_change.run(val);
                }
                prop:value=move || page_size.get().to_string()
            >
                {PAGE_SIZE_OPTIONS.iter().map(|&size| {
                    view! {
                        <option value=size.to_string() selected=move || page_size.get() == size>
                            {format!("{} / page", size)}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_info_tracks_response() {
        let mut info = PageInfo {
            page: 3,
            ..Default::default()
        };
        let response = PaginatedResponse::<u8> {
            items: vec![],
            page_number: 2,
            total_pages: 4,
            total_count: 37,
            has_previous_page: true,
            has_next_page: true,
        };
        info.update_from(&response);
        assert_eq!((info.page, info.total_pages, info.total_count), (2, 4, 37));

        info.set_page_size(50);
        assert_eq!(info.request(), PageRequest::new(1, 50));
    }

    #[test]
    fn test_page_label() {
        assert_eq!(page_label(2, 5, 43), "Page 2 of 5 (43 total)");
        assert_eq!(page_label(1, 0, 0), "Page 1 of 1 (0 total)");
    }
}
