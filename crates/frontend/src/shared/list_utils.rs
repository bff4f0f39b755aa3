//! Client-side search for lists the backend returns in one piece
//! (admins, categories, subcategories), plus filter value parsing shared
//! by the paged lists.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::shared::icons::icon;

const SEARCH_DEBOUNCE_MS: u32 = 300;

pub trait Searchable {
    /// `filter` is already trimmed and lowercased.
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Case-insensitive substring test over several optional fields.
pub fn any_field_contains(fields: &[Option<&str>], filter: &str) -> bool {
    fields
        .iter()
        .flatten()
        .any(|value| value.to_lowercase().contains(filter))
}

pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    let filter = filter.trim().to_lowercase();
    if filter.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches_filter(&filter))
        .cloned()
        .collect()
}

/// Tri-state select value ("", "true", "false") -> optional flag filter.
pub fn parse_bool_filter(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Trimmed text filter, `None` when blank.
pub fn text_filter(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Positive numeric id typed into a filter box.
pub fn id_filter(value: &str) -> Option<i64> {
    value.trim().parse().ok().filter(|id| *id > 0)
}

/// Text box that reports its value after typing pauses.
#[component]
pub fn SearchInput(
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(String::new());
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        // Replacing the stored timeout drops, and so cancels, the previous one.
        let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || on_change.run(new_value));
        pending.set_value(Some(timeout));
    };

    let clear_filter = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row(&'static str, Option<&'static str>);

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            any_field_contains(&[Some(self.0), self.1], filter)
        }
    }

    #[test]
    fn test_filter_list() {
        let rows = vec![Row("Cleaning", Some("تنظيف")), Row("Plumbing", None)];
        assert_eq!(filter_list(&rows, "  ").len(), 2);
        assert_eq!(filter_list(&rows, "CLEAN"), vec![rows[0].clone()]);
        assert_eq!(filter_list(&rows, "تنظ"), vec![rows[0].clone()]);
        assert!(filter_list(&rows, "roof").is_empty());
    }

    #[test]
    fn test_filter_parsers() {
        assert_eq!(parse_bool_filter("true"), Some(true));
        assert_eq!(parse_bool_filter("false"), Some(false));
        assert_eq!(parse_bool_filter(""), None);
        assert_eq!(text_filter("  Ali "), Some("Ali".to_string()));
        assert_eq!(text_filter("   "), None);
        assert_eq!(id_filter(" 12 "), Some(12));
        assert_eq!(id_filter("0"), None);
        assert_eq!(id_filter("abc"), None);
    }
}
