use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use super::tabs::{detail_key, title_for_key};

/// Open tabs and panel visibility, shared by the whole signed-in layout.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Restores the active tab from `?active=` and keeps the URL in sync.
    pub fn init_router_integration(&self, default_key: &str) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        let initial = params
            .get("active")
            .cloned()
            .unwrap_or_else(|| default_key.to_string());
        self.open_tab(&initial, &title_for_key(&initial));

        let this = *self;
        Effect::new(move |_| {
            if let Some(active_key) = this.active.get() {
                let query_string =
                    serde_qs::to_string(&HashMap::from([("active".to_string(), active_key)]))
                        .unwrap_or_default();
                let new_url = format!("?{}", query_string);

                let current_search = window()
                    .and_then(|w| w.location().search().ok())
                    .unwrap_or_default();

                if current_search != new_url {
                    if let Some(w) = window() {
                        if let Ok(history) = w.history() {
                            let _ = history.replace_state_with_url(
                                &wasm_bindgen::JsValue::NULL,
                                "",
                                Some(&new_url),
                            );
                        }
                    }
                }
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        log::debug!("open_tab: key='{}', title='{}'", key, title);
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            let tab = Tab {
                key: key.to_string(),
                title: title.to_string(),
            };
            self.opened.update(|tabs| tabs.push(tab));
        }
        self.activate_tab(key);
    }

    /// Opens (or focuses) the detail tab of one record.
    pub fn open_detail(&self, aggregate_key: &str, id: i64) {
        let key = detail_key(aggregate_key, id);
        self.open_tab(&key, &title_for_key(&key));
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    /// Closes a tab; closing the active one activates the last remaining tab.
    pub fn close_tab(&self, key: &str) {
        log::debug!("close_tab: key='{}'", key);
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_and_close_tabs() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppGlobalContext::new();
            ctx.open_tab("a006_order", "Orders");
            ctx.open_tab("a007_payment", "Payments");
            ctx.open_tab("a006_order", "Orders");

            assert_eq!(ctx.opened.get_untracked().len(), 2);
            assert_eq!(ctx.active.get_untracked().as_deref(), Some("a006_order"));

            ctx.close_tab("a006_order");
            assert_eq!(ctx.active.get_untracked().as_deref(), Some("a007_payment"));

            ctx.close_tab("a007_payment");
            assert_eq!(ctx.active.get_untracked(), None);

            ctx.open_detail("a006_order", 42);
            let tabs = ctx.opened.get_untracked();
            assert_eq!(tabs[0].key, "a006_order_detail_42");
            assert_eq!(tabs[0].title, "Order #42");
        });
    }
}
