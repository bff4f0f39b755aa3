use contracts::domain::a004_provider::aggregate::{Provider, ProviderListParams};
use leptos::prelude::*;

use crate::shared::components::pagination_controls::PageInfo;
use crate::shared::list_utils::{parse_bool_filter, text_filter};

#[derive(Clone, Debug, Default)]
pub struct ProviderListState {
    pub items: Vec<Provider>,
    pub page: PageInfo,
    pub name: String,
    pub phone_number: String,
    /// "", "true" or "false"
    pub active: String,
    pub available: String,
    pub is_loaded: bool,
}

impl ProviderListState {
    pub fn params(&self) -> ProviderListParams {
        ProviderListParams {
            page: self.page.request(),
            name: text_filter(&self.name),
            phone_number: text_filter(&self.phone_number),
            active: parse_bool_filter(&self.active),
            available: parse_bool_filter(&self.available),
        }
    }

    pub fn active_filters_count(&self) -> usize {
        let p = self.params();
        [
            p.name.is_some(),
            p.phone_number.is_some(),
            p.active.is_some(),
            p.available.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }

    pub fn clear_filters(&mut self) {
        self.name.clear();
        self.phone_number.clear();
        self.active.clear();
        self.available.clear();
        self.page.page = 1;
    }
}

pub fn create_state() -> RwSignal<ProviderListState> {
    RwSignal::new(ProviderListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_and_filter_count() {
        let mut state = ProviderListState {
            name: " Fix ".into(),
            active: "true".into(),
            ..Default::default()
        };
        let params = state.params();
        assert_eq!(params.name.as_deref(), Some("Fix"));
        assert_eq!(params.active, Some(true));
        assert_eq!(params.available, None);
        assert_eq!(state.active_filters_count(), 2);

        state.clear_filters();
        assert_eq!(state.active_filters_count(), 0);
    }
}
