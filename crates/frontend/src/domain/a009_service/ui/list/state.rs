use contracts::domain::a009_service::aggregate::{Service, ServiceListParams};
use leptos::prelude::*;

use crate::shared::components::pagination_controls::PageInfo;
use crate::shared::list_utils::{id_filter, parse_bool_filter};

#[derive(Clone, Debug, Default)]
pub struct ServiceListState {
    pub items: Vec<Service>,
    pub page: PageInfo,
    pub provider_id: String,
    pub category_id: String,
    pub sub_category_id: String,
    pub approved: String,
    pub is_loaded: bool,
}

impl ServiceListState {
    pub fn params(&self) -> ServiceListParams {
        ServiceListParams {
            page: self.page.request(),
            provider_id: id_filter(&self.provider_id),
            category_id: id_filter(&self.category_id),
            sub_category_id: id_filter(&self.sub_category_id),
            is_approved: parse_bool_filter(&self.approved),
        }
    }

    pub fn active_filters_count(&self) -> usize {
        let p = self.params();
        [
            p.provider_id.is_some(),
            p.category_id.is_some(),
            p.sub_category_id.is_some(),
            p.is_approved.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }

    pub fn clear_filters(&mut self) {
        self.provider_id.clear();
        self.category_id.clear();
        self.sub_category_id.clear();
        self.approved.clear();
        self.page.page = 1;
    }
}

pub fn create_state() -> RwSignal<ServiceListState> {
    RwSignal::new(ServiceListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters() {
        let mut state = ServiceListState {
            provider_id: "8".into(),
            approved: "true".into(),
            ..Default::default()
        };
        state.page.page = 3;
        let params = state.params();
        assert_eq!(params.provider_id, Some(8));
        assert_eq!(params.is_approved, Some(true));
        assert_eq!(state.active_filters_count(), 2);

        state.clear_filters();
        assert_eq!(state.active_filters_count(), 0);
        assert_eq!(state.page.page, 1);
    }
}
