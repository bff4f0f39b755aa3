use contracts::domain::a008_product::aggregate::{Product, ProductListParams};
use leptos::prelude::*;

use crate::shared::components::pagination_controls::PageInfo;
use crate::shared::list_utils::{id_filter, parse_bool_filter, text_filter};

#[derive(Clone, Debug, Default)]
pub struct ProductListState {
    pub items: Vec<Product>,
    pub page: PageInfo,
    pub keyword: String,
    pub provider_id: String,
    pub category_id: String,
    pub sub_category_id: String,
    /// "", "true" or "false"
    pub approved: String,
    pub is_loaded: bool,
}

impl ProductListState {
    pub fn params(&self) -> ProductListParams {
        ProductListParams {
            page: self.page.request(),
            provider_id: id_filter(&self.provider_id),
            category_id: id_filter(&self.category_id),
            sub_category_id: id_filter(&self.sub_category_id),
            is_approved: parse_bool_filter(&self.approved),
            keyword: text_filter(&self.keyword),
        }
    }

    pub fn active_filters_count(&self) -> usize {
        let p = self.params();
        [
            p.provider_id.is_some(),
            p.category_id.is_some(),
            p.sub_category_id.is_some(),
            p.is_approved.is_some(),
            p.keyword.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }

    pub fn clear_filters(&mut self) {
        self.keyword.clear();
        self.provider_id.clear();
        self.category_id.clear();
        self.sub_category_id.clear();
        self.approved.clear();
        self.page.page = 1;
    }
}

pub fn create_state() -> RwSignal<ProductListState> {
    RwSignal::new(ProductListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params() {
        let mut state = ProductListState {
            keyword: " kit ".into(),
            category_id: "4".into(),
            sub_category_id: "0".into(),
            approved: "false".into(),
            ..Default::default()
        };
        let params = state.params();
        assert_eq!(params.keyword.as_deref(), Some("kit"));
        assert_eq!(params.category_id, Some(4));
        assert_eq!(params.sub_category_id, None);
        assert_eq!(params.is_approved, Some(false));
        assert_eq!(state.active_filters_count(), 3);

        state.clear_filters();
        assert_eq!(state.params(), ProductListParams {
            page: state.page.request(),
            ..Default::default()
        });
    }
}
