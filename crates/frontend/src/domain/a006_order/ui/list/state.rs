use contracts::domain::a006_order::aggregate::{Order, OrderListParams};
use contracts::enums::order_status::OrderStatus;
use leptos::prelude::*;

use crate::shared::components::pagination_controls::PageInfo;
use crate::shared::date_utils::date_input_to_iso;
use crate::shared::list_utils::id_filter;

#[derive(Clone, Debug, Default)]
pub struct OrderListState {
    pub items: Vec<Order>,
    pub page: PageInfo,
    /// Numeric status code, or "" for any
    pub status: String,
    /// `YYYY-MM-DD` from the date inputs
    pub from_date: String,
    pub to_date: String,
    pub user_id: String,
    pub provider_id: String,
    pub is_loaded: bool,
}

impl OrderListState {
    pub fn params(&self) -> OrderListParams {
        OrderListParams {
            page: self.page.request(),
            user_id: id_filter(&self.user_id),
            provider_id: id_filter(&self.provider_id),
            order_status: self.status.parse().ok().map(OrderStatus::from_code),
            from_date: date_input_to_iso(&self.from_date),
            to_date: date_input_to_iso(&self.to_date),
        }
    }

    pub fn active_filters_count(&self) -> usize {
        let p = self.params();
        [
            p.user_id.is_some(),
            p.provider_id.is_some(),
            p.order_status.is_some(),
            p.from_date.is_some(),
            p.to_date.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }

    pub fn clear_filters(&mut self) {
        self.status.clear();
        self.from_date.clear();
        self.to_date.clear();
        self.user_id.clear();
        self.provider_id.clear();
        self.page.page = 1;
    }
}

pub fn create_state() -> RwSignal<OrderListState> {
    RwSignal::new(OrderListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_from_filters() {
        let state = OrderListState {
            status: "6".into(),
            from_date: "2025-03-01".into(),
            to_date: "not a date".into(),
            user_id: "12".into(),
            provider_id: "0".into(),
            ..Default::default()
        };
        let params = state.params();
        assert_eq!(params.order_status, Some(OrderStatus::Completed));
        assert_eq!(params.from_date.as_deref(), Some("2025-03-01"));
        assert_eq!(params.to_date, None);
        assert_eq!(params.user_id, Some(12));
        assert_eq!(params.provider_id, None);
        assert_eq!(state.active_filters_count(), 3);
        assert_eq!(
            params.to_query().build(),
            "PageNumber=1&PageSize=10&UserId=12&OrderStatus=6&FromDate=2025-03-01"
        );
    }

    #[test]
    fn test_clear_filters() {
        let mut state = OrderListState {
            status: "1".into(),
            ..Default::default()
        };
        state.page.page = 4;
        state.clear_filters();
        assert_eq!(state.active_filters_count(), 0);
        assert_eq!(state.page.page, 1);
    }
}
