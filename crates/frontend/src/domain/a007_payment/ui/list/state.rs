use contracts::domain::a007_payment::aggregate::{settleable_ids, Payment, PaymentListParams};
use contracts::enums::payment_status::PaymentStatus;
use leptos::prelude::*;

use crate::shared::components::pagination_controls::PageInfo;

#[derive(Clone, Debug, Default)]
pub struct PaymentListState {
    pub items: Vec<Payment>,
    pub page: PageInfo,
    /// Gateway status code, "" for any
    pub status: String,
    /// Checked rows; only SUCCESS payments can be checked
    pub selected: Vec<i64>,
    pub is_loaded: bool,
}

impl PaymentListState {
    pub fn params(&self) -> PaymentListParams {
        PaymentListParams {
            page: self.page.request(),
            status: (!self.status.is_empty()).then(|| PaymentStatus::from_code(&self.status)),
        }
    }

    pub fn active_filters_count(&self) -> usize {
        usize::from(!self.status.is_empty())
    }

    /// Replaces the page and drops the previous selection.
    pub fn set_items(&mut self, items: Vec<Payment>) {
        self.items = items;
        self.selected.clear();
        self.is_loaded = true;
    }

    pub fn selectable(&self) -> Vec<i64> {
        settleable_ids(&self.items)
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.selected.contains(&id)
    }

    pub fn toggle(&mut self, id: i64, checked: bool) {
        if checked {
            if !self.is_selected(id) && self.selectable().contains(&id) {
                self.selected.push(id);
            }
        } else {
            self.selected.retain(|s| *s != id);
        }
    }

    pub fn select_all(&mut self, checked: bool) {
        self.selected = if checked { self.selectable() } else { Vec::new() };
    }

    pub fn all_selected(&self) -> bool {
        let selectable = self.selectable();
        !selectable.is_empty() && selectable.iter().all(|id| self.is_selected(*id))
    }
}

pub fn create_state() -> RwSignal<PaymentListState> {
    RwSignal::new(PaymentListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payment(id: i64, status: PaymentStatus) -> Payment {
        Payment {
            id,
            amount: 5000.0,
            payment_method: 1,
            status,
            order_id: id + 100,
            user_id: 1,
            user: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn state() -> PaymentListState {
        let mut state = PaymentListState {
            selected: vec![99],
            ..Default::default()
        };
        state.set_items(vec![
            payment(1, PaymentStatus::Success),
            payment(2, PaymentStatus::Paid),
            payment(3, PaymentStatus::Success),
        ]);
        state
    }

    #[test]
    fn test_set_items_clears_selection() {
        let state = state();
        assert!(state.selected.is_empty());
        assert!(state.is_loaded);
    }

    #[test]
    fn test_only_success_rows_can_be_selected() {
        let mut state = state();
        state.toggle(2, true);
        state.toggle(1, true);
        state.toggle(1, true);
        assert_eq!(state.selected, vec![1]);
        state.toggle(1, false);
        assert!(state.selected.is_empty());
    }

    #[test]
    fn test_select_all() {
        let mut state = state();
        assert!(!state.all_selected());
        state.select_all(true);
        assert_eq!(state.selected, vec![1, 3]);
        assert!(state.all_selected());
        state.select_all(false);
        assert!(state.selected.is_empty());
    }

    #[test]
    fn test_status_filter() {
        let mut state = PaymentListState::default();
        assert_eq!(state.params().status, None);
        state.status = "SUCCESS".into();
        assert_eq!(state.params().status, Some(PaymentStatus::Success));
        assert_eq!(state.active_filters_count(), 1);
    }
}
