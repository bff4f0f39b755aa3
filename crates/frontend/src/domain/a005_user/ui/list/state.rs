use contracts::domain::a005_user::aggregate::{User, UserListParams};
use leptos::prelude::*;

use crate::shared::components::pagination_controls::PageInfo;
use crate::shared::list_utils::text_filter;

#[derive(Clone, Debug, Default)]
pub struct UserListState {
    pub items: Vec<User>,
    pub page: PageInfo,
    pub name: String,
    pub phone_number: String,
    pub is_loaded: bool,
}

impl UserListState {
    pub fn params(&self) -> UserListParams {
        UserListParams {
            page: self.page.request(),
            name: text_filter(&self.name),
            phone_number: text_filter(&self.phone_number),
        }
    }

    pub fn active_filters_count(&self) -> usize {
        [&self.name, &self.phone_number]
            .iter()
            .filter(|v| text_filter(v).is_some())
            .count()
    }

    /// Local copy of a block/unblock the backend accepted.
    pub fn set_blocked(&mut self, id: i64, is_blocked: bool) {
        if let Some(user) = self.items.iter_mut().find(|u| u.id == id) {
            user.is_blocked = is_blocked;
        }
    }
}

pub fn create_state() -> RwSignal<UserListState> {
    RwSignal::new(UserListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_skip_blank_filters() {
        let state = UserListState {
            name: "  ".into(),
            phone_number: "0770".into(),
            ..Default::default()
        };
        let params = state.params();
        assert_eq!(params.name, None);
        assert_eq!(params.phone_number.as_deref(), Some("0770"));
        assert_eq!(state.active_filters_count(), 1);
    }

    #[test]
    fn test_set_blocked_updates_row() {
        let mut state = UserListState {
            items: vec![User {
                id: 4,
                name: "Sara".into(),
                ..Default::default()
            }],
            ..Default::default()
        };
        state.set_blocked(4, true);
        assert!(state.items[0].is_blocked);
        state.set_blocked(99, true);
    }
}
