use contracts::system::auth::{AdminInfo, LoginResponse};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage, token};
use crate::shared::api_error::ApiError;
use crate::shared::api_utils::{ApiClient, Session};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub user: Option<AdminInfo>,
    /// `true` while the stored token is being checked against `/Admin/Auth/Me`.
    pub loading: bool,
    /// Set when a request came back 401; the login page explains why.
    pub session_expired: bool,
}

impl AuthState {
    /// Startup state from whatever the token store holds.
    pub fn restore(stored_token: Option<String>) -> Self {
        match stored_token.filter(|t| token::is_usable(t)) {
            Some(t) => Self {
                session: Some(Session::new(t)),
                loading: true,
                ..Self::default()
            },
            None => Self::default(),
        }
    }

    pub fn signed_in(response: LoginResponse) -> Self {
        Self {
            session: Some(Session::new(response.token)),
            user: Some(response.user),
            loading: false,
            session_expired: false,
        }
    }

    pub fn expired() -> Self {
        Self {
            session_expired: true,
            ..Self::default()
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_super_admin(&self) -> bool {
        self.user.as_ref().map(|u| u.is_super_admin).unwrap_or(false)
    }
}

/// Handle to the auth state, provided by `AuthProvider`.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: ReadSignal<AuthState>,
    set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    /// API client bound to the current session.
    pub fn client(&self) -> ApiClient {
        match self.state.with_untracked(|s| s.session.clone()) {
            Some(session) => ApiClient::with_session(session),
            None => ApiClient::anonymous(),
        }
    }

    pub fn sign_in(&self, response: LoginResponse) {
        storage::save_token(&response.token);
        log::info!("Signed in as {}", response.user.display_name());
        self.set_state.set(AuthState::signed_in(response));
    }

    pub fn logout(&self) {
        storage::clear_tokens();
        self.set_state.set(AuthState::default());
    }

    /// Drops the session after a 401 and returns to the login page.
    pub fn expire(&self) {
        log::warn!("Session expired, logging out");
        storage::clear_tokens();
        self.set_state.set(AuthState::expired());
    }

    /// Converts an API result for display, logging out on 401.
    pub fn check<T>(&self, result: Result<T, ApiError>) -> Result<T, String> {
        result.map_err(|e| {
            if e.is_unauthorized() {
                self.expire();
            }
            e.to_string()
        })
    }

    pub fn is_super_admin(&self) -> bool {
        self.state.with(|s| s.is_super_admin())
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (state, set_state) = signal(AuthState::restore(storage::get_token()));
    if state.with_untracked(|s| s.session.is_none()) {
        // Expired or malformed tokens are not kept around.
        storage::clear_tokens();
    }
    let ctx = AuthContext { state, set_state };

    if let Some(session) = state.with_untracked(|s| s.session.clone()) {
        spawn_local(async move {
            let client = ApiClient::with_session(session);
            match api::get_current_admin(&client).await {
                Ok(admin) => set_state.update(|s| {
                    s.user = Some(admin);
                    s.loading = false;
                }),
                Err(ApiError::Unauthorized) => ctx.expire(),
                Err(e) => {
                    log::error!("Error fetching admin info: {}", e);
                    set_state.update(|s| {
                        s.user = None;
                        s.loading = false;
                    });
                }
            }
        });
    }

    provide_context(ctx);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthProvider not found in component tree")
}

/// Helper: Perform login
pub async fn do_login(
    ctx: AuthContext,
    phone_number: String,
    password: String,
) -> Result<(), String> {
    let response = api::login(&ApiClient::anonymous(), phone_number, password)
        .await
        .map_err(|e| {
            log::error!("Login error: {}", e);
            e.to_string()
        })?;
    ctx.sign_in(response);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin(is_super_admin: bool) -> AdminInfo {
        AdminInfo {
            id: 1,
            name: Some("Root".into()),
            phone_number: Some("0770".into()),
            is_super_admin,
        }
    }

    #[test]
    fn test_restore_without_token() {
        let state = AuthState::restore(None);
        assert!(!state.is_authenticated());
        assert!(!state.loading);
    }

    #[test]
    fn test_restore_with_opaque_token_waits_for_me() {
        let state = AuthState::restore(Some("opaque".into()));
        assert!(state.is_authenticated());
        assert!(state.loading);
        assert!(state.user.is_none());
    }

    #[test]
    fn test_signed_in_and_expired() {
        let state = AuthState::signed_in(LoginResponse {
            user: admin(true),
            token: "t".into(),
        });
        assert!(state.is_authenticated());
        assert!(state.is_super_admin());
        assert_eq!(state.session.as_ref().map(|s| s.token()), Some("t"));

        let expired = AuthState::expired();
        assert!(!expired.is_authenticated());
        assert!(expired.session_expired);
        assert!(!expired.is_super_admin());
    }
}
