use wasm_bindgen::JsCast;
use web_sys::window;

pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Keys older builds of the dashboard left behind; cleared on logout.
const LEGACY_LOCAL_KEYS: [&str; 3] = ["authToken", "refreshToken", "userData"];
const LEGACY_SESSION_KEY: &str = "authToken";
const LEGACY_COOKIE: &str = "authToken=; expires=Thu, 01 Jan 1970 00:00:00 UTC; path=/;";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn get_session_storage() -> Option<web_sys::Storage> {
    window()?.session_storage().ok()?
}

/// Save the bearer token to localStorage
pub fn save_token(token: &str) {
    if let Some(storage) = get_local_storage() {
        if storage.set_item(AUTH_TOKEN_KEY, token).is_err() {
            log::warn!("Could not persist auth token");
        }
    }
}

/// Bearer token from localStorage, if any
pub fn get_token() -> Option<String> {
    get_local_storage()?
        .get_item(AUTH_TOKEN_KEY)
        .ok()?
        .filter(|t| !t.trim().is_empty())
}

/// Clear every piece of persisted auth state
pub fn clear_tokens() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(AUTH_TOKEN_KEY);
        for key in LEGACY_LOCAL_KEYS {
            let _ = storage.remove_item(key);
        }
    }
    if let Some(storage) = get_session_storage() {
        let _ = storage.remove_item(LEGACY_SESSION_KEY);
    }
    if let Some(document) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
    {
        let _ = document.set_cookie(LEGACY_COOKIE);
    }
}
