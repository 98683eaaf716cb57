//! Browser `localStorage` access.
//!
//! The API issues the bearer token; the portal only stores and forwards it.

use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "auth_token";
const LOCALE_KEY: &str = "preferred_locale";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Get access token from localStorage
pub fn get_access_token() -> Option<String> {
    get_local_storage()?
        .get_item(ACCESS_TOKEN_KEY)
        .ok()?
        .filter(|t| !t.is_empty())
}

/// Drop a token the API rejected
pub fn clear_access_token() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
    }
}

pub fn get_preferred_locale() -> Option<String> {
    get_local_storage()?.get_item(LOCALE_KEY).ok()?
}

pub fn save_preferred_locale(code: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(LOCALE_KEY, code);
    }
}
