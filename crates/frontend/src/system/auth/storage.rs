use web_sys::window;

use crate::shared::config::config;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn token_key() -> &'static str {
    &config().auth.token_storage_key
}

/// Save access token to localStorage
pub fn save_access_token(token: &str) {
    if let Some(storage) = get_local_storage() {
        if let Err(e) = storage.set_item(token_key(), token) {
            log::warn!("Failed to persist access token: {e:?}");
        }
    }
}

/// Get access token from localStorage
pub fn get_access_token() -> Option<String> {
    get_local_storage()?
        .get_item(token_key())
        .ok()?
        .filter(|token| !token.is_empty())
}

/// Clear the persisted token
pub fn clear_tokens() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(token_key());
    }
}
