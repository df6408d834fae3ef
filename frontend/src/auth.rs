use crate::config::Config;
use gloo_storage::{LocalStorage, Storage};
use log::{debug, error};

/// Bearer token of the signed-in user, if any.
///
/// The sign-in flow may have stored the token JSON-encoded or as a raw
/// string; both are accepted.
pub fn auth_token() -> Option<String> {
    let token = LocalStorage::get::<String>(Config::TOKEN_STORAGE_KEY)
        .ok()
        .or_else(|| {
            LocalStorage::raw()
                .get_item(Config::TOKEN_STORAGE_KEY)
                .ok()
                .flatten()
        });
    normalize_token(token)
}

pub fn set_auth_token(token: &str) {
    if let Err(e) = LocalStorage::set(Config::TOKEN_STORAGE_KEY, token) {
        error!("Failed to store auth token: {}", e);
    }
}

pub fn clear_auth_token() {
    debug!("Clearing auth token");
    LocalStorage::delete(Config::TOKEN_STORAGE_KEY);
}

pub fn normalize_token(token: Option<String>) -> Option<String> {
    token
        .map(|t| t.trim().trim_matches('"').to_string())
        .filter(|t| !t.is_empty())
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
