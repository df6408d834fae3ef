use crate::api::api_url;
use crate::api::utils::{authenticated_get, read_json, send};
use log::{debug, error};
use shared::error::ApiError;
use shared::models::user::{CurrentUser, CurrentUserResponse};

pub const CURRENT_USER_PATH: &str = "/api/auth/me";
pub const INSTAGRAM_LOGIN_PATH: &str = "/api/instagram/login";

pub async fn fetch_current_user() -> Result<CurrentUser, ApiError> {
    debug!("Fetching current user");

    let response = send(authenticated_get(&api_url(CURRENT_USER_PATH))).await;
    let result = match response {
        Ok(response) => read_json::<CurrentUserResponse>(response)
            .await
            .map(CurrentUser::from),
        Err(e) => Err(e),
    };

    match &result {
        Ok(user) => debug!("Current user {} is a {} account", user.id, user.user_type.as_str()),
        Err(e) => error!("Failed to fetch current user: {}", e),
    }
    result
}

/// Entry point of the Instagram authorization redirect. The token travels as
/// the `state` parameter so the backend can tie the callback to the account.
pub fn instagram_login_url(base_url: &str, token: Option<&str>) -> String {
    format!(
        "{}{}?state={}",
        base_url,
        INSTAGRAM_LOGIN_PATH,
        urlencoding::encode(token.unwrap_or_default())
    )
}
