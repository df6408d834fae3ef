use crate::api::api_url;
use crate::api::utils::{authenticated_get, authenticated_post, read_json, send, send_json};
use log::{debug, error};
use shared::error::ApiError;
use shared::models::personal_info::PersonalInfo;

pub const PERSONAL_INFO_PATH: &str = "/api/personal-info";

/// `Ok(None)` when the influencer has not saved a profile yet.
pub async fn get_personal_info() -> Result<Option<PersonalInfo>, ApiError> {
    debug!("Fetching personal info");

    let response = send(authenticated_get(&api_url(PERSONAL_INFO_PATH)))
        .await
        .map_err(|e| {
            error!("Failed to send personal info request: {}", e);
            e
        })?;

    read_json::<Option<PersonalInfo>>(response).await.map_err(|e| {
        error!("Failed to load personal info: {}", e);
        e
    })
}

pub async fn upsert_personal_info(info: &PersonalInfo) -> Result<Option<PersonalInfo>, ApiError> {
    debug!("Saving personal info");

    let response = send_json(authenticated_post(&api_url(PERSONAL_INFO_PATH)), info)
        .await
        .map_err(|e| {
            error!("Failed to send personal info update: {}", e);
            e
        })?;

    let saved = read_json::<Option<PersonalInfo>>(response).await.map_err(|e| {
        error!("Failed to save personal info: {}", e);
        e
    })?;

    debug!("Personal info saved");
    Ok(saved)
}
