use crate::api::api_url;
use crate::api::utils::{authenticated_get, authenticated_post, read_json, send, send_json};
use log::{debug, error};
use shared::error::ApiError;
use shared::models::business_info::BusinessInfo;

pub const BUSINESS_INFO_PATH: &str = "/api/business-info";

/// `Ok(None)` when the business has not saved a profile yet.
pub async fn get_business_info() -> Result<Option<BusinessInfo>, ApiError> {
    debug!("Fetching business info");

    let response = send(authenticated_get(&api_url(BUSINESS_INFO_PATH)))
        .await
        .map_err(|e| {
            error!("Failed to send business info request: {}", e);
            e
        })?;

    read_json::<Option<BusinessInfo>>(response).await.map_err(|e| {
        error!("Failed to load business info: {}", e);
        e
    })
}

pub async fn upsert_business_info(info: &BusinessInfo) -> Result<Option<BusinessInfo>, ApiError> {
    debug!("Saving business info for {:?}", info.business_name);

    let response = send_json(authenticated_post(&api_url(BUSINESS_INFO_PATH)), info)
        .await
        .map_err(|e| {
            error!("Failed to send business info update: {}", e);
            e
        })?;

    let saved = read_json::<Option<BusinessInfo>>(response).await.map_err(|e| {
        error!("Failed to save business info: {}", e);
        e
    })?;

    debug!("Business info saved");
    Ok(saved)
}
