use crate::api::api_url;
use crate::api::utils::{authenticated_get, read_json, send};
use log::{debug, error};
use shared::error::ApiError;
use shared::models::socials::LinkedSocials;

pub const LINKED_SOCIALS_PATH: &str = "/api/socials/linked";

pub async fn fetch_linked_socials() -> Result<LinkedSocials, ApiError> {
    debug!("Fetching linked social accounts");

    let response = send(authenticated_get(&api_url(LINKED_SOCIALS_PATH))).await?;
    match read_json::<Option<LinkedSocials>>(response).await {
        Ok(socials) => {
            let socials = socials.unwrap_or_default();
            debug!("{} linked social accounts", socials.linked_count());
            Ok(socials)
        }
        Err(e) => {
            error!("Failed to fetch linked socials: {}", e);
            Err(e)
        }
    }
}
