use crate::api::api_url;
use crate::api::utils::{authenticated_get, read_json, send};
use log::{debug, error};
use shared::error::ApiError;
use shared::models::profile_image::ProfileImage;

pub const PROFILE_IMAGE_PATH: &str = "/api/profileImage";

/// Avatar URL of the signed-in user; `Ok(None)` when none is set.
pub async fn fetch_profile_image() -> Result<Option<String>, ApiError> {
    debug!("Fetching profile image");

    let response = send(authenticated_get(&api_url(PROFILE_IMAGE_PATH))).await?;
    let image = read_json::<Option<ProfileImage>>(response)
        .await
        .map_err(|e| {
            error!("Failed to fetch profile image: {}", e);
            e
        })?;

    Ok(image.and_then(ProfileImage::into_url))
}
