use crate::api::api_url;
use crate::api::utils::{authenticated_get, read_json, send};
use log::{debug, error};
use shared::error::ApiError;
use shared::models::notification::Notification;

pub const NOTIFICATIONS_PATH: &str = "/api/notifications";

pub async fn fetch_notifications() -> Result<Vec<Notification>, ApiError> {
    debug!("Fetching notifications");

    let response = send(authenticated_get(&api_url(NOTIFICATIONS_PATH))).await?;
    let notifications = read_json::<Option<Vec<Notification>>>(response)
        .await
        .map_err(|e| {
            error!("Failed to fetch notifications: {}", e);
            e
        })?
        .unwrap_or_default();

    debug!("Fetched {} notifications", notifications.len());
    Ok(notifications)
}
