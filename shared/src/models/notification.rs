use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}

/// Delivery preferences edited on the notifications tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPreferences {
    pub email: bool,
    pub push: bool,
    pub marketing: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            email: true,
            push: true,
            marketing: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn counts_unread_notifications() {
        let list: Vec<Notification> = serde_json::from_value(json!([
            { "id": "1", "message": "New campaign invite", "createdAt": "2024-03-01T10:00:00Z" },
            { "_id": "2", "message": "Payment received", "read": true },
            { "id": "3", "title": "Reminder", "message": "Complete your profile" }
        ]))
        .unwrap();
        assert_eq!(unread_count(&list), 2);
        assert!(list[0].created_at.is_some());
    }
}
