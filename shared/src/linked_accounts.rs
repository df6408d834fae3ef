use crate::error::ApiError;
use crate::models::socials::{LinkedSocials, Platform};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformStatus {
    pub platform: Platform,
    pub linked: bool,
    pub handle: Option<String>,
}

impl PlatformStatus {
    pub fn badge(&self) -> &'static str {
        if self.linked {
            "Linked"
        } else {
            "Not Linked"
        }
    }
}

/// Render states of the linked-accounts view. An error is terminal for the
/// lifetime of the view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LinkedAccountsView {
    #[default]
    Loading,
    Error(String),
    Loaded(Vec<PlatformStatus>),
}

impl LinkedAccountsView {
    pub fn from_result(result: Result<LinkedSocials, ApiError>) -> Self {
        match result {
            Ok(socials) => Self::Loaded(statuses(&socials)),
            Err(e) => Self::Error(format!("Failed to load linked accounts: {}", e)),
        }
    }

    pub fn badges(&self) -> &[PlatformStatus] {
        match self {
            Self::Loaded(statuses) => statuses,
            _ => &[],
        }
    }
}

pub fn statuses(socials: &LinkedSocials) -> Vec<PlatformStatus> {
    Platform::ALL
        .iter()
        .map(|platform| PlatformStatus {
            platform: *platform,
            linked: socials.is_linked(*platform),
            handle: socials.handle(*platform).map(str::to_string),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn marks_only_instagram_linked() {
        let socials: LinkedSocials = serde_json::from_value(json!({
            "instagram_linked": true,
            "facebook": false,
            "twitter": false,
            "youtube": false
        }))
        .unwrap();
        let view = LinkedAccountsView::from_result(Ok(socials));

        let badges = view.badges();
        assert_eq!(badges.len(), Platform::ALL.len());
        assert_eq!(badges[0].platform, Platform::Instagram);
        assert_eq!(badges[0].badge(), "Linked");
        for status in &badges[1..] {
            assert_eq!(status.badge(), "Not Linked", "{}", status.platform);
        }
    }

    #[test]
    fn failed_fetch_renders_error_without_badges() {
        let view = LinkedAccountsView::from_result(Err(ApiError::Network("offline".into())));
        assert!(matches!(view, LinkedAccountsView::Error(ref msg) if msg.contains("offline")));
        assert!(view.badges().is_empty());
    }

    #[test]
    fn starts_loading() {
        assert_eq!(LinkedAccountsView::default(), LinkedAccountsView::Loading);
        assert!(LinkedAccountsView::Loading.badges().is_empty());
    }
}
