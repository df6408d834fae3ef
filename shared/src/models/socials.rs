use serde::{Deserialize, Serialize};
use std::fmt;

/// Third-party platforms whose connection status is tracked per user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Facebook,
    Twitter,
    Youtube,
    Linkedin,
    Tiktok,
    Other,
}

impl Platform {
    /// Every platform reported by the linked-socials endpoint, in display order.
    pub const ALL: [Platform; 7] = [
        Platform::Instagram,
        Platform::Facebook,
        Platform::Twitter,
        Platform::Youtube,
        Platform::Linkedin,
        Platform::Tiktok,
        Platform::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Facebook => "facebook",
            Platform::Twitter => "twitter",
            Platform::Youtube => "youtube",
            Platform::Linkedin => "linkedin",
            Platform::Tiktok => "tiktok",
            Platform::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::Facebook => "Facebook",
            Platform::Twitter => "Twitter",
            Platform::Youtube => "YouTube",
            Platform::Linkedin => "LinkedIn",
            Platform::Tiktok => "TikTok",
            Platform::Other => "Other",
        }
    }

    pub fn from_str_opt(value: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Linked-account flags as returned by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedSocials {
    #[serde(default)]
    pub instagram_linked: bool,
    #[serde(default)]
    pub instagram_username: Option<String>,
    #[serde(default)]
    pub instagram_account_type: Option<String>,
    #[serde(default)]
    pub facebook: bool,
    #[serde(default)]
    pub twitter: bool,
    #[serde(default)]
    pub youtube: bool,
    #[serde(default)]
    pub linkedin: bool,
    #[serde(default)]
    pub tiktok: bool,
    #[serde(default)]
    pub other: bool,
}

impl LinkedSocials {
    pub fn is_linked(&self, platform: Platform) -> bool {
        match platform {
            Platform::Instagram => self.instagram_linked,
            Platform::Facebook => self.facebook,
            Platform::Twitter => self.twitter,
            Platform::Youtube => self.youtube,
            Platform::Linkedin => self.linkedin,
            Platform::Tiktok => self.tiktok,
            Platform::Other => self.other,
        }
    }

    /// Handle shown next to a linked account, when the backend knows one.
    pub fn handle(&self, platform: Platform) -> Option<&str> {
        match platform {
            Platform::Instagram if self.instagram_linked => self
                .instagram_username
                .as_deref()
                .filter(|u| !u.trim().is_empty()),
            _ => None,
        }
    }

    pub fn linked_count(&self) -> usize {
        Platform::ALL.iter().filter(|p| self.is_linked(**p)).count()
    }
}
