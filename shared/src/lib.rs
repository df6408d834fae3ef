pub mod models {
    pub mod personal_info;
    pub mod business_info;
    pub mod socials;
    pub mod user;
    pub mod notification;
    pub mod profile_image;
}

pub mod forms {
    pub mod draft;
    pub mod personal;
    pub mod business;
    pub mod settings;
}

pub mod error;
pub mod linked_accounts;
pub mod locations;
pub mod onboarding;

// Re-export commonly used items
pub use error::{ApiError, Result, SharedError};

// Re-export models
pub use models::{
    business_info::BusinessInfo,
    notification::{Notification, NotificationPreferences},
    personal_info::{Gender, PersonalInfo},
    profile_image::ProfileImage,
    socials::{LinkedSocials, Platform},
    user::{CurrentUser, CurrentUserResponse, UserType},
};

// Re-export form state
pub use forms::{
    business::{BusinessDraft, BusinessField},
    draft::{DraftRecord, FormPhase, FormState},
    personal::{PersonalDraft, PersonalField},
    settings::{BillingDetails, PasswordChange, Plan, PrivacySettings},
};
