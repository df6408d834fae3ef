use crate::error::SharedError;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    #[default]
    Free,
    Pro,
    Enterprise,
}

impl Plan {
    pub const ALL: [Plan; 3] = [Plan::Free, Plan::Pro, Plan::Enterprise];

    pub fn as_str(&self) -> &'static str {
        match self {
            Plan::Free => "free",
            Plan::Pro => "pro",
            Plan::Enterprise => "enterprise",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Plan::Free => "Free",
            Plan::Pro => "Pro",
            Plan::Enterprise => "Enterprise",
        }
    }

    pub fn parse(value: &str) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == value)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct BillingDetails {
    #[validate(email(message = "Billing email is not valid"))]
    pub billing_email: String,
    pub plan: Plan,
    #[validate(length(max = 100, message = "Card holder must be at most 100 characters"))]
    pub card_holder: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivacySettings {
    pub public_profile: bool,
    pub show_contact_info: bool,
    pub allow_discovery: bool,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            public_profile: true,
            show_contact_info: false,
            allow_discovery: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordChange {
    pub fn check(&self) -> Result<(), SharedError> {
        if self.current_password.is_empty()
            || self.new_password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(SharedError::MissingField(
                "Please fill in all fields".to_string(),
            ));
        }
        if self.new_password != self.confirm_password {
            return Err(SharedError::PasswordMismatch);
        }
        if self.new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(SharedError::Validation(format!(
                "New password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn change(current: &str, new: &str, confirm: &str) -> PasswordChange {
        PasswordChange {
            current_password: current.into(),
            new_password: new.into(),
            confirm_password: confirm.into(),
        }
    }

    #[test_case("", "password123", "password123" ; "missing current")]
    #[test_case("old-secret", "password123", "password124" ; "mismatch")]
    #[test_case("old-secret", "short", "short" ; "too short")]
    fn rejects_invalid_password_changes(current: &str, new: &str, confirm: &str) {
        assert!(change(current, new, confirm).check().is_err());
    }

    #[test]
    fn accepts_matching_long_password() {
        assert!(change("old-secret", "password123", "password123").check().is_ok());
    }

    #[test]
    fn mismatch_is_reported_as_such() {
        let err = change("old", "password123", "password999").check().unwrap_err();
        assert!(matches!(err, SharedError::PasswordMismatch));
    }

    #[test]
    fn billing_email_is_validated() {
        let details = BillingDetails {
            billing_email: "billing@acme.example".into(),
            ..Default::default()
        };
        assert!(details.validate().is_ok());

        let details = BillingDetails {
            billing_email: "not-an-email".into(),
            ..Default::default()
        };
        assert!(details.validate().is_err());
    }

    #[test]
    fn unknown_plan_falls_back_to_free() {
        assert_eq!(Plan::parse("pro"), Plan::Pro);
        assert_eq!(Plan::parse("platinum"), Plan::Free);
    }
}
