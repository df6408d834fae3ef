use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

lazy_static! {
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[0-9][0-9 ()-]{5,19}$").unwrap();
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    /// Unknown values fall back to the default.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "female" => Gender::Female,
            _ => Gender::Male,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Personal profile of an influencer account, as stored by `/api/personal-info`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 100, message = "Full name must be at most 100 characters"))]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(regex(path = "PHONE_REGEX", message = "Phone number is not valid"))]
    pub phone_number: Option<String>,
    #[serde(default, deserialize_with = "gender_or_default")]
    pub gender: Gender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub niche: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500, message = "Bio must be at most 500 characters"))]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

// The backend stores whatever string the form sent, including "" and null.
fn gender_or_default<'de, D>(deserializer: D) -> Result<Gender, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.map(|g| Gender::parse(&g)).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn deserializes_camel_case_record() {
        let value = json!({
            "fullName": "Ada Obi",
            "phoneNumber": "+2348012345678",
            "gender": "female",
            "niche": "Fashion",
            "bio": "Stylist",
            "state": "Lagos",
            "city": "Ikeja"
        });
        let info: PersonalInfo = serde_json::from_value(value).unwrap();
        assert_eq!(info.full_name.as_deref(), Some("Ada Obi"));
        assert_eq!(info.gender, Gender::Female);
        assert_eq!(info.city.as_deref(), Some("Ikeja"));
    }

    #[test]
    fn missing_or_null_gender_defaults_to_male() {
        let info: PersonalInfo = serde_json::from_value(json!({ "fullName": "A" })).unwrap();
        assert_eq!(info.gender, Gender::Male);

        let info: PersonalInfo = serde_json::from_value(json!({ "gender": null })).unwrap();
        assert_eq!(info.gender, Gender::Male);
    }

    #[test]
    fn absent_fields_are_not_serialized() {
        let info = PersonalInfo {
            full_name: Some("Ada".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value, json!({ "fullName": "Ada", "gender": "male" }));
    }

    #[test]
    fn rejects_malformed_phone_number() {
        let info = PersonalInfo {
            phone_number: Some("call me".into()),
            ..Default::default()
        };
        assert!(info.validate().is_err());

        let info = PersonalInfo {
            phone_number: Some("+1 (555) 010-2030".into()),
            ..Default::default()
        };
        assert!(info.validate().is_ok());
    }
}
