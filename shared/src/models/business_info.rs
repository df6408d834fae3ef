use crate::models::personal_info::PHONE_REGEX;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Company profile of a business account, as stored by `/api/business-info`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BusinessInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 120, message = "Business name must be at most 120 characters"))]
    pub business_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "Website must be a full URL, e.g. https://example.com"))]
    pub business_website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(regex(path = "PHONE_REGEX", message = "Phone number is not valid"))]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 1000, message = "Additional info must be at most 1000 characters"))]
    pub additional_info: Option<String>,
}

/// Industries offered in the business form's dropdown.
pub const INDUSTRIES: &[&str] = &[
    "Fashion",
    "Beauty",
    "Food & Beverage",
    "Technology",
    "Health & Fitness",
    "Travel",
    "Entertainment",
    "Education",
    "Finance",
    "Other",
];
