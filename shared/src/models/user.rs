use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Influencer,
    Business,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Influencer => "influencer",
            UserType::Business => "business",
        }
    }
}

/// The signed-in account as returned by `/api/auth/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub user_type: UserType,
}

/// `/api/auth/me` answers either with the bare user or wrapped as `{ "user": ... }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CurrentUserResponse {
    Wrapped { user: CurrentUser },
    Bare(CurrentUser),
}

impl From<CurrentUserResponse> for CurrentUser {
    fn from(response: CurrentUserResponse) -> Self {
        match response {
            CurrentUserResponse::Wrapped { user } => user,
            CurrentUserResponse::Bare(user) => user,
        }
    }
}
