use serde::{Deserialize, Serialize};
use serde_json::Error as JsonError;
use thiserror::Error;
use validator::ValidationErrors;

/// Failure of a single backend call.
///
/// Every API client function reports failures through this type; whether a
/// failure becomes an empty screen or a visible message is decided by the
/// caller.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiError {
    #[error("Connection error: {0}")]
    Network(String),

    #[error("Session expired or not authorized")]
    Unauthorized,

    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Maps a non-2xx status and its (possibly empty) body message to an error.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            401 | 403 => Self::Unauthorized,
            _ => Self::Status {
                status,
                message: message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| format!("HTTP {}", status)),
            },
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

impl From<JsonError> for ApiError {
    fn from(error: JsonError) -> Self {
        Self::Decode(error.to_string())
    }
}

/// Error body shapes the backend uses for non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.error.or(self.message)
    }
}

#[derive(Debug, Error, Serialize, Deserialize)]
pub enum SharedError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Password mismatch: new passwords do not match")]
    PasswordMismatch,

    #[error("Required field missing: {0}")]
    MissingField(String),

    #[error("Conversion error: {0}")]
    Conversion(String),
}

impl From<ValidationErrors> for SharedError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let detail = errs
                    .iter()
                    .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                    .next()
                    .unwrap_or_else(|| "is invalid".to_string());
                format!("{}: {}", field, detail)
            })
            .collect();
        fields.sort();
        Self::Validation(fields.join("; "))
    }
}

impl From<JsonError> for SharedError {
    fn from(error: JsonError) -> Self {
        Self::Conversion(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(401 ; "unauthorized")]
    #[test_case(403 ; "forbidden")]
    fn auth_statuses_map_to_unauthorized(status: u16) {
        assert!(ApiError::from_status(status, Some("nope".into())).is_unauthorized());
    }

    #[test]
    fn status_error_keeps_backend_message() {
        let err = ApiError::from_status(500, Some("database unavailable".into()));
        assert_eq!(
            err,
            ApiError::Status {
                status: 500,
                message: "database unavailable".to_string()
            }
        );
    }

    #[test]
    fn blank_backend_message_falls_back_to_status_text() {
        let err = ApiError::from_status(502, Some("   ".into()));
        assert_eq!(err.to_string(), "Request failed with status 502: HTTP 502");
    }

    #[test]
    fn error_body_prefers_error_over_message() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"error":"bad token","message":"ignored"}"#).unwrap();
        assert_eq!(body.into_message(), Some("bad token".to_string()));

        let body: ErrorBody = serde_json::from_str(r#"{"message":"not found"}"#).unwrap();
        assert_eq!(body.into_message(), Some("not found".to_string()));
    }
}
