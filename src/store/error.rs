//! Error types for profile operations.

use serde::Serialize;
use thiserror::Error;

use crate::model::ProfileId;
use crate::validation::ValidationError;

/// Errors returned by profile operations.
///
/// Each variant carries the context needed to build the wire-level
/// [`ErrorBody`]; [`ProfileError::status_code`] supplies the HTTP-equivalent
/// code for the boundary layer.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProfileError {
    /// No profile exists under this id.
    #[error("Profile not found")]
    NotFound(ProfileId),

    /// Another live profile already holds this email.
    #[error("A profile with this email already exists.")]
    EmailExists(String),

    /// A structured field failed validation before reaching the store.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The store task is gone and can no longer serve requests.
    #[error("profile store unavailable: {0}")]
    StoreClosed(String),
}

impl ProfileError {
    /// HTTP-equivalent status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            ProfileError::NotFound(_) => 404,
            ProfileError::EmailExists(_) => 400,
            ProfileError::Validation(_) => 422,
            ProfileError::StoreClosed(_) => 500,
        }
    }
}

/// Wire shape of a non-success response: `{detail, code}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    pub detail: String,
    pub code: u16,
}

impl From<&ProfileError> for ErrorBody {
    fn from(error: &ProfileError) -> Self {
        Self {
            detail: error.to_string(),
            code: error.status_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_the_error_taxonomy() {
        assert_eq!(ProfileError::NotFound(ProfileId(7)).status_code(), 404);
        assert_eq!(
            ProfileError::EmailExists("a@b.co".to_string()).status_code(),
            400
        );
        assert_eq!(
            ProfileError::Validation(ValidationError::PhoneFormat).status_code(),
            422
        );
        assert_eq!(
            ProfileError::StoreClosed("gone".to_string()).status_code(),
            500
        );
    }

    #[test]
    fn error_body_carries_detail_and_code() {
        let error = ProfileError::EmailExists("alice@example.com".to_string());
        let body = ErrorBody::from(&error);

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["detail"], "A profile with this email already exists.");
        assert_eq!(value["code"], 400);
    }

    #[test]
    fn validation_detail_uses_the_field_message() {
        let error = ProfileError::from(ValidationError::PhoneFormat);
        let body = ErrorBody::from(&error);
        assert_eq!(
            body.detail,
            "Phone number must be valid international format (e.g. +123456789)"
        );
        assert_eq!(body.code, 422);
    }
}
