//! Field validation for profile payloads.
//!
//! One set of per-field rules serves both the create and the update path, so
//! a partial update can never sneak a value past the checks a create would
//! fail. Validation happens before a request reaches the store; the store
//! only ever sees well-formed payloads.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::model::{ProfileCreate, ProfileUpdate};

/// Minimum allowed length for `full_name`, in characters.
pub const FULL_NAME_MIN: usize = 2;
/// Maximum allowed length for `full_name`, in characters.
pub const FULL_NAME_MAX: usize = 100;

static PHONE_RE: OnceLock<Regex> = OnceLock::new();
static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn phone_regex() -> &'static Regex {
    PHONE_RE.get_or_init(|| {
        // Optional leading `+`, optional country-code `1`, then 9-15 digits.
        let pattern = r"^\+?1?\d{9,15}$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("phone regex failed to compile: {error}"))
    })
}

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Local part, `@`, dotted domain. No whitespace anywhere.
        let pattern = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// A structured field that failed validation.
///
/// Maps to status 422 at the boundary; the displayed message becomes the
/// `detail` of the error body.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// `full_name` has fewer characters than allowed.
    #[error("full_name must be at least {min} characters")]
    FullNameTooShort { min: usize },
    /// `full_name` has more characters than allowed.
    #[error("full_name must be at most {max} characters")]
    FullNameTooLong { max: usize },
    /// `email` does not look like an email address.
    #[error("email must be a valid email address")]
    EmailFormat,
    /// `phone` does not match the international format.
    #[error("Phone number must be valid international format (e.g. +123456789)")]
    PhoneFormat,
}

/// Checks `full_name` against the character-count bounds.
pub fn full_name(value: &str) -> Result<(), ValidationError> {
    let length = value.chars().count();
    if length < FULL_NAME_MIN {
        return Err(ValidationError::FullNameTooShort { min: FULL_NAME_MIN });
    }
    if length > FULL_NAME_MAX {
        return Err(ValidationError::FullNameTooLong { max: FULL_NAME_MAX });
    }
    Ok(())
}

/// Checks `email` for basic address syntax.
pub fn email(value: &str) -> Result<(), ValidationError> {
    if email_regex().is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::EmailFormat)
    }
}

/// Checks an optional phone number against the international pattern.
///
/// An absent phone passes; the field is optional everywhere it appears.
pub fn phone(value: Option<&str>) -> Result<(), ValidationError> {
    match value {
        None => Ok(()),
        Some(raw) if phone_regex().is_match(raw) => Ok(()),
        Some(_) => Err(ValidationError::PhoneFormat),
    }
}

/// Validates a full create payload. `avatar_url` is accepted as-is.
pub fn create_payload(input: &ProfileCreate) -> Result<(), ValidationError> {
    full_name(&input.full_name)?;
    email(&input.email)?;
    phone(input.phone.as_deref())
}

/// Validates the fields present in a partial update.
///
/// Absent fields are not inspected: an update that omits `email` passes even
/// if the stored email would fail today's rules.
pub fn update_payload(update: &ProfileUpdate) -> Result<(), ValidationError> {
    if let Some(name) = &update.full_name {
        full_name(name)?;
    }
    if let Some(value) = &update.email {
        email(value)?;
    }
    phone(update.phone.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_accepts_international_formats() {
        for valid in [
            "+123456789",
            "123456789",
            "+1234567890123456",
            "1123456789012345",
            "+10123456789",
        ] {
            assert_eq!(phone(Some(valid)), Ok(()), "expected {valid} to pass");
        }
    }

    #[test]
    fn phone_rejects_short_and_malformed_numbers() {
        for invalid in [
            "12345",
            "+12345",
            "abc123456789",
            "12345678901234567890",
            "+12 345 678 901",
            "",
        ] {
            assert_eq!(
                phone(Some(invalid)),
                Err(ValidationError::PhoneFormat),
                "expected {invalid} to fail"
            );
        }
    }

    #[test]
    fn phone_is_optional() {
        assert_eq!(phone(None), Ok(()));
    }

    #[test]
    fn full_name_enforces_character_bounds() {
        assert_eq!(
            full_name("A"),
            Err(ValidationError::FullNameTooShort { min: FULL_NAME_MIN })
        );
        assert_eq!(full_name("Al"), Ok(()));
        assert_eq!(full_name(&"x".repeat(100)), Ok(()));
        assert_eq!(
            full_name(&"x".repeat(101)),
            Err(ValidationError::FullNameTooLong { max: FULL_NAME_MAX })
        );
    }

    #[test]
    fn full_name_counts_characters_not_bytes() {
        // Two multi-byte characters meet the two-character minimum.
        assert_eq!(full_name("Ωμ"), Ok(()));
    }

    #[test]
    fn email_requires_at_sign_and_dotted_domain() {
        assert_eq!(email("alice@example.com"), Ok(()));
        assert_eq!(email("a@b.co"), Ok(()));
        for invalid in ["alice", "alice@", "@example.com", "alice@example", "a b@c.d"] {
            assert_eq!(
                email(invalid),
                Err(ValidationError::EmailFormat),
                "expected {invalid} to fail"
            );
        }
    }

    #[test]
    fn update_payload_skips_absent_fields() {
        let update = ProfileUpdate::default();
        assert_eq!(update_payload(&update), Ok(()));

        let update = ProfileUpdate {
            phone: Some("12345".to_string()),
            ..Default::default()
        };
        assert_eq!(update_payload(&update), Err(ValidationError::PhoneFormat));
    }

    #[test]
    fn create_payload_checks_every_field() {
        let mut input = ProfileCreate {
            full_name: "Alice Example".to_string(),
            email: "alice@example.com".to_string(),
            phone: Some("+123456789".to_string()),
            avatar_url: Some("https://cdn.example.com/a.png".to_string()),
        };
        assert_eq!(create_payload(&input), Ok(()));

        input.email = "not-an-email".to_string();
        assert_eq!(create_payload(&input), Err(ValidationError::EmailFormat));
    }
}
