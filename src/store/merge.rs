//! Merge of a partial update into an existing record.
//!
//! The merge is pure: it looks at the current record and the update payload
//! and produces the record to commit plus whatever work must happen later.
//! `avatar_url` is the one field that is never applied here. The committed
//! record keeps the old avatar and the payload value travels back as
//! deferred work for the avatar queue.

use crate::model::{Profile, ProfileUpdate};

/// What an update produced.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateOutcome {
    /// The committed record. `avatar_url` always holds the pre-update value.
    pub profile: Profile,
    /// Avatar from the payload, to be applied out-of-band after the delay.
    pub deferred_avatar: Option<String>,
}

/// Merges `update` into a copy of `current`.
///
/// Absent fields leave the current value untouched; present fields replace
/// it. The clone of `current` is what carries `avatar_url` forward
/// unchanged.
pub fn apply(current: &Profile, update: ProfileUpdate) -> UpdateOutcome {
    let mut profile = current.clone();
    if let Some(full_name) = update.full_name {
        profile.full_name = full_name;
    }
    if let Some(email) = update.email {
        profile.email = email;
    }
    if let Some(phone) = update.phone {
        profile.phone = Some(phone);
    }
    UpdateOutcome {
        profile,
        deferred_avatar: update.avatar_url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProfileId;

    fn existing() -> Profile {
        Profile {
            id: ProfileId(1),
            full_name: "Alice Example".to_string(),
            email: "alice@example.com".to_string(),
            phone: Some("+123456789".to_string()),
            avatar_url: Some("https://cdn.example.com/old.png".to_string()),
        }
    }

    #[test]
    fn empty_update_changes_nothing_and_defers_nothing() {
        let current = existing();
        let outcome = apply(&current, ProfileUpdate::default());
        assert_eq!(outcome.profile, current);
        assert_eq!(outcome.deferred_avatar, None);
    }

    #[test]
    fn present_fields_replace_current_values() {
        let current = existing();
        let outcome = apply(
            &current,
            ProfileUpdate {
                full_name: Some("Alice Cooper".to_string()),
                phone: Some("+987654321".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(outcome.profile.full_name, "Alice Cooper");
        assert_eq!(outcome.profile.phone.as_deref(), Some("+987654321"));
        // Untouched fields carry forward.
        assert_eq!(outcome.profile.email, current.email);
        assert_eq!(outcome.profile.avatar_url, current.avatar_url);
    }

    #[test]
    fn avatar_is_deferred_never_committed() {
        let current = existing();
        let outcome = apply(
            &current,
            ProfileUpdate {
                avatar_url: Some("https://cdn.example.com/new.png".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(
            outcome.profile.avatar_url.as_deref(),
            Some("https://cdn.example.com/old.png")
        );
        assert_eq!(
            outcome.deferred_avatar.as_deref(),
            Some("https://cdn.example.com/new.png")
        );
    }
}
