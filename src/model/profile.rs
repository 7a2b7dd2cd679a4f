use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a stored [`Profile`].
///
/// Numbering starts at 1 and only advances when a create commits, so a
/// rejected create never consumes an identity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ProfileId(pub u64);

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProfileId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// A stored user profile.
///
/// Snapshots of this struct are what callers get back; the authoritative
/// record lives inside the store actor and is only reachable through its
/// channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
}

impl Profile {
    /// Builds the stored record from a create payload and its assigned id.
    ///
    /// Unlike updates, a create applies `avatar_url` immediately; only
    /// updates route the avatar through deferred processing.
    pub fn from_create(id: ProfileId, input: ProfileCreate) -> Self {
        Self {
            id,
            full_name: input.full_name,
            email: input.email,
            phone: input.phone,
            avatar_url: input.avatar_url,
        }
    }
}

/// Payload for creating a new profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileCreate {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
}

/// Payload for partially updating an existing profile.
///
/// `None` means "leave this field alone", never "clear it". There is no way
/// to unset a field through an update; a payload field that is absent on the
/// wire deserializes to `None` and is skipped by the merge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
}
