//! Request messages for the profile store actor.
//!
//! Every operation on profile state travels through [`StoreRequest`]. The
//! actor answers each request over the enclosed one-shot channel, so callers
//! get an explicit `Result` instead of a shared-memory view of the store.

use tokio::sync::oneshot;

use crate::model::{Profile, ProfileCreate, ProfileId, ProfileUpdate};
use crate::store::error::ProfileError;
use crate::store::merge::UpdateOutcome;

/// Type alias for the one-shot response channel used by the store.
pub type Response<T> = oneshot::Sender<Result<T, ProfileError>>;

/// Messages accepted by [`ProfileStore`](crate::store::ProfileStore).
///
/// Because the actor handles one request at a time, the uniqueness scan in
/// `Create`/`Update` and the commit it guards are a single atomic step; no
/// interleaving request can observe the gap between them.
#[derive(Debug)]
pub enum StoreRequest {
    /// Insert a new profile under a fresh id.
    Create {
        input: ProfileCreate,
        respond_to: Response<Profile>,
    },
    /// Fetch a snapshot of one profile.
    Get {
        id: ProfileId,
        respond_to: Response<Option<Profile>>,
    },
    /// Merge a partial update into an existing profile.
    Update {
        id: ProfileId,
        update: ProfileUpdate,
        respond_to: Response<UpdateOutcome>,
    },
    /// Deferred write-back of `avatar_url` only. Responds `Ok(false)` when
    /// the record no longer exists, which callers treat as a no-op.
    ApplyAvatar {
        id: ProfileId,
        avatar_url: String,
        respond_to: Response<bool>,
    },
}
