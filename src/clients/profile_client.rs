//! # Profile Client
//!
//! The validated domain API for profiles. It wraps the raw [`StoreClient`]
//! and the [`AvatarScheduler`]: every payload passes the field validator
//! before it reaches the store, and an update that carries `avatar_url`
//! hands the value to the scheduler only after the store has committed and
//! responded. The caller therefore always sees the pre-update avatar in the
//! response, and the deferred write never races the commit it follows.

use tracing::{debug, instrument};

use crate::avatar::AvatarScheduler;
use crate::model::{Profile, ProfileCreate, ProfileId, ProfileUpdate};
use crate::store::{ProfileError, StoreClient};
use crate::validation;

/// Client for profile operations.
#[derive(Clone)]
pub struct ProfileClient {
    store: StoreClient,
    scheduler: AvatarScheduler,
}

impl ProfileClient {
    pub fn new(store: StoreClient, scheduler: AvatarScheduler) -> Self {
        Self { store, scheduler }
    }

    /// Validates and stores a new profile, returning the full record.
    ///
    /// Unlike updates, `avatar_url` on a create is stored immediately.
    #[instrument(skip(self))]
    pub async fn create_profile(&self, input: ProfileCreate) -> Result<Profile, ProfileError> {
        validation::create_payload(&input)?;
        debug!("Sending request");
        self.store.create(input).await
    }

    /// Returns a snapshot of the profile.
    #[instrument(skip(self))]
    pub async fn get_profile(&self, id: ProfileId) -> Result<Profile, ProfileError> {
        debug!("Sending request");
        self.store
            .get(id)
            .await?
            .ok_or(ProfileError::NotFound(id))
    }

    /// Applies a partial update and returns the committed record.
    ///
    /// The returned record reflects every synchronous field change but still
    /// shows the pre-update `avatar_url`; a payload avatar is scheduled for
    /// deferred processing once the commit has come back. Reading the
    /// profile again after roughly the worker delay shows the new avatar.
    #[instrument(skip(self))]
    pub async fn update_profile(
        &self,
        id: ProfileId,
        update: ProfileUpdate,
    ) -> Result<Profile, ProfileError> {
        validation::update_payload(&update)?;
        debug!("Sending request");
        let outcome = self.store.update(id, update).await?;
        if let Some(avatar_url) = outcome.deferred_avatar {
            self.scheduler.schedule(id, avatar_url).await;
        }
        Ok(outcome.profile)
    }
}
