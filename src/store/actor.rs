//! The single-writer store actor.
//!
//! [`ProfileStore`] owns the profile map and the id counter outright; the
//! only way in is the request channel. It processes one message at a time in
//! a loop, which means we don't need a `Mutex` or `RwLock` around the map:
//! the email uniqueness scan and the insert it protects always run
//! back-to-back with nothing interleaved.

use std::collections::HashMap;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::model::{Profile, ProfileCreate, ProfileId, ProfileUpdate};
use crate::store::client::StoreClient;
use crate::store::error::ProfileError;
use crate::store::merge::{self, UpdateOutcome};
use crate::store::message::StoreRequest;

/// Capacity of the store's request channel. Senders wait when it is full.
const CHANNEL_CAPACITY: usize = 32;

/// The store actor: exclusive owner of every profile record.
pub struct ProfileStore {
    receiver: mpsc::Receiver<StoreRequest>,
    profiles: HashMap<ProfileId, Profile>,
    next_id: u64,
}

impl ProfileStore {
    /// Creates the store and the client handle that talks to it.
    ///
    /// The store does nothing until [`run`](Self::run) is spawned; the
    /// client can be cloned freely and every clone reaches the same store.
    pub fn new() -> (Self, StoreClient) {
        let (sender, receiver) = mpsc::channel(CHANNEL_CAPACITY);
        let store = Self {
            receiver,
            profiles: HashMap::new(),
            next_id: 1,
        };
        (store, StoreClient::new(sender))
    }

    /// Runs the request loop until every client handle is dropped.
    pub async fn run(mut self) {
        info!("Profile store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Create { input, respond_to } => {
                    debug!(?input, "Create");
                    let result = self.create(input);
                    match &result {
                        Ok(profile) => {
                            info!(id = %profile.id, size = self.profiles.len(), "Created");
                        }
                        Err(e) => warn!(error = %e, "Create rejected"),
                    }
                    let _ = respond_to.send(result);
                }
                StoreRequest::Get { id, respond_to } => {
                    let profile = self.profiles.get(&id).cloned();
                    debug!(%id, found = profile.is_some(), "Get");
                    let _ = respond_to.send(Ok(profile));
                }
                StoreRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(%id, ?update, "Update");
                    let result = self.update(id, update);
                    match &result {
                        Ok(outcome) => {
                            info!(%id, deferred = outcome.deferred_avatar.is_some(), "Updated");
                        }
                        Err(e) => warn!(%id, error = %e, "Update rejected"),
                    }
                    let _ = respond_to.send(result);
                }
                StoreRequest::ApplyAvatar {
                    id,
                    avatar_url,
                    respond_to,
                } => {
                    let applied = self.apply_avatar(id, avatar_url);
                    if applied {
                        info!(%id, "Avatar applied");
                    } else {
                        debug!(%id, "Avatar dropped, profile gone");
                    }
                    let _ = respond_to.send(Ok(applied));
                }
            }
        }

        info!(size = self.profiles.len(), "Profile store shutdown");
    }

    /// Scans live emails, then inserts under a fresh id.
    ///
    /// The counter only advances on success, so a rejected create never
    /// consumes an identity.
    fn create(&mut self, input: ProfileCreate) -> Result<Profile, ProfileError> {
        if self.email_in_use(&input.email, None) {
            return Err(ProfileError::EmailExists(input.email));
        }
        let id = ProfileId(self.next_id);
        self.next_id += 1;
        let profile = Profile::from_create(id, input);
        self.profiles.insert(id, profile.clone());
        Ok(profile)
    }

    /// Checks uniqueness for an email change, merges, and commits.
    ///
    /// A failed check leaves the record exactly as it was; the merge only
    /// runs once every precondition has passed.
    fn update(&mut self, id: ProfileId, update: ProfileUpdate) -> Result<UpdateOutcome, ProfileError> {
        let current = self
            .profiles
            .get(&id)
            .ok_or(ProfileError::NotFound(id))?;
        if let Some(email) = &update.email {
            if email != &current.email && self.email_in_use(email, Some(id)) {
                return Err(ProfileError::EmailExists(email.clone()));
            }
        }
        let outcome = merge::apply(current, update);
        self.profiles.insert(id, outcome.profile.clone());
        Ok(outcome)
    }

    /// Overwrites `avatar_url` and nothing else. Returns whether the record
    /// still existed.
    fn apply_avatar(&mut self, id: ProfileId, avatar_url: String) -> bool {
        match self.profiles.get_mut(&id) {
            Some(profile) => {
                profile.avatar_url = Some(avatar_url);
                true
            }
            None => false,
        }
    }

    /// True when any record other than `exclude` holds `email`.
    /// Comparison is byte-exact; addresses differing only in case count as
    /// distinct.
    fn email_in_use(&self, email: &str, exclude: Option<ProfileId>) -> bool {
        self.profiles
            .values()
            .any(|p| Some(p.id) != exclude && p.email == email)
    }
}
