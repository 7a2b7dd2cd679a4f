//! Raw async client for the store actor.

use tokio::sync::{mpsc, oneshot};

use crate::model::{Profile, ProfileCreate, ProfileId, ProfileUpdate};
use crate::store::error::ProfileError;
use crate::store::merge::UpdateOutcome;
use crate::store::message::StoreRequest;

/// Handle for sending requests to the store actor.
///
/// Holds only the channel sender, so cloning is cheap and every clone
/// reaches the same single-writer store. This is the raw transport layer:
/// no validation happens here, and `Get` reports a missing record as
/// `Ok(None)`. Callers wanting the validated domain API should go through
/// [`ProfileClient`](crate::clients::ProfileClient).
#[derive(Clone)]
pub struct StoreClient {
    sender: mpsc::Sender<StoreRequest>,
}

impl StoreClient {
    pub fn new(sender: mpsc::Sender<StoreRequest>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, input: ProfileCreate) -> Result<Profile, ProfileError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Create { input, respond_to })
            .await
            .map_err(|_| ProfileError::StoreClosed("store task stopped".to_string()))?;
        response
            .await
            .map_err(|_| ProfileError::StoreClosed("store dropped the response".to_string()))?
    }

    pub async fn get(&self, id: ProfileId) -> Result<Option<Profile>, ProfileError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Get { id, respond_to })
            .await
            .map_err(|_| ProfileError::StoreClosed("store task stopped".to_string()))?;
        response
            .await
            .map_err(|_| ProfileError::StoreClosed("store dropped the response".to_string()))?
    }

    pub async fn update(
        &self,
        id: ProfileId,
        update: ProfileUpdate,
    ) -> Result<UpdateOutcome, ProfileError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Update {
                id,
                update,
                respond_to,
            })
            .await
            .map_err(|_| ProfileError::StoreClosed("store task stopped".to_string()))?;
        response
            .await
            .map_err(|_| ProfileError::StoreClosed("store dropped the response".to_string()))?
    }

    /// Deferred write-back used by the avatar worker. `Ok(false)` means the
    /// record no longer existed and nothing was written.
    pub async fn apply_avatar(
        &self,
        id: ProfileId,
        avatar_url: String,
    ) -> Result<bool, ProfileError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::ApplyAvatar {
                id,
                avatar_url,
                respond_to,
            })
            .await
            .map_err(|_| ProfileError::StoreClosed("store task stopped".to_string()))?;
        response
            .await
            .map_err(|_| ProfileError::StoreClosed("store dropped the response".to_string()))?
    }
}
