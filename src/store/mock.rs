//! Test doubles for the store.
//!
//! # Testing Strategy
//! Tests of client-side logic don't need a running
//! [`ProfileStore`](crate::store::ProfileStore); they need control over what
//! the store answers. [`mock_store`] hands out a
//! [`StoreClient`] whose requests land on a channel the test owns. The test
//! inspects each request with the `expect_*` helpers and answers through the
//! enclosed one-shot sender, simulating success, failure, or a vanished
//! record deterministically.

use tokio::sync::mpsc;

use crate::model::{Profile, ProfileCreate, ProfileId, ProfileUpdate};
use crate::store::client::StoreClient;
use crate::store::merge::UpdateOutcome;
use crate::store::message::{Response, StoreRequest};

/// Creates a mock store client and the receiver for asserting requests.
pub fn mock_store(buffer_size: usize) -> (StoreClient, mpsc::Receiver<StoreRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Receives the next request and unpacks it as a Create.
pub async fn expect_create(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<(ProfileCreate, Response<Profile>)> {
    match receiver.recv().await {
        Some(StoreRequest::Create { input, respond_to }) => Some((input, respond_to)),
        _ => None,
    }
}

/// Receives the next request and unpacks it as a Get.
pub async fn expect_get(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<(ProfileId, Response<Option<Profile>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Receives the next request and unpacks it as an Update.
pub async fn expect_update(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<(ProfileId, ProfileUpdate, Response<UpdateOutcome>)> {
    match receiver.recv().await {
        Some(StoreRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}

/// Receives the next request and unpacks it as an ApplyAvatar.
pub async fn expect_apply_avatar(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<(ProfileId, String, Response<bool>)> {
    match receiver.recv().await {
        Some(StoreRequest::ApplyAvatar {
            id,
            avatar_url,
            respond_to,
        }) => Some((id, avatar_url, respond_to)),
        _ => None,
    }
}
