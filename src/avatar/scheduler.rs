//! Job type and enqueue handle for deferred avatar processing.

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::model::ProfileId;

/// A deferred avatar mutation: once the processing delay has passed, write
/// `avatar_url` onto the profile identified by `profile_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct AvatarJob {
    pub profile_id: ProfileId,
    pub avatar_url: String,
}

/// Handle for enqueueing jobs onto the avatar queue.
///
/// Scheduling is fire-and-forget: the request that triggered the job
/// neither waits for nor learns about its outcome. If the queue is already
/// closed because the worker shut down, the job is logged and dropped
/// rather than surfaced to the caller.
#[derive(Clone)]
pub struct AvatarScheduler {
    sender: mpsc::Sender<AvatarJob>,
}

impl AvatarScheduler {
    pub fn new(sender: mpsc::Sender<AvatarJob>) -> Self {
        Self { sender }
    }

    /// Enqueues a deferred avatar mutation for `profile_id`.
    pub async fn schedule(&self, profile_id: ProfileId, avatar_url: String) {
        debug!(%profile_id, "Scheduling avatar job");
        let job = AvatarJob {
            profile_id,
            avatar_url,
        };
        if self.sender.send(job).await.is_err() {
            warn!(%profile_id, "Avatar queue closed, job dropped");
        }
    }
}
