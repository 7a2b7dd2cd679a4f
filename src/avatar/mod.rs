//! # Deferred Avatar Processing
//!
//! An update that carries `avatar_url` does not apply it synchronously. The
//! caller gets a response showing the old avatar, and the new value goes
//! onto a queue as an [`AvatarJob`]. The [`AvatarWorker`] consumes the queue
//! and, after a fixed delay, writes the avatar back through its own store
//! handle.
//!
//! ## Structure
//!
//! - [`scheduler`] - [`AvatarJob`] and the [`AvatarScheduler`] enqueue handle
//! - [`worker`] - [`AvatarWorker`], the queue consumer
//! - [`new()`] - factory wiring the queue between the two
//!
//! ## Guarantees
//!
//! - Exactly one job per avatar-carrying update; the job applies the avatar
//!   once or, if the record has vanished, not at all.
//! - Jobs are independent tasks; they don't serialize behind each other and
//!   the last write for a profile wins.
//! - Job failures are logged and swallowed. No request ever fails because a
//!   deferred avatar did.

pub mod scheduler;
pub mod worker;

pub use scheduler::{AvatarJob, AvatarScheduler};
pub use worker::{AvatarWorker, DEFAULT_DELAY};

use std::time::Duration;

use tokio::sync::mpsc;

use crate::store::StoreClient;

/// Capacity of the avatar job queue. Schedulers wait when it is full.
const QUEUE_CAPACITY: usize = 32;

/// Creates a new avatar worker and its scheduler handle.
///
/// The worker does nothing until [`AvatarWorker::run`] is spawned. `delay`
/// is how long each job sleeps before applying; production wiring passes
/// [`DEFAULT_DELAY`] and tests pass something shorter.
pub fn new(store: StoreClient, delay: Duration) -> (AvatarWorker, AvatarScheduler) {
    let (sender, receiver) = mpsc::channel(QUEUE_CAPACITY);
    (
        AvatarWorker::new(receiver, store, delay),
        AvatarScheduler::new(sender),
    )
}
