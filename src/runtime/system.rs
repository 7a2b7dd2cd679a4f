//! Wiring and lifecycle of the running service.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::avatar::{self, DEFAULT_DELAY};
use crate::clients::ProfileClient;
use crate::store::ProfileStore;

/// The running profile service: store actor, avatar worker, and the client
/// that reaches both.
///
/// # Architecture
///
/// [`ProfileSystem::new`] starts two tasks and wires three handles:
///
/// - the store actor owns all records and serves requests sequentially
/// - the avatar worker consumes the deferred-mutation queue and writes
///   avatars back through its own store handle
/// - the [`ProfileClient`] holds the store handle and the scheduler handle,
///   validating payloads and enqueueing deferred work after commits
///
/// The handle graph is acyclic, which is what makes channel-closure
/// shutdown work: dropping the client closes the store and job channels,
/// the worker drains whatever is still sleeping (its store handle keeps the
/// store alive until those writes land), and then both tasks exit.
pub struct ProfileSystem {
    /// Client for profile operations.
    pub client: ProfileClient,

    /// Task handles for the store and the worker, awaited on shutdown.
    handles: Vec<JoinHandle<()>>,
}

impl ProfileSystem {
    /// Starts the system with the standard avatar delay.
    pub fn new() -> Self {
        Self::with_avatar_delay(DEFAULT_DELAY)
    }

    /// Starts the system with a custom avatar delay. Tests shorten it to
    /// keep deferred-mutation assertions fast.
    pub fn with_avatar_delay(delay: Duration) -> Self {
        let (store, store_client) = ProfileStore::new();
        let (worker, scheduler) = avatar::new(store_client.clone(), delay);

        let store_handle = tokio::spawn(store.run());
        let worker_handle = tokio::spawn(worker.run());

        Self {
            client: ProfileClient::new(store_client, scheduler),
            handles: vec![store_handle, worker_handle],
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Drops the client to close every channel, then waits for the store
    /// and the worker to finish. Deferred avatar jobs accepted before the
    /// drop still run to completion.
    ///
    /// Returns `Err` if either task panicked instead of exiting cleanly.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down profile system...");

        drop(self.client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Task failed: {:?}", e);
                return Err(format!("Task failed: {:?}", e));
            }
        }

        info!("Profile system shutdown complete.");
        Ok(())
    }
}

impl Default for ProfileSystem {
    fn default() -> Self {
        Self::new()
    }
}
