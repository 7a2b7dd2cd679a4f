//! Queue consumer applying deferred avatar mutations.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio::time;
use tracing::{debug, info, warn};

use crate::avatar::scheduler::AvatarJob;
use crate::store::StoreClient;

/// Delay before a scheduled avatar lands in the store, standing in for
/// external processing such as resizing or a CDN upload.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(200);

/// Worker consuming [`AvatarJob`]s from the queue.
///
/// Each job runs as its own task: sleep for the configured delay, then write
/// the avatar through the store client. Jobs never coordinate with each
/// other, so two jobs for the same profile land in whatever order their
/// delays expire and the later write wins. Failures are contained here:
/// a vanished record or a closed store gets a log line, and nothing
/// propagates back to any request.
pub struct AvatarWorker {
    receiver: mpsc::Receiver<AvatarJob>,
    store: StoreClient,
    delay: Duration,
    tasks: JoinSet<()>,
}

impl AvatarWorker {
    pub fn new(receiver: mpsc::Receiver<AvatarJob>, store: StoreClient, delay: Duration) -> Self {
        Self {
            receiver,
            store,
            delay,
            tasks: JoinSet::new(),
        }
    }

    /// Runs until every scheduler handle is dropped, then drains the jobs
    /// still sleeping so an accepted job is never lost to shutdown.
    pub async fn run(mut self) {
        info!(delay = ?self.delay, "Avatar worker started");

        loop {
            tokio::select! {
                job = self.receiver.recv() => match job {
                    Some(job) => self.launch(job),
                    None => break,
                },
                // An empty set yields `None` here, which just disables this
                // branch until a job is launched.
                Some(result) = self.tasks.join_next() => {
                    if let Err(e) = result {
                        warn!(error = %e, "Avatar task panicked");
                    }
                }
            }
        }

        while let Some(result) = self.tasks.join_next().await {
            if let Err(e) = result {
                warn!(error = %e, "Avatar task panicked");
            }
        }

        info!("Avatar worker shutdown");
    }

    /// Spawns the delayed apply for one job.
    fn launch(&mut self, job: AvatarJob) {
        let store = self.store.clone();
        let delay = self.delay;
        self.tasks.spawn(async move {
            let AvatarJob {
                profile_id,
                avatar_url,
            } = job;
            time::sleep(delay).await;
            match store.apply_avatar(profile_id, avatar_url).await {
                Ok(true) => debug!(id = %profile_id, "Avatar applied"),
                Ok(false) => warn!(id = %profile_id, "Profile vanished before avatar applied"),
                Err(e) => warn!(id = %profile_id, error = %e, "Avatar apply failed"),
            }
        });
    }
}
