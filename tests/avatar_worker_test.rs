//! Avatar worker tests against a mocked store.
//!
//! The mock store stands in for the real actor so these tests can observe
//! exactly what the worker writes and when, and can simulate a vanished
//! record or a failing store without racing real state.

use std::time::{Duration, Instant};

use profile_service::avatar;
use profile_service::model::ProfileId;
use profile_service::store::mock::{expect_apply_avatar, mock_store};
use tokio::sync::mpsc::error::TryRecvError;

const DELAY: Duration = Duration::from_millis(50);

#[tokio::test]
async fn job_applies_once_after_the_delay() {
    let (store_client, mut store_rx) = mock_store(10);
    let (worker, scheduler) = avatar::new(store_client, DELAY);
    let worker_handle = tokio::spawn(worker.run());

    let started = Instant::now();
    scheduler
        .schedule(ProfileId(1), "https://cdn.example.com/a.png".to_string())
        .await;

    let (id, avatar_url, responder) = expect_apply_avatar(&mut store_rx)
        .await
        .expect("Expected an ApplyAvatar request");
    assert!(
        started.elapsed() >= DELAY,
        "The write must not happen before the delay"
    );
    assert_eq!(id, ProfileId(1));
    assert_eq!(avatar_url, "https://cdn.example.com/a.png");
    responder.send(Ok(true)).unwrap();

    // One job, one write.
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(matches!(store_rx.try_recv(), Err(TryRecvError::Empty)));

    drop(scheduler);
    worker_handle.await.unwrap();
}

#[tokio::test]
async fn vanished_record_is_swallowed_and_worker_keeps_going() {
    let (store_client, mut store_rx) = mock_store(10);
    let (worker, scheduler) = avatar::new(store_client, DELAY);
    let worker_handle = tokio::spawn(worker.run());

    scheduler
        .schedule(ProfileId(7), "https://cdn.example.com/gone.png".to_string())
        .await;
    let (_, _, responder) = expect_apply_avatar(&mut store_rx).await.unwrap();
    // The record no longer exists; the worker logs and moves on.
    responder.send(Ok(false)).unwrap();

    // The next job is unaffected.
    scheduler
        .schedule(ProfileId(8), "https://cdn.example.com/next.png".to_string())
        .await;
    let (id, _, responder) = expect_apply_avatar(&mut store_rx).await.unwrap();
    assert_eq!(id, ProfileId(8));
    responder.send(Ok(true)).unwrap();

    drop(scheduler);
    worker_handle.await.unwrap();
}

/// Two jobs scheduled back-to-back sleep in parallel, so the second write
/// arrives right after the first instead of one full delay later.
#[tokio::test]
async fn jobs_do_not_serialize_behind_each_other() {
    let delay = Duration::from_millis(100);
    let (store_client, mut store_rx) = mock_store(10);
    let (worker, scheduler) = avatar::new(store_client, delay);
    let worker_handle = tokio::spawn(worker.run());

    let started = Instant::now();
    scheduler
        .schedule(ProfileId(1), "https://cdn.example.com/1.png".to_string())
        .await;
    scheduler
        .schedule(ProfileId(2), "https://cdn.example.com/2.png".to_string())
        .await;

    let (_, _, responder) = expect_apply_avatar(&mut store_rx).await.unwrap();
    responder.send(Ok(true)).unwrap();
    let (_, _, responder) = expect_apply_avatar(&mut store_rx).await.unwrap();
    responder.send(Ok(true)).unwrap();

    let elapsed = started.elapsed();
    assert!(
        elapsed < delay * 2,
        "Jobs serialized: both writes took {elapsed:?}"
    );

    drop(scheduler);
    worker_handle.await.unwrap();
}

/// Dropping the scheduler while a job is still sleeping: the worker drains
/// it to completion before exiting.
#[tokio::test]
async fn pending_jobs_survive_queue_closure() {
    let (store_client, mut store_rx) = mock_store(10);
    let (worker, scheduler) = avatar::new(store_client, DELAY);
    let worker_handle = tokio::spawn(worker.run());

    scheduler
        .schedule(ProfileId(3), "https://cdn.example.com/late.png".to_string())
        .await;
    drop(scheduler);

    let (id, avatar_url, responder) = expect_apply_avatar(&mut store_rx)
        .await
        .expect("The drained job must still write its avatar");
    assert_eq!(id, ProfileId(3));
    assert_eq!(avatar_url, "https://cdn.example.com/late.png");
    responder.send(Ok(true)).unwrap();

    worker_handle.await.unwrap();
}
