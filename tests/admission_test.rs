//! Integration tests for pool admission invariants.
//!
//! These validate:
//! 1. The capacity invariant: never more holders than rooms, even under a
//!    stress batch far larger than the pool
//! 2. Release conservation: every acquire is matched by exactly one release
//!    and the pool returns to full availability after the join barrier
//! 3. Release on abnormal exits: a holder that panics or is aborted
//!    mid-occupancy still returns its room, exactly once
//! 4. Blocking admission: an acquirer suspends while the pool is full and
//!    proceeds once a room frees
//!
//! No test here assumes FIFO admission order; the pool makes no ordering
//! guarantee among waiters.

use std::sync::Arc;
use std::time::Duration;

use fitting_rooms::config::ScenarioConfig;
use fitting_rooms::core::{FixedWorkload, InMemoryEventSink, RoomPool, ScenarioRunner};

fn zero_hold() -> FixedWorkload {
    FixedWorkload {
        item_count: 1,
        hold_per_item: Duration::ZERO,
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn capacity_invariant_under_stress() {
    // 50 zero-hold customers hammering a 2-room pool on a multi-threaded
    // runtime. The observed high-water mark must never exceed capacity.
    let config = ScenarioConfig {
        room_count: 2,
        customer_count: 50,
    };
    let runner = ScenarioRunner::new(
        config,
        Arc::new(zero_hold()),
        Box::new(InMemoryEventSink::new(256)),
    )
    .expect("valid configuration");

    runner.run().await.expect("scenario completes");

    let pool = runner.pool();
    assert!(pool.peak_active() <= 2, "peak {} > capacity", pool.peak_active());
    assert!(pool.peak_active() >= 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn releases_conserve_acquires() {
    let config = ScenarioConfig {
        room_count: 3,
        customer_count: 40,
    };
    let runner = ScenarioRunner::new(
        config,
        Arc::new(zero_hold()),
        Box::new(InMemoryEventSink::new(256)),
    )
    .expect("valid configuration");

    runner.run().await.expect("scenario completes");

    let pool = runner.pool();
    assert_eq!(pool.acquire_count(), 40);
    assert_eq!(pool.acquire_count(), pool.release_count());
    assert_eq!(pool.available(), 3);
    assert_eq!(pool.active(), 0);
}

#[tokio::test(start_paused = true)]
async fn panicking_holder_still_releases() {
    // A holder that panics mid-occupancy must still give its room back:
    // the permit guard drops during unwind.
    let pool = Arc::new(RoomPool::new(1).expect("valid capacity"));
    let holder = {
        let pool = Arc::clone(&pool);
        tokio::spawn(async move {
            let _permit = pool.acquire().await.expect("room free");
            tokio::time::sleep(Duration::from_secs(1)).await;
            panic!("holder failed mid-occupancy");
        })
    };

    assert!(holder.await.is_err(), "holder task should have panicked");
    assert_eq!(pool.available(), 1);
    assert_eq!(pool.active(), 0);
    assert_eq!(pool.acquire_count(), 1);
    assert_eq!(pool.acquire_count(), pool.release_count());

    // The pool stays usable after the abnormal exit.
    let permit = pool.acquire().await.expect("room free again");
    drop(permit);
    assert_eq!(pool.available(), 1);
}

#[tokio::test(start_paused = true)]
async fn aborted_holder_still_releases() {
    let pool = Arc::new(RoomPool::new(1).expect("valid capacity"));
    let holder = {
        let pool = Arc::clone(&pool);
        tokio::spawn(async move {
            let _permit = pool.acquire().await.expect("room free");
            tokio::time::sleep(Duration::from_secs(3600)).await;
        })
    };

    // Let the holder reach its hold phase before cancelling it.
    tokio::time::sleep(Duration::from_secs(1)).await;
    assert_eq!(pool.available(), 0);

    holder.abort();
    let joined = holder.await;
    assert!(joined.expect_err("task was aborted").is_cancelled());
    assert_eq!(pool.available(), 1);
    assert_eq!(pool.active(), 0);
    assert_eq!(pool.acquire_count(), pool.release_count());
}

#[tokio::test(start_paused = true)]
async fn waiter_suspends_until_a_room_frees() {
    let pool = Arc::new(RoomPool::new(2).expect("valid capacity"));
    let first = pool.acquire().await.expect("room free");
    let second = pool.acquire().await.expect("room free");
    assert_eq!(pool.available(), 0);

    let waiter = {
        let pool = Arc::clone(&pool);
        tokio::spawn(async move {
            let permit = pool.acquire().await.expect("eventually admitted");
            drop(permit);
        })
    };

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert!(!waiter.is_finished(), "waiter admitted while pool was full");

    drop(first);
    waiter.await.expect("waiter completes");

    drop(second);
    assert_eq!(pool.available(), 2);
    assert_eq!(pool.acquire_count(), 3);
    assert_eq!(pool.release_count(), 3);
}
