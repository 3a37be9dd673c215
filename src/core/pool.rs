//! Bounded counting room pool with blocking admission.
//!
//! The pool enforces that at most `capacity` customers hold a room at any
//! instant. Admission is a suspension point with no timeout; the order in
//! which blocked acquirers are admitted when a room frees is unspecified.

use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::{OwnedSemaphorePermit, Semaphore};

use crate::core::SimError;

/// Bounded pool of identical, mutually exclusive rooms.
///
/// Built on a counting semaphore for admission, with lock-free atomic
/// counters tracking occupancy for invariant checks and reporting. The pool
/// is created once per scenario and shared across customer tasks behind an
/// [`Arc`].
pub struct RoomPool {
    capacity: u32,
    rooms: Arc<Semaphore>,
    /// Number of rooms currently held. Never exceeds `capacity`.
    active: AtomicU32,
    /// High-water mark of `active` over the pool's lifetime.
    peak_active: AtomicU32,
    acquired: AtomicU64,
    released: AtomicU64,
}

impl RoomPool {
    /// Create a pool with the given capacity.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] if `capacity` is zero; a zero-capacity
    /// pool would deadlock every acquirer and is rejected before any task
    /// can be launched against it.
    pub fn new(capacity: u32) -> Result<Self, SimError> {
        if capacity == 0 {
            return Err(SimError::Config("room capacity must be at least 1".into()));
        }
        Ok(Self {
            capacity,
            rooms: Arc::new(Semaphore::new(capacity as usize)),
            active: AtomicU32::new(0),
            peak_active: AtomicU32::new(0),
            acquired: AtomicU64::new(0),
            released: AtomicU64::new(0),
        })
    }

    /// Acquire one room, suspending until one is available.
    ///
    /// There is no timeout: a caller waits indefinitely for a free room.
    /// The returned [`RoomPermit`] releases the room when dropped, so the
    /// release happens on every exit path of the held section.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::PoolClosed`] if the underlying semaphore was
    /// closed. The pool never closes its semaphore, so this is unreachable
    /// in normal operation.
    pub async fn acquire(self: &Arc<Self>) -> Result<RoomPermit, SimError> {
        let permit = Arc::clone(&self.rooms)
            .acquire_owned()
            .await
            .map_err(|_| SimError::PoolClosed)?;

        let now_active = self.active.fetch_add(1, Ordering::AcqRel) + 1;
        self.peak_active.fetch_max(now_active, Ordering::AcqRel);
        self.acquired.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(active = now_active, "room acquired");

        Ok(RoomPermit {
            pool: Arc::clone(self),
            _permit: permit,
        })
    }

    /// Fixed capacity this pool was constructed with.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Number of rooms currently free.
    pub fn available(&self) -> usize {
        self.rooms.available_permits()
    }

    /// Number of rooms currently held.
    pub fn active(&self) -> u32 {
        self.active.load(Ordering::Acquire)
    }

    /// Maximum number of rooms observed held at once.
    pub fn peak_active(&self) -> u32 {
        self.peak_active.load(Ordering::Acquire)
    }

    /// Total successful acquisitions over the pool's lifetime.
    pub fn acquire_count(&self) -> u64 {
        self.acquired.load(Ordering::Relaxed)
    }

    /// Total releases over the pool's lifetime.
    pub fn release_count(&self) -> u64 {
        self.released.load(Ordering::Relaxed)
    }
}

impl std::fmt::Debug for RoomPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoomPool")
            .field("capacity", &self.capacity)
            .field("active", &self.active())
            .field("peak_active", &self.peak_active())
            .finish()
    }
}

/// Exclusive hold on one room, released on drop.
///
/// Holding the permit as a guard across the occupancy section guarantees
/// exactly one release per successful acquire, including on error returns,
/// panic unwinds, and task aborts.
pub struct RoomPermit {
    pool: Arc<RoomPool>,
    _permit: OwnedSemaphorePermit,
}

impl Drop for RoomPermit {
    fn drop(&mut self) {
        self.pool.active.fetch_sub(1, Ordering::AcqRel);
        self.pool.released.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(active = self.pool.active(), "room released");
    }
}
