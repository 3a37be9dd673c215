//! A customer: one pass through the room pool.

use std::sync::Arc;

use tokio::time::{Duration, Instant};

use crate::core::events::{OccupancyEvent, OccupancyPhase, SharedEventSink};
use crate::core::pool::RoomPool;
use crate::core::workload::WorkloadModel;
use crate::core::SimError;

/// One unit of simulated work: an identity and a workload size.
///
/// A customer is created at the start of a scenario, performs exactly one
/// acquire/hold/release cycle, and is discarded when the scenario finishes.
#[derive(Debug, Clone, Copy)]
pub struct Customer {
    id: u32,
    item_count: u32,
}

/// Timings observed for one customer's pass, merged after the join barrier.
#[derive(Debug, Clone, Copy)]
pub struct OccupancyStats {
    /// Workload size the customer carried.
    pub item_count: u32,
    /// Time spent blocked on admission.
    pub waited: Duration,
    /// Time the room was held.
    pub held: Duration,
}

impl Customer {
    /// Create a customer with a scenario-unique, 1-based identifier.
    pub fn new(id: u32, item_count: u32) -> Self {
        Self { id, item_count }
    }

    /// Scenario-unique identifier.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Workload size, fixed at creation.
    pub fn item_count(&self) -> u32 {
        self.item_count
    }

    /// Perform the customer's single acquire/hold/release cycle.
    ///
    /// Emits `Waiting`, then suspends on admission, emits `Admitted`,
    /// computes the hold duration from the workload model, sleeps for it,
    /// emits `Done`, and releases the room. The room permit is held as an
    /// RAII guard, so the release also happens if the hold is interrupted
    /// by a panic or task abort.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::PoolClosed`] if admission fails; unreachable in
    /// normal operation.
    pub async fn try_occupy(
        &self,
        pool: &Arc<RoomPool>,
        workload: &dyn WorkloadModel,
        events: &SharedEventSink,
    ) -> Result<OccupancyStats, SimError> {
        events
            .lock()
            .record(OccupancyEvent::new(self.id, self.item_count, OccupancyPhase::Waiting));

        let wait_started = Instant::now();
        let permit = pool.acquire().await?;
        let waited = wait_started.elapsed();

        events
            .lock()
            .record(OccupancyEvent::new(self.id, self.item_count, OccupancyPhase::Admitted));

        let hold = workload.hold_duration(self.item_count);
        let hold_started = Instant::now();
        tokio::time::sleep(hold).await;
        let held = hold_started.elapsed();

        events.lock().record(
            OccupancyEvent::new(self.id, self.item_count, OccupancyPhase::Done)
                .with_held_secs(held.as_secs()),
        );
        drop(permit);

        Ok(OccupancyStats {
            item_count: self.item_count,
            waited,
            held,
        })
    }
}
