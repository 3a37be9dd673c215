//! Workload models: the injected source of item counts and hold durations.
//!
//! Randomness is never ambient. Components that need random values receive a
//! [`WorkloadModel`], so production runs use a seeded or OS-seeded generator
//! while tests inject fixed values and stay deterministic.

use std::time::Duration;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Inclusive range of items a customer brings into a room.
const ITEM_RANGE: std::ops::RangeInclusive<u32> = 1..=6;
/// Inclusive range of the per-item hold multiplier.
const HOLD_FACTOR_RANGE: std::ops::RangeInclusive<u32> = 1..=3;

/// Source of per-customer workloads and hold durations.
pub trait WorkloadModel: Send + Sync {
    /// Draw the number of items a newly generated customer carries.
    fn draw_item_count(&self) -> u32;

    /// Compute how long a room is held for the given item count.
    ///
    /// Called at occupancy time, after admission; the duration is not fixed
    /// at customer creation.
    fn hold_duration(&self, item_count: u32) -> Duration;
}

/// Random workload backed by a seedable generator.
///
/// Draws item counts from `1..=6` and a hold multiplier from `1..=3`, scaled
/// by a configurable time unit. The unit is one second by default, matching
/// the "one simulated second per item-factor" model; tests shrink it to keep
/// wall-clock time bounded.
pub struct RandomWorkload {
    rng: Mutex<StdRng>,
    time_unit: Duration,
}

impl RandomWorkload {
    /// Create a workload seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
            time_unit: Duration::from_secs(1),
        }
    }

    /// Create a deterministic workload from a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            time_unit: Duration::from_secs(1),
        }
    }

    /// Override the simulated time unit (one second by default).
    #[must_use]
    pub fn with_time_unit(mut self, time_unit: Duration) -> Self {
        self.time_unit = time_unit;
        self
    }
}

impl WorkloadModel for RandomWorkload {
    fn draw_item_count(&self) -> u32 {
        self.rng.lock().random_range(ITEM_RANGE)
    }

    fn hold_duration(&self, item_count: u32) -> Duration {
        let factor = self.rng.lock().random_range(HOLD_FACTOR_RANGE);
        self.time_unit * (factor * item_count)
    }
}

/// Deterministic workload for tests: fixed item count, fixed per-item hold.
#[derive(Debug, Clone, Copy)]
pub struct FixedWorkload {
    /// Item count assigned to every generated customer.
    pub item_count: u32,
    /// Hold duration per item; `Duration::ZERO` gives zero-hold customers.
    pub hold_per_item: Duration,
}

impl WorkloadModel for FixedWorkload {
    fn draw_item_count(&self) -> u32 {
        self.item_count
    }

    fn hold_duration(&self, item_count: u32) -> Duration {
        self.hold_per_item * item_count
    }
}
