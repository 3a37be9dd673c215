//! Scenario orchestration: concurrent launch, join barrier, aggregation.

use std::sync::Arc;

use serde::Serialize;
use tokio::task::JoinSet;
use tokio::time::{Duration, Instant};

use crate::config::ScenarioConfig;
use crate::core::customer::Customer;
use crate::core::events::{shared_sink, EventSink, SharedEventSink};
use crate::core::pool::RoomPool;
use crate::core::workload::WorkloadModel;
use crate::core::SimError;

/// Aggregate results of one completed scenario run.
///
/// Only meaningful after the join barrier: every customer task has finished
/// before any of these values is computed.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioSummary {
    /// Pool capacity the scenario ran with.
    pub room_count: u32,
    /// Number of customers launched.
    pub customer_count: u32,
    /// Wall-clock time for the whole scenario.
    pub total_elapsed: Duration,
    /// Sum of item counts across all customers.
    pub total_items: u64,
    /// Sum of whole-second hold times across all customers.
    pub total_hold_secs: u64,
    /// Sum of whole-second admission waits across all customers.
    pub total_wait_secs: u64,
    /// Average items per customer.
    pub avg_items: f64,
    /// Average hold time per customer, in seconds.
    pub avg_hold_secs: f64,
    /// Average admission wait per customer, in seconds.
    pub avg_wait_secs: f64,
}

/// Runs one complete experiment: a pool, a batch of customers, a summary.
///
/// Construction validates the configuration and builds the pool; nothing is
/// spawned until [`run`](Self::run). Each runner owns its own pool, so
/// back-to-back scenarios are fully independent.
pub struct ScenarioRunner {
    config: ScenarioConfig,
    pool: Arc<RoomPool>,
    workload: Arc<dyn WorkloadModel>,
    events: SharedEventSink,
}

impl ScenarioRunner {
    /// Create a runner for the given scenario.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] if the configuration is invalid
    /// (zero rooms or zero customers). Fails before any task is launched;
    /// an invalid value is never clamped.
    pub fn new(
        config: ScenarioConfig,
        workload: Arc<dyn WorkloadModel>,
        sink: Box<dyn EventSink>,
    ) -> Result<Self, SimError> {
        config.validate().map_err(SimError::Config)?;
        let pool = Arc::new(RoomPool::new(config.room_count)?);
        Ok(Self {
            config,
            pool,
            workload,
            events: shared_sink(sink),
        })
    }

    /// The pool this scenario runs against.
    pub fn pool(&self) -> &Arc<RoomPool> {
        &self.pool
    }

    /// Run the scenario to completion and compute its summary.
    ///
    /// Generates the customer batch (accumulating `total_items` before any
    /// concurrent execution starts), spawns one task per customer, drains
    /// the join barrier, then merges the per-task timings. Per-task stats
    /// are merged only after the barrier, so the totals cannot lose updates
    /// to concurrent increments.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::CustomerTask`] if any customer task panicked or
    /// was cancelled; the failure is fatal to this scenario run.
    pub async fn run(&self) -> Result<ScenarioSummary, SimError> {
        let started = Instant::now();
        tracing::info!(
            rooms = self.config.room_count,
            customers = self.config.customer_count,
            "scenario started"
        );

        let mut total_items: u64 = 0;
        let mut customers = Vec::with_capacity(self.config.customer_count as usize);
        for id in 1..=self.config.customer_count {
            let item_count = self.workload.draw_item_count();
            total_items += u64::from(item_count);
            customers.push(Customer::new(id, item_count));
        }

        let mut tasks = JoinSet::new();
        for customer in customers {
            let pool = Arc::clone(&self.pool);
            let workload = Arc::clone(&self.workload);
            let events = Arc::clone(&self.events);
            tasks.spawn(async move { customer.try_occupy(&pool, workload.as_ref(), &events).await });
        }

        // Join barrier: no aggregate is read before every task has finished.
        let mut total_hold_secs: u64 = 0;
        let mut total_wait_secs: u64 = 0;
        while let Some(joined) = tasks.join_next().await {
            let stats = joined.map_err(|e| SimError::CustomerTask(e.to_string()))??;
            total_hold_secs += stats.held.as_secs();
            total_wait_secs += stats.waited.as_secs();
        }

        let total_elapsed = started.elapsed();
        let summary = self.summarize(total_elapsed, total_items, total_hold_secs, total_wait_secs);
        tracing::info!(
            elapsed_secs = total_elapsed.as_secs_f64(),
            avg_items = summary.avg_items,
            avg_hold_secs = summary.avg_hold_secs,
            avg_wait_secs = summary.avg_wait_secs,
            "scenario finished"
        );
        Ok(summary)
    }

    #[allow(clippy::cast_precision_loss)]
    fn summarize(
        &self,
        total_elapsed: Duration,
        total_items: u64,
        total_hold_secs: u64,
        total_wait_secs: u64,
    ) -> ScenarioSummary {
        let n = f64::from(self.config.customer_count);
        ScenarioSummary {
            room_count: self.config.room_count,
            customer_count: self.config.customer_count,
            total_elapsed,
            total_items,
            total_hold_secs,
            total_wait_secs,
            avg_items: total_items as f64 / n,
            avg_hold_secs: total_hold_secs as f64 / n,
            avg_wait_secs: total_wait_secs as f64 / n,
        }
    }
}
