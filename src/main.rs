//! Process entry point: runs the fixed demonstration scenario list.

use std::sync::Arc;

use fitting_rooms::config::SimulationConfig;
use fitting_rooms::core::{AppResult, RandomWorkload, ScenarioRunner, TracingEventSink};
use fitting_rooms::util::telemetry::init_tracing;

#[tokio::main]
async fn main() -> AppResult<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = SimulationConfig::default();
    config.validate().map_err(anyhow::Error::msg)?;

    for scenario in config.scenarios {
        let workload = Arc::new(RandomWorkload::from_os_rng());
        let runner = ScenarioRunner::new(scenario, workload, Box::new(TracingEventSink))?;
        let summary = runner.run().await?;
        tracing::info!(
            rooms = summary.room_count,
            customers = summary.customer_count,
            elapsed_secs = summary.total_elapsed.as_secs_f64(),
            avg_items = summary.avg_items,
            avg_hold_secs = summary.avg_hold_secs,
            avg_wait_secs = summary.avg_wait_secs,
            "scenario summary"
        );
    }

    Ok(())
}
