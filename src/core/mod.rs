//! Core simulation types: pool, customer, scenario runner, workload, events.

pub mod error;
pub mod pool;
pub mod customer;
pub mod scenario;
pub mod events;
pub mod workload;

pub use error::{AppResult, SimError};
pub use pool::{RoomPermit, RoomPool};
pub use customer::{Customer, OccupancyStats};
pub use scenario::{ScenarioRunner, ScenarioSummary};
pub use events::{
    EventSink, InMemoryEventSink, OccupancyEvent, OccupancyPhase, SharedEventSink,
    TracingEventSink, shared_sink,
};
pub use workload::{FixedWorkload, RandomWorkload, WorkloadModel};
