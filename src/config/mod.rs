//! Configuration models for scenarios and simulation runs.

pub mod scenario;

pub use scenario::{ScenarioConfig, SimulationConfig};
