//! # Fitting Rooms
//!
//! A didactic simulation of bounded-resource admission control.
//!
//! This library models contention for a small set of identical, mutually
//! exclusive resource units ("rooms") shared by many concurrent consumers
//! ("customers"). Each customer blocks until a room is free, occupies it for
//! a workload-proportional duration, then releases it. Scenarios launch a
//! batch of customers concurrently, wait for all of them at a join barrier,
//! and report aggregate timing statistics.
//!
//! ## Core pieces
//!
//! - [`core::RoomPool`] — a bounded counting resource with blocking
//!   admission and an RAII permit guard, so a unit is released on every exit
//!   path of the held section.
//! - [`core::Customer`] — one pass through the pool: wait, occupy, release.
//! - [`core::ScenarioRunner`] — spawns one task per customer, drains the
//!   join barrier, and merges per-task statistics into a summary.
//! - [`core::WorkloadModel`] — an injected randomness source, so the core
//!   stays deterministic under test.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use fitting_rooms::config::ScenarioConfig;
//! use fitting_rooms::core::{RandomWorkload, ScenarioRunner, TracingEventSink};
//!
//! let config = ScenarioConfig { room_count: 3, customer_count: 10 };
//! let workload = Arc::new(RandomWorkload::with_seed(42));
//! let runner = ScenarioRunner::new(config, workload, Box::new(TracingEventSink))?;
//! let summary = runner.run().await?;
//! println!("average wait: {:.2}s", summary.avg_wait_secs);
//! ```
//!
//! For complete examples, see the integration tests under `tests/`.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core simulation types: pool, customer, scenario runner, workload, events.
pub mod core;
/// Configuration models for scenarios and simulation runs.
pub mod config;
/// Shared utilities.
pub mod util;
