//! Occupancy event sinks.
//!
//! Each customer emits three events over its lifetime, in order: `Waiting`,
//! `Admitted`, `Done`. The sink is presentation-layer observability; the
//! simulation core does not depend on how (or whether) events are rendered.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::util::clock::now_ms;

/// Phase of a customer's pass through the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OccupancyPhase {
    /// Customer is blocked waiting for a free room.
    Waiting,
    /// Customer has been admitted and occupies a room.
    Admitted,
    /// Customer finished its hold and is about to release the room.
    Done,
}

/// One observable step of a customer's occupancy lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OccupancyEvent {
    /// Customer identifier, unique within a scenario.
    pub customer_id: u32,
    /// Workload size the customer carries.
    pub item_count: u32,
    /// Lifecycle phase this event marks.
    pub phase: OccupancyPhase,
    /// Whole seconds the room was held; present on `Done` events only.
    pub held_secs: Option<u64>,
    /// Wall-clock timestamp in milliseconds since epoch.
    pub at_ms: u128,
}

impl OccupancyEvent {
    /// Build an event for the given customer and phase, stamped now.
    pub fn new(customer_id: u32, item_count: u32, phase: OccupancyPhase) -> Self {
        Self {
            customer_id,
            item_count,
            phase,
            held_secs: None,
            at_ms: now_ms(),
        }
    }

    /// Attach the hold duration observed for a `Done` event.
    #[must_use]
    pub fn with_held_secs(mut self, held_secs: u64) -> Self {
        self.held_secs = Some(held_secs);
        self
    }
}

/// Event sink abstraction.
pub trait EventSink: Send {
    /// Record one occupancy event.
    fn record(&mut self, event: OccupancyEvent);
}

/// Event sink shared across concurrently running customer tasks.
pub type SharedEventSink = Arc<Mutex<Box<dyn EventSink>>>;

/// Wrap a sink for sharing across customer tasks.
pub fn shared_sink(sink: Box<dyn EventSink>) -> SharedEventSink {
    Arc::new(Mutex::new(sink))
}

/// In-memory event sink for testing and dev.
pub struct InMemoryEventSink {
    events: VecDeque<OccupancyEvent>,
    max_events: usize,
}

impl InMemoryEventSink {
    /// Create a new in-memory sink with a bounded buffer.
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(max_events),
            max_events,
        }
    }

    /// Retrieve a snapshot of stored events.
    pub fn events(&self) -> Vec<OccupancyEvent> {
        self.events.iter().cloned().collect()
    }
}

impl EventSink for InMemoryEventSink {
    fn record(&mut self, event: OccupancyEvent) {
        if self.events.len() >= self.max_events {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }
}

/// Sink that renders events as human-readable progress lines via `tracing`.
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn record(&mut self, event: OccupancyEvent) {
        match event.phase {
            OccupancyPhase::Waiting => {
                tracing::info!(customer = event.customer_id, "waiting for a room");
            }
            OccupancyPhase::Admitted => {
                tracing::info!(
                    customer = event.customer_id,
                    items = event.item_count,
                    "entered a room"
                );
            }
            OccupancyPhase::Done => {
                tracing::info!(
                    customer = event.customer_id,
                    held_secs = event.held_secs,
                    "done, releasing room"
                );
            }
        }
    }
}
