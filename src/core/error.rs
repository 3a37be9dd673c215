//! Error types for simulation operations.

use thiserror::Error;

/// Errors produced by simulation components.
#[derive(Debug, Error)]
pub enum SimError {
    /// A scenario was constructed with invalid parameters.
    #[error("invalid configuration: {0}")]
    Config(String),
    /// The admission primitive was closed while a customer was waiting.
    /// Unreachable in normal operation: the pool is never closed explicitly.
    #[error("room pool closed")]
    PoolClosed,
    /// A customer task panicked or was cancelled; fatal to the scenario run.
    #[error("customer task failed: {0}")]
    CustomerTask(String),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
