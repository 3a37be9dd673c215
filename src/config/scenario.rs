//! Scenario and simulation configuration structures.

use serde::{Deserialize, Serialize};

/// Parameters of one scenario: a pool capacity and a customer batch size.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Number of rooms in the pool. Must be at least 1.
    pub room_count: u32,
    /// Number of customers launched against the pool. Must be at least 1.
    pub customer_count: u32,
}

/// Root simulation configuration: scenarios run sequentially, in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Scenarios to run, each with its own independent pool.
    pub scenarios: Vec<ScenarioConfig>,
}

impl ScenarioConfig {
    /// Validate scenario parameters.
    ///
    /// # Errors
    ///
    /// Returns a message naming the offending field if either count is zero.
    pub fn validate(&self) -> Result<(), String> {
        if self.room_count == 0 {
            return Err("room_count must be greater than 0".into());
        }
        if self.customer_count == 0 {
            return Err("customer_count must be greater than 0".into());
        }
        Ok(())
    }
}

impl SimulationConfig {
    /// Validate all scenarios and ensure at least one exists.
    ///
    /// # Errors
    ///
    /// Returns a message identifying the first invalid scenario, or that the
    /// list is empty.
    pub fn validate(&self) -> Result<(), String> {
        if self.scenarios.is_empty() {
            return Err("at least one scenario must be defined".into());
        }
        for (index, scenario) in self.scenarios.iter().enumerate() {
            scenario
                .validate()
                .map_err(|e| format!("scenario {index} invalid: {e}"))?;
        }
        Ok(())
    }

    /// Parse simulation configuration from a JSON string and validate.
    ///
    /// # Errors
    ///
    /// Returns a message on malformed JSON or on validation failure.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }
}

impl Default for SimulationConfig {
    /// The fixed demonstration run list: growing pools and customer batches.
    fn default() -> Self {
        Self {
            scenarios: vec![
                ScenarioConfig {
                    room_count: 3,
                    customer_count: 10,
                },
                ScenarioConfig {
                    room_count: 5,
                    customer_count: 15,
                },
                ScenarioConfig {
                    room_count: 7,
                    customer_count: 20,
                },
            ],
        }
    }
}
