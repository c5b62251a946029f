// worms_engine/engine/src/core/config.rs
// Basic configuration structure

use crate::core::error::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Upper bound on passability queries per jump search.
    pub max_jump_steps: u64,
    /// Time-step granularity used when the caller does not choose one.
    pub default_time_step: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            max_jump_steps: super::constants::MAX_JUMP_STEPS,
            default_time_step: super::constants::DEFAULT_TIME_STEP,
        }
    }
}

impl SimulationConfig {
    pub fn from_yaml_file(path: impl AsRef<Path>) -> EngineResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: SimulationConfig = serde_yaml::from_str(&contents)
            .map_err(|e| EngineError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> EngineResult<()> {
        if self.max_jump_steps == 0 {
            return Err(EngineError::ConfigError(
                "max_jump_steps must be at least 1".to_string(),
            ));
        }
        if !self.default_time_step.is_finite() || self.default_time_step <= 0.0 {
            return Err(EngineError::ConfigError(format!(
                "default_time_step must be finite and positive, got {}",
                self.default_time_step
            )));
        }
        Ok(())
    }
}
