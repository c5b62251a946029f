// worms_engine/engine/src/core/error.rs
use crate::core::types::EntityId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid position ({x}, {y}): coordinates may not be infinite")]
    InvalidPosition { x: f64, y: f64 },

    #[error("Entity {0} has no associated world")]
    UnreachableWorld(EntityId),

    #[error("Entity {0} is already destroyed")]
    AlreadyDestroyed(EntityId),

    #[error("Entity {0} has no kinematic state")]
    NotMobile(EntityId),

    #[error("Invalid time step {0}: must be finite and positive")]
    InvalidTimeStep(f64),

    #[error("Jump search did not terminate within {steps} steps (delta = {delta})")]
    SimulationDiverged { steps: u64, delta: f64 },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;
