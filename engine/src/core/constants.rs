// worms_engine/engine/src/core/constants.rs

// Physics constants
pub const GRAVITY: f64 = 9.80665; // m/s^2, fixed for the lifetime of the engine

// Jump search constants
pub const MAX_JUMP_STEPS: u64 = 10_000_000; // loop guard for adversarial terrain oracles
pub const DEFAULT_TIME_STEP: f64 = 0.01; // seconds, caller-overridable granularity

// World constants (defaults for generated terrain)
pub const WORLD_MIN_X: f64 = 0.0;
pub const WORLD_MAX_X: f64 = 800.0;
pub const WORLD_MIN_Y: f64 = 0.0;
pub const WORLD_MAX_Y: f64 = 600.0;
pub const BORDER_THICKNESS: f64 = 20.0;

// Generated cover constants
pub const COVER_BLOCK_MIN_SIZE: f64 = 15.0;
pub const COVER_BLOCK_MAX_SIZE: f64 = 60.0;
pub const COVER_BLOCK_COUNT: usize = 12;
