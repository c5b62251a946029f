// worms_engine/engine/src/systems/physics/ballistics.rs
use crate::core::constants::GRAVITY;
use crate::core::error::{EngineError, EngineResult};
use crate::core::types::Vec2;
use crate::world::terrain::Terrain;
use std::f64::consts::PI;

/// Clamps an orientation to the closed interval [-PI, PI].
///
/// This is a hard clamp, not a periodic reduction: any input above PI maps to
/// exactly PI and any input below -PI to exactly -PI. NaN fails both
/// comparisons and passes through unchanged.
pub fn clamp_angle(angle: f64) -> f64 {
    if angle > PI {
        return PI;
    }
    if angle < -PI {
        return -PI;
    }
    angle
}

/// Ballistic displacement after `elapsed` seconds of free flight.
///
/// Returns `(dx, dy)` where `dx = v*cos(angle)*t` and
/// `dy = v*sin(angle)*t - g*t^2/2`. Pure: identical inputs yield bit-identical
/// results.
pub fn displacement(velocity: f64, angle: f64, elapsed: f64) -> (f64, f64) {
    let velocity_x = velocity * angle.cos();
    let velocity_y = velocity * angle.sin();
    (
        velocity_x * elapsed,
        velocity_y * elapsed - 0.5 * GRAVITY * elapsed * elapsed,
    )
}

/// Searches for the flight duration until the trajectory leaves passable
/// terrain.
///
/// Starting from `t = 0`, evaluates the trajectory point at `t` and queries the
/// oracle with the footprint radius; the first `t` whose point is reported not
/// passable is returned. If the starting position is already obstructed the
/// search returns `0.0` without advancing.
///
/// The search is bounded by `max_steps` queries so that an oracle that never
/// reports an obstruction cannot hang the caller.
pub fn time_to_obstruction(
    origin: Vec2,
    radius: f64,
    velocity: f64,
    angle: f64,
    terrain: &dyn Terrain,
    delta: f64,
    max_steps: u64,
) -> EngineResult<f64> {
    if !delta.is_finite() || delta <= 0.0 {
        return Err(EngineError::InvalidTimeStep(delta));
    }

    for step in 0..=max_steps {
        let elapsed = step as f64 * delta;
        let (dx, dy) = displacement(velocity, angle, elapsed);
        if !terrain.is_passable(origin.x + dx, origin.y + dy, radius) {
            return Ok(elapsed);
        }
    }

    Err(EngineError::SimulationDiverged { steps: max_steps, delta })
}
