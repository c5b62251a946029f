// worms_engine/engine/src/entities/object.rs
use crate::core::error::{EngineError, EngineResult};
use crate::core::types::{EntityId, Vec2};
use crate::systems::physics::ballistics;
use crate::world::game_world::World;
use std::sync::Weak;
use tracing::{debug, warn};

/// Kinematic state carried only by mobile entities.
///
/// The angle invariant (always within [-PI, PI]) is maintained by routing all
/// mutation through [`GameObject::set_angle`]; the remaining scalars are
/// unconstrained.
#[derive(Debug, Clone, Default)]
pub struct Kinematics {
    pub(crate) angle: f64,
    pub(crate) mass: f64,
    pub(crate) force: f64,
    pub(crate) velocity: f64,
    pub(crate) air_time: f64,
}

/// What a concrete entity is, selected at spawn time.
///
/// Composition instead of an inheritance chain: a static object (food, crate)
/// carries no kinematics, a mobile one (worm, projectile) does.
#[derive(Debug, Clone)]
pub enum EntityKind {
    Static,
    Mobile(Kinematics),
}

/// A positioned, radius-bearing object registered in a [`World`].
///
/// The world owns the collection; the object keeps a weak back-reference that
/// is cleared when the object is destroyed. Positions are meters, angles
/// radians.
#[derive(Debug)]
pub struct GameObject {
    id: EntityId,
    world: Option<Weak<World>>,
    x: f64,
    y: f64,
    radius: f64,
    alive: bool,
    kind: EntityKind,
}

impl GameObject {
    /// Spawn-path constructor. Callers must have validated the position
    /// already; [`World::spawn_static`]/[`World::spawn_mobile`] do.
    pub(crate) fn new(
        id: EntityId,
        world: Weak<World>,
        x: f64,
        y: f64,
        radius: f64,
        kind: EntityKind,
    ) -> Self {
        GameObject {
            id,
            world: Some(world),
            x,
            y,
            radius,
            alive: true,
            kind,
        }
    }

    /// Screens a position for representability: infinite coordinates are
    /// invalid. Invalidity is always signalled as an error, never a `false`
    /// result. NaN is not screened (only infinities are), matching the rest of
    /// the unvalidated-scalar model.
    pub fn ensure_valid_position(x: f64, y: f64) -> EngineResult<()> {
        if x.is_infinite() || y.is_infinite() {
            return Err(EngineError::InvalidPosition { x, y });
        }
        Ok(())
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Resolves the owning world, if the object is still attached to one and
    /// the world is still alive.
    pub fn world(&self) -> Option<std::sync::Arc<World>> {
        self.world.as_ref().and_then(Weak::upgrade)
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn is_active(&self) -> bool {
        self.alive
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self.kind, EntityKind::Mobile(_))
    }

    // Setters are unconditional assignments; validation happens once on the
    // spawn path and is otherwise the caller's responsibility.

    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
    }

    pub fn set_world(&mut self, world: Option<Weak<World>>) {
        self.world = world;
    }

    /// Unregisters the object from its world and retires it permanently.
    ///
    /// A second destroy fails with [`EngineError::AlreadyDestroyed`] rather
    /// than faulting or silently succeeding.
    pub fn destroy(&mut self) -> EngineResult<()> {
        let world_ref = self
            .world
            .take()
            .ok_or(EngineError::AlreadyDestroyed(self.id))?;
        match world_ref.upgrade() {
            Some(world) => {
                world.remove_object(self.id);
            }
            None => {
                warn!("Entity {} destroyed after its world was dropped", self.id);
            }
        }
        self.alive = false;
        debug!("Entity {} destroyed", self.id);
        Ok(())
    }

    fn kinematics(&self) -> EngineResult<&Kinematics> {
        match &self.kind {
            EntityKind::Mobile(kinematics) => Ok(kinematics),
            EntityKind::Static => Err(EngineError::NotMobile(self.id)),
        }
    }

    fn kinematics_mut(&mut self) -> EngineResult<&mut Kinematics> {
        match &mut self.kind {
            EntityKind::Mobile(kinematics) => Ok(kinematics),
            EntityKind::Static => Err(EngineError::NotMobile(self.id)),
        }
    }

    pub fn angle(&self) -> EngineResult<f64> {
        Ok(self.kinematics()?.angle)
    }

    /// Sets the orientation, clamping to [-PI, PI]. See
    /// [`ballistics::clamp_angle`] for the exact boundary behavior.
    pub fn set_angle(&mut self, angle: f64) -> EngineResult<()> {
        self.kinematics_mut()?.angle = ballistics::clamp_angle(angle);
        Ok(())
    }

    pub fn mass(&self) -> EngineResult<f64> {
        Ok(self.kinematics()?.mass)
    }

    pub fn set_mass(&mut self, mass: f64) -> EngineResult<()> {
        self.kinematics_mut()?.mass = mass;
        Ok(())
    }

    pub fn force(&self) -> EngineResult<f64> {
        Ok(self.kinematics()?.force)
    }

    pub fn set_force(&mut self, force: f64) -> EngineResult<()> {
        self.kinematics_mut()?.force = force;
        Ok(())
    }

    pub fn velocity(&self) -> EngineResult<f64> {
        Ok(self.kinematics()?.velocity)
    }

    pub fn set_velocity(&mut self, velocity: f64) -> EngineResult<()> {
        self.kinematics_mut()?.velocity = velocity;
        Ok(())
    }

    /// Air time recorded by the most recent [`GameObject::jump`].
    pub fn air_time(&self) -> EngineResult<f64> {
        Ok(self.kinematics()?.air_time)
    }

    pub fn set_air_time(&mut self, air_time: f64) -> EngineResult<()> {
        self.kinematics_mut()?.air_time = air_time;
        Ok(())
    }

    /// Trajectory point after `elapsed` seconds of flight from the current
    /// position. Pure; commits nothing.
    pub fn jump_step(&self, elapsed: f64) -> EngineResult<(f64, f64)> {
        let kinematics = self.kinematics()?;
        let (dx, dy) = ballistics::displacement(kinematics.velocity, kinematics.angle, elapsed);
        Ok((self.x + dx, self.y + dy))
    }

    /// Flight duration until the trajectory leaves passable terrain, stepped
    /// at `delta`-second granularity through the world's passability oracle.
    pub fn jump_time(&self, delta: f64) -> EngineResult<f64> {
        let world = self
            .world
            .as_ref()
            .and_then(Weak::upgrade)
            .ok_or(EngineError::UnreachableWorld(self.id))?;
        let kinematics = self.kinematics()?;
        ballistics::time_to_obstruction(
            Vec2::new(self.x, self.y),
            self.radius,
            kinematics.velocity,
            kinematics.angle,
            world.terrain(),
            delta,
            world.config().max_jump_steps,
        )
    }

    /// Performs the full jump: searches for the terminal air duration, then
    /// commits the final displaced position and records the air time. The
    /// committed position is the only externally observable effect.
    pub fn jump(&mut self, delta: f64) -> EngineResult<()> {
        let air_time = self.jump_time(delta)?;
        let (x, y) = self.jump_step(air_time)?;
        self.x = x;
        self.y = y;
        self.kinematics_mut()?.air_time = air_time;
        debug!(
            "Entity {} jumped for {:.3}s, landed at ({:.3}, {:.3})",
            self.id, air_time, x, y
        );
        Ok(())
    }
}
