// worms_engine/engine/src/world/game_world.rs
use crate::core::config::SimulationConfig;
use crate::core::error::EngineResult;
use crate::core::types::EntityId;
use crate::entities::object::{EntityKind, GameObject, Kinematics};
use crate::world::terrain::Terrain;
use dashmap::DashMap;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};

/// Shared handle to an object in the arena. Each object sits behind its own
/// lock, so distinct entities can be simulated concurrently.
pub type ObjectHandle = Arc<RwLock<GameObject>>;

/// The 2D game world: a passability oracle plus the arena of live objects.
///
/// The world owns the collection; objects hold weak back-references resolved
/// through [`GameObject::world`]. Ids are allocated monotonically and never
/// reused.
pub struct World {
    terrain: Arc<dyn Terrain>,
    config: SimulationConfig,
    objects: DashMap<EntityId, ObjectHandle>,
    next_id: AtomicU64,
}

impl World {
    pub fn new(terrain: Arc<dyn Terrain>, config: SimulationConfig) -> Arc<Self> {
        Arc::new(World {
            terrain,
            config,
            objects: DashMap::new(),
            next_id: AtomicU64::new(1),
        })
    }

    pub fn with_terrain(terrain: Arc<dyn Terrain>) -> Arc<Self> {
        Self::new(terrain, SimulationConfig::default())
    }

    pub fn terrain(&self) -> &dyn Terrain {
        self.terrain.as_ref()
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Spawns a static object (food, crate). Construction is atomic: the
    /// position is validated before anything is committed, so a failed spawn
    /// leaves no object behind.
    pub fn spawn_static(
        self: &Arc<Self>,
        x: f64,
        y: f64,
        radius: f64,
    ) -> EngineResult<ObjectHandle> {
        self.spawn(x, y, radius, EntityKind::Static)
    }

    /// Spawns a mobile object (worm, projectile) facing `angle`. The angle
    /// passes through the clamped setter, so out-of-range inputs land on the
    /// nearest bound.
    pub fn spawn_mobile(
        self: &Arc<Self>,
        x: f64,
        y: f64,
        radius: f64,
        angle: f64,
    ) -> EngineResult<ObjectHandle> {
        let handle = self.spawn(x, y, radius, EntityKind::Mobile(Kinematics::default()))?;
        handle.write().set_angle(angle)?;
        Ok(handle)
    }

    fn spawn(
        self: &Arc<Self>,
        x: f64,
        y: f64,
        radius: f64,
        kind: EntityKind,
    ) -> EngineResult<ObjectHandle> {
        GameObject::ensure_valid_position(x, y)?;

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let object = Arc::new(RwLock::new(GameObject::new(
            id,
            Arc::downgrade(self),
            x,
            y,
            radius,
            kind,
        )));
        self.objects.insert(id, object.clone());
        debug!("Spawned entity {} at ({}, {}) with radius {}", id, x, y, radius);
        Ok(object)
    }

    /// Removes an object from the live collection. Tolerates removal of ids
    /// that are no longer (or never were) present, so [`GameObject::destroy`]
    /// and external cleanup cannot race into a fault.
    pub fn remove_object(&self, id: EntityId) -> bool {
        if self.objects.remove(&id).is_some() {
            debug!("Removed entity {} from world", id);
            true
        } else {
            warn!("Attempted to remove entity {} but it was not found", id);
            false
        }
    }

    pub fn get_object(&self, id: EntityId) -> Option<ObjectHandle> {
        self.objects.get(&id).map(|entry| entry.value().clone())
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.objects.contains_key(&id)
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Delegates to the terrain oracle.
    pub fn is_passable(&self, x: f64, y: f64, radius: f64) -> bool {
        self.terrain.is_passable(x, y, radius)
    }
}
