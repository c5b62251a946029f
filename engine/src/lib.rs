// worms_engine/engine/src/lib.rs

pub mod core;
pub mod entities;
pub mod systems;
pub mod world;

// Shortened paths for users of this library:
pub use crate::core::error::{EngineError, EngineResult};
pub use crate::core::types::EntityId;
pub use crate::entities::object::{EntityKind, GameObject, Kinematics};
pub use crate::world::game_world::World;
pub use crate::world::terrain::Terrain;
