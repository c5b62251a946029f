// worms_engine/engine/src/world/mod.rs
pub mod game_world;
pub mod terrain;
pub mod terrain_generator;
