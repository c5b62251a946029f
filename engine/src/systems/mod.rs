// worms_engine/engine/src/systems/mod.rs
pub mod physics;
