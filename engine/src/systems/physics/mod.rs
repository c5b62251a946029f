// worms_engine/engine/src/systems/physics/mod.rs
pub mod ballistics;
