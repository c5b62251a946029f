// worms_engine/engine/src/entities/mod.rs
pub mod object;
