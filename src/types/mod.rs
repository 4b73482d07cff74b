// src/types/mod.rs
pub mod model;
pub mod wire;
