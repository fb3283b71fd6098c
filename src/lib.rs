//! Schelling segregation model on a bounded rectangular grid

pub mod core;
pub mod grid;
pub mod render;
pub mod simulation;
