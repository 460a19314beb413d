//! Simulation engine for GRIDFIRE.
//!
//! Owns the explosion bursts, shockwaves, deformation grid, spawn scheduler
//! and player, advances them with host-supplied frame deltas, and produces
//! `RenderSnapshot`s for drawing. Completely headless, enabling
//! deterministic testing.

pub mod burst;
pub mod engine;
pub mod grid;
pub mod particle;
pub mod player;
pub mod shockwave;
pub mod snapshot;
pub mod spawner;

pub use engine::Simulation;
pub use gridfire_core as core;
