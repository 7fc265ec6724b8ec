//! Simulation engine for BULWARK.
//!
//! Owns the hecs ECS world, advances it on clamped frame deltas,
//! and produces GameStateSnapshots for the presentation layer.

pub mod config;
pub mod engine;
pub mod placement;
pub mod registry;
pub mod round;
pub mod schedule;
pub mod systems;
pub mod world_setup;

pub use bulwark_core as core;
pub use config::SimConfig;
pub use engine::SimulationEngine;
