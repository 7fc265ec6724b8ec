//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only).
//! Round counters and the liveness table are owned by the engine and passed in.

pub mod cleanup;
pub mod movement;
pub mod projectile;
pub mod snapshot;
pub mod spawner;
pub mod targeting;
