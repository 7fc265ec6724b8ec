//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::types::{MonsterId, ProjectileId, TowerId};

/// A hostile walker following the stage path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Monster {
    pub id: MonsterId,
    pub health: i32,
    pub max_health: i32,
    /// Movement speed in px/s.
    pub speed: f64,
}

/// Progress along the active stage path.
///
/// `path_index` is the waypoint the monster last reached; it heads toward
/// `path_index + 1`. It only ever increases.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PathFollower {
    pub path_index: usize,
}

/// A static defensive tower.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tower {
    pub id: TowerId,
    /// Targeting range in px.
    pub range: f64,
    /// Minimum time between shots (ms).
    pub fire_rate_ms: f64,
    pub damage: i32,
    /// Logical time of the last shot. `None` until the first shot.
    pub last_fire_ms: Option<f64>,
}

/// A homing projectile locked onto a monster.
///
/// The target is held by id and resolved through the engine's liveness
/// table each tick, so a removed monster simply stops resolving.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: ProjectileId,
    pub source: TowerId,
    pub target: MonsterId,
    /// Flight speed in px/s.
    pub speed: f64,
    pub damage: i32,
}
