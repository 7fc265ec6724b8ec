//! Game state snapshot: the complete visible state handed to the
//! presentation layer after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{RoundPhase, TransitionKind};
use crate::events::GameEvent;
use crate::types::{MonsterId, Position, ProjectileId, SimTime, TowerId};

/// HUD-level round state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RoundState {
    /// Current stage (1-based).
    pub stage: u32,
    pub kills: u32,
    pub escapes: u32,
    pub monsters_spawned: u32,
    pub phase: RoundPhase,
}

/// Complete game state after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub paused: bool,
    pub round: RoundState,
    /// The next deferred transition, if one is scheduled.
    pub pending_transition: Option<PendingTransitionView>,
    pub monsters: Vec<MonsterView>,
    pub towers: Vec<TowerView>,
    pub projectiles: Vec<ProjectileView>,
    /// Events emitted since the previous snapshot.
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonsterView {
    pub id: MonsterId,
    pub position: Position,
    pub health: i32,
    pub max_health: i32,
    pub path_index: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TowerView {
    pub id: TowerId,
    pub position: Position,
    pub range: f64,
    /// Milliseconds until the tower may fire again (0 = ready).
    pub cooldown_remaining_ms: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: ProjectileId,
    pub position: Position,
    pub target: MonsterId,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendingTransitionView {
    pub kind: TransitionKind,
    /// Logical time (ms) at which the transition fires.
    pub due_ms: f64,
}
