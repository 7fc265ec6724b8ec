//! Events emitted by the simulation for presentation feedback.

use serde::{Deserialize, Serialize};

use crate::enums::PlacementRejection;
use crate::types::{MonsterId, Position, ProjectileId, TowerId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    MonsterSpawned { monster: MonsterId },
    /// A monster reached the end of the path alive.
    MonsterEscaped { monster: MonsterId },
    MonsterKilled { monster: MonsterId, by: TowerId },
    TowerPlaced { tower: TowerId, position: Position },
    PlacementRejected {
        position: Position,
        reason: PlacementRejection,
    },
    ProjectileFired {
        projectile: ProjectileId,
        tower: TowerId,
        target: MonsterId,
    },
    ProjectileHit {
        projectile: ProjectileId,
        target: MonsterId,
        damage: i32,
    },
    /// The projectile's target disappeared before impact.
    ProjectileFizzled { projectile: ProjectileId },
    StageStarted { stage: u32 },
    StageWon { stage: u32, kills: u32, escapes: u32 },
    StageLost { stage: u32, kills: u32, escapes: u32 },
    AllStagesComplete,
}
