//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Round controller phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Monsters of the current wave are still being spawned.
    #[default]
    Spawning,
    /// The whole wave is on the field; combat continues until win or loss.
    Active,
    /// Kill target reached; the next stage starts after a delay.
    StageWon,
    /// Escape limit reached; play resumes at stage 1 after a delay.
    StageLost,
    /// The last stage was won. Terminal.
    AllStagesComplete,
}

impl RoundPhase {
    /// Whether the combat systems run in this phase.
    pub fn is_playing(self) -> bool {
        matches!(self, RoundPhase::Spawning | RoundPhase::Active)
    }
}

/// Why a tower placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementRejection {
    /// Outside the playfield.
    OutOfBounds,
    /// Closer to a path segment than the minimum clearance.
    TooCloseToPath,
    /// Overlaps an existing tower.
    Occupied,
    /// The round is not accepting placements (stage over or game complete).
    RoundOver,
}

/// A transition deferred on the logical clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionKind {
    /// Load the next stage after a win.
    AdvanceStage,
    /// Resume spawning at stage 1 after a loss.
    Resume,
}
