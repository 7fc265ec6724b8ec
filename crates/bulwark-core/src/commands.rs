//! Player commands sent from the presentation layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Place a tower at a world position.
    PlaceTower { x: f64, y: f64 },
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
    /// Abandon the current run and start over at stage 1.
    Restart,
    /// Set time scale (1.0 = normal, 2.0 = double, 0.0 = frozen).
    SetTimeScale { scale: f64 },
}
