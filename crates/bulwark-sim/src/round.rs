//! Per-stage round counters owned by the engine.

use bulwark_core::enums::RoundPhase;
use bulwark_core::state::RoundState;

/// Running counters for the current stage attempt.
#[derive(Debug, Clone)]
pub struct RoundCounters {
    /// Current stage (1-based).
    pub stage: u32,
    pub kills: u32,
    pub escapes: u32,
    pub monsters_spawned: u32,
    /// Time accumulated toward the next spawn (ms).
    pub spawn_timer_ms: f64,
}

impl RoundCounters {
    /// Fresh counters for `stage`. The spawn timer starts primed so the
    /// first monster enters on the first playing tick.
    pub fn new(stage: u32, spawn_interval_ms: f64) -> Self {
        Self {
            stage,
            kills: 0,
            escapes: 0,
            monsters_spawned: 0,
            spawn_timer_ms: spawn_interval_ms,
        }
    }

    pub fn view(&self, phase: RoundPhase) -> RoundState {
        RoundState {
            stage: self.stage,
            kills: self.kills,
            escapes: self.escapes,
            monsters_spawned: self.monsters_spawned,
            phase,
        }
    }
}
