//! Simulation configuration.
//!
//! Every field has a default drawn from `bulwark_core::constants`, so a JSON
//! config only needs to name what it overrides.

use serde::{Deserialize, Serialize};

use bulwark_core::constants::*;
use bulwark_core::error::ConfigError;
use bulwark_core::paths::{default_stages, Path};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MonsterSpec {
    pub health: i32,
    /// px/s
    pub speed: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TowerSpec {
    pub range: f64,
    pub fire_rate_ms: f64,
    pub damage: i32,
    /// Minimum distance from any path segment.
    pub min_path_clearance: f64,
    /// Minimum distance from another tower.
    pub min_spacing: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileSpec {
    /// px/s
    pub speed: f64,
}

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Stage paths in play order. Stage numbers are 1-based indexes into this list.
    pub stages: Vec<Path>,
    pub kill_target: u32,
    pub escape_limit: u32,
    pub max_per_wave: u32,
    pub spawn_interval_ms: f64,
    pub stage_advance_delay_ms: f64,
    pub restart_delay_ms: f64,
    /// Frame deltas above this are clamped.
    pub max_frame_delta_ms: f64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
    pub world_width: f64,
    pub world_height: f64,
    pub monster: MonsterSpec,
    pub tower: TowerSpec,
    pub projectile: ProjectileSpec,
}

impl Default for MonsterSpec {
    fn default() -> Self {
        Self {
            health: MONSTER_HEALTH,
            speed: MONSTER_SPEED,
        }
    }
}

impl Default for TowerSpec {
    fn default() -> Self {
        Self {
            range: TOWER_RANGE,
            fire_rate_ms: TOWER_FIRE_RATE_MS,
            damage: TOWER_DAMAGE,
            min_path_clearance: TOWER_MIN_PATH_CLEARANCE,
            min_spacing: TOWER_MIN_SPACING,
        }
    }
}

impl Default for ProjectileSpec {
    fn default() -> Self {
        Self {
            speed: PROJECTILE_SPEED,
        }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            stages: default_stages(),
            kill_target: KILL_TARGET,
            escape_limit: ESCAPE_LIMIT,
            max_per_wave: MAX_PER_WAVE,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            stage_advance_delay_ms: STAGE_ADVANCE_DELAY_MS,
            restart_delay_ms: RESTART_DELAY_MS,
            max_frame_delta_ms: MAX_FRAME_DELTA_MS,
            time_scale: 1.0,
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            monster: MonsterSpec::default(),
            tower: TowerSpec::default(),
            projectile: ProjectileSpec::default(),
        }
    }
}

impl SimConfig {
    /// Parse a JSON config and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Number of configured stages.
    pub fn stage_count(&self) -> u32 {
        self.stages.len() as u32
    }

    /// Path for a 1-based stage number.
    pub fn stage_path(&self, stage: u32) -> Result<&Path, ConfigError> {
        stage
            .checked_sub(1)
            .and_then(|i| self.stages.get(i as usize))
            .ok_or(ConfigError::UnknownStage(stage))
    }

    /// Reject configurations the round controller cannot run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stages.is_empty() {
            return Err(ConfigError::NoStages);
        }
        if let Some(short) = self.stages.iter().find(|p| p.len() < 2) {
            return Err(ConfigError::PathTooShort { len: short.len() });
        }
        if self.kill_target == 0 {
            return Err(ConfigError::InvalidTuning("kill_target must be positive"));
        }
        if self.escape_limit == 0 {
            return Err(ConfigError::InvalidTuning("escape_limit must be positive"));
        }
        if self.max_per_wave + 1 < self.kill_target + self.escape_limit {
            return Err(ConfigError::UnresolvableWave {
                max_per_wave: self.max_per_wave,
                kill_target: self.kill_target,
                escape_limit: self.escape_limit,
            });
        }
        let non_negative = [
            (self.spawn_interval_ms, "spawn_interval_ms must be non-negative"),
            (
                self.stage_advance_delay_ms,
                "stage_advance_delay_ms must be non-negative",
            ),
            (self.restart_delay_ms, "restart_delay_ms must be non-negative"),
            (self.tower.fire_rate_ms, "tower.fire_rate_ms must be non-negative"),
            (
                self.tower.min_path_clearance,
                "tower.min_path_clearance must be non-negative",
            ),
            (self.tower.min_spacing, "tower.min_spacing must be non-negative"),
        ];
        for (value, message) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidTuning(message));
            }
        }
        let positive = [
            (self.max_frame_delta_ms, "max_frame_delta_ms must be positive"),
            (self.monster.speed, "monster.speed must be positive"),
            (self.projectile.speed, "projectile.speed must be positive"),
            (self.tower.range, "tower.range must be positive"),
            (self.world_width, "world_width must be positive"),
            (self.world_height, "world_height must be positive"),
        ];
        for (value, message) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidTuning(message));
            }
        }
        if self.monster.health <= 0 {
            return Err(ConfigError::InvalidTuning("monster.health must be positive"));
        }
        if self.tower.damage <= 0 {
            return Err(ConfigError::InvalidTuning("tower.damage must be positive"));
        }
        if !(0.0..=MAX_TIME_SCALE).contains(&self.time_scale) {
            return Err(ConfigError::InvalidTuning("time_scale must be within 0..=4"));
        }
        Ok(())
    }
}
