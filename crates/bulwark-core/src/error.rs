//! Configuration errors. These are fatal: they surface at startup or stage
//! load, never during normal play.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("at least one stage path is required")]
    NoStages,
    #[error("stage {0} does not exist")]
    UnknownStage(u32),
    #[error("path has {len} waypoints, at least 2 are required")]
    PathTooShort { len: usize },
    #[error("invalid tuning: {0}")]
    InvalidTuning(&'static str),
    #[error(
        "wave of {max_per_wave} monsters cannot resolve with kill target {kill_target} \
         and escape limit {escape_limit}"
    )]
    UnresolvableWave {
        max_per_wave: u32,
        kill_target: u32,
        escape_limit: u32,
    },
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
}
