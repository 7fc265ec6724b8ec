//! Simulation constants and default tuning parameters.

// --- World bounds ---

/// Playfield width in pixels.
pub const WORLD_WIDTH: f64 = 800.0;

/// Playfield height in pixels.
pub const WORLD_HEIGHT: f64 = 600.0;

// --- Frame timing ---

/// Upper bound on a single frame delta (ms). Larger gaps (tab switch,
/// debugger pause) are clamped so entities never teleport.
pub const MAX_FRAME_DELTA_MS: f64 = 45.0;

/// Maximum time scale accepted by `SetTimeScale`.
pub const MAX_TIME_SCALE: f64 = 4.0;

// --- Round rules ---

/// Kills required to win a stage.
pub const KILL_TARGET: u32 = 20;

/// Escapes that lose a stage.
pub const ESCAPE_LIMIT: u32 = 3;

/// Monsters spawned per wave. Enough that every wave must end in a
/// win or a loss: KILL_TARGET + ESCAPE_LIMIT - 1.
pub const MAX_PER_WAVE: u32 = KILL_TARGET + ESCAPE_LIMIT - 1;

/// Interval between monster spawns (ms).
pub const SPAWN_INTERVAL_MS: f64 = 1500.0;

/// Delay between winning a stage and starting the next one (ms).
pub const STAGE_ADVANCE_DELAY_MS: f64 = 2000.0;

/// Delay between losing a stage and resuming play from stage 1 (ms).
pub const RESTART_DELAY_MS: f64 = 2000.0;

// --- Monsters ---

/// Starting health of a monster.
pub const MONSTER_HEALTH: i32 = 3;

/// Monster speed (px/s).
pub const MONSTER_SPEED: f64 = 50.0;

/// Distance below which a monster counts as having reached a waypoint.
pub const WAYPOINT_EPSILON: f64 = 5.0;

// --- Towers ---

/// Tower targeting range (px).
pub const TOWER_RANGE: f64 = 150.0;

/// Minimum time between two shots of the same tower (ms).
pub const TOWER_FIRE_RATE_MS: f64 = 1000.0;

/// Damage dealt by one projectile.
pub const TOWER_DAMAGE: i32 = 1;

/// Minimum distance between a tower and any path segment (px).
pub const TOWER_MIN_PATH_CLEARANCE: f64 = 40.0;

/// Minimum distance between two towers (px).
pub const TOWER_MIN_SPACING: f64 = 32.0;

// --- Projectiles ---

/// Projectile speed (px/s).
pub const PROJECTILE_SPEED: f64 = 300.0;

/// Distance at which a projectile resolves its hit.
pub const HIT_EPSILON: f64 = 10.0;
