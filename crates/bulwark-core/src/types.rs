//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position in world space (pixels, origin top-left).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Stable identifier of a monster. Allocated in spawn order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct MonsterId(pub u32);

/// Stable identifier of a placed tower.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TowerId(pub u32);

/// Stable identifier of an in-flight projectile.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ProjectileId(pub u32);

/// Logical simulation clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of unpaused ticks processed.
    pub tick: u64,
    /// Accumulated simulated time in milliseconds.
    pub elapsed_ms: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn range_to(&self, other: &Position) -> f64 {
        self.to_vec().distance(other.to_vec())
    }

    pub fn to_vec(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    pub fn from_vec(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }

    /// Step toward `target` by at most `max_step`, never past it.
    /// Returns the distance that remains afterwards.
    pub fn step_toward(&mut self, target: &Position, max_step: f64) -> f64 {
        let here = self.to_vec();
        let delta = target.to_vec() - here;
        let distance = delta.length();
        if distance <= max_step {
            *self = *target;
            return 0.0;
        }
        *self = Self::from_vec(here + delta / distance * max_step);
        distance - max_step
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl SimTime {
    /// Advance by one tick covering `dt_ms` of simulated time.
    pub fn advance(&mut self, dt_ms: f64) {
        self.tick += 1;
        self.elapsed_ms += dt_ms;
    }
}

/// Shortest distance from `p` to the segment `a`-`b`.
///
/// Projects `p` onto the segment's supporting line and clamps the projection
/// parameter to `[0, 1]`. A zero-length segment is treated as the point `a`.
pub fn distance_to_segment(p: &Position, a: &Position, b: &Position) -> f64 {
    let (p, a, b) = (p.to_vec(), a.to_vec(), b.to_vec());
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}
