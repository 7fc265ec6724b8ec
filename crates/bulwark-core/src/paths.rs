//! Stage paths: the fixed waypoint routes monsters walk.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{distance_to_segment, Position};

/// Number of predefined stages.
pub const STAGE_COUNT: u32 = 3;

const STAGE_1: &[(f64, f64)] = &[
    (0.0, 100.0),
    (600.0, 100.0),
    (600.0, 300.0),
    (200.0, 300.0),
    (200.0, 500.0),
    (800.0, 500.0),
];

const STAGE_2: &[(f64, f64)] = &[
    (0.0, 300.0),
    (200.0, 300.0),
    (200.0, 100.0),
    (500.0, 100.0),
    (500.0, 500.0),
    (700.0, 500.0),
    (700.0, 300.0),
    (800.0, 300.0),
];

const STAGE_3: &[(f64, f64)] = &[
    (0.0, 50.0),
    (700.0, 50.0),
    (700.0, 200.0),
    (100.0, 200.0),
    (100.0, 350.0),
    (700.0, 350.0),
    (700.0, 550.0),
    (0.0, 550.0),
];

/// An ordered, immutable route of at least two waypoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Position>", into = "Vec<Position>")]
pub struct Path {
    waypoints: Vec<Position>,
}

impl Path {
    pub fn new(waypoints: Vec<Position>) -> Result<Self, ConfigError> {
        if waypoints.len() < 2 {
            return Err(ConfigError::PathTooShort {
                len: waypoints.len(),
            });
        }
        Ok(Self { waypoints })
    }

    pub fn waypoints(&self) -> &[Position] {
        &self.waypoints
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Always false; a path holds at least two waypoints.
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Index of the final waypoint. Reaching it means escaping.
    pub fn last_index(&self) -> usize {
        self.waypoints.len() - 1
    }

    pub fn start(&self) -> Position {
        self.waypoints[0]
    }

    pub fn waypoint(&self, index: usize) -> Option<Position> {
        self.waypoints.get(index).copied()
    }

    /// Total walking distance from the first to the last waypoint.
    pub fn length(&self) -> f64 {
        self.waypoints
            .windows(2)
            .map(|seg| seg[0].range_to(&seg[1]))
            .sum()
    }

    /// Shortest distance from `point` to any segment of the path.
    pub fn distance_to(&self, point: &Position) -> f64 {
        self.waypoints
            .windows(2)
            .map(|seg| distance_to_segment(point, &seg[0], &seg[1]))
            .fold(f64::INFINITY, f64::min)
    }
}

impl TryFrom<Vec<Position>> for Path {
    type Error = ConfigError;

    fn try_from(waypoints: Vec<Position>) -> Result<Self, Self::Error> {
        Self::new(waypoints)
    }
}

impl From<Path> for Vec<Position> {
    fn from(path: Path) -> Self {
        path.waypoints
    }
}

/// Waypoints for a predefined stage (1-based).
pub fn stage_path(stage: u32) -> Result<Path, ConfigError> {
    let points = match stage {
        1 => STAGE_1,
        2 => STAGE_2,
        3 => STAGE_3,
        other => return Err(ConfigError::UnknownStage(other)),
    };
    Path::new(points.iter().copied().map(Position::from).collect())
}

/// All predefined stages, in order.
pub fn default_stages() -> Vec<Path> {
    (1..=STAGE_COUNT).filter_map(|s| stage_path(s).ok()).collect()
}
