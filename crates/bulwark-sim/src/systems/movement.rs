//! Path-following movement for monsters.
//!
//! Each call either moves a monster toward its next waypoint or, once it is
//! within `WAYPOINT_EPSILON`, advances `path_index` without moving.
//! Reaching the final waypoint is reported as an escape.

use hecs::{Entity, World};

use bulwark_core::components::{Monster, PathFollower};
use bulwark_core::constants::WAYPOINT_EPSILON;
use bulwark_core::paths::Path;
use bulwark_core::types::{MonsterId, Position};

/// Outcome of advancing a single monster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStep {
    Moved,
    ReachedWaypoint,
    Escaped,
}

/// Advance one monster along `path` by `dt_ms`.
pub fn advance_monster(
    position: &mut Position,
    follower: &mut PathFollower,
    speed: f64,
    path: &Path,
    dt_ms: f64,
) -> PathStep {
    let last = path.last_index();
    let next = match path.waypoint(follower.path_index + 1) {
        Some(wp) if follower.path_index < last => wp,
        _ => return PathStep::Escaped,
    };

    if position.range_to(&next) < WAYPOINT_EPSILON {
        follower.path_index += 1;
        if follower.path_index >= last {
            return PathStep::Escaped;
        }
        return PathStep::ReachedWaypoint;
    }

    position.step_toward(&next, speed * dt_ms / 1000.0);
    PathStep::Moved
}

/// Advance every monster. Returns the monsters that escaped this tick,
/// ordered by id. The caller removes them.
pub fn run(world: &mut World, path: &Path, dt_ms: f64) -> Vec<(Entity, MonsterId)> {
    let mut escaped = Vec::new();

    for (entity, (monster, follower, position)) in
        world.query_mut::<(&Monster, &mut PathFollower, &mut Position)>()
    {
        if advance_monster(position, follower, monster.speed, path, dt_ms) == PathStep::Escaped {
            escaped.push((entity, monster.id));
        }
    }

    escaped.sort_by_key(|(_, id)| *id);
    escaped
}
