//! Entity spawn factories.
//!
//! Creates monster, tower and projectile entities with their component bundles.

use hecs::{Entity, World};

use bulwark_core::components::{Monster, PathFollower, Projectile, Tower};
use bulwark_core::paths::Path;
use bulwark_core::types::{MonsterId, Position, ProjectileId, TowerId};

use crate::config::{MonsterSpec, TowerSpec};

/// Spawn a monster at the first waypoint of `path`.
pub fn spawn_monster(world: &mut World, id: MonsterId, spec: &MonsterSpec, path: &Path) -> Entity {
    world.spawn((
        Monster {
            id,
            health: spec.health,
            max_health: spec.health,
            speed: spec.speed,
        },
        PathFollower::default(),
        path.start(),
    ))
}

/// Spawn a tower that has never fired.
pub fn spawn_tower(world: &mut World, id: TowerId, position: Position, spec: &TowerSpec) -> Entity {
    world.spawn((
        Tower {
            id,
            range: spec.range,
            fire_rate_ms: spec.fire_rate_ms,
            damage: spec.damage,
            last_fire_ms: None,
        },
        position,
    ))
}

/// Spawn a projectile at its tower's position, locked onto `target`.
pub fn spawn_projectile(
    world: &mut World,
    id: ProjectileId,
    source: TowerId,
    target: MonsterId,
    origin: Position,
    speed: f64,
    damage: i32,
) -> Entity {
    world.spawn((
        Projectile {
            id,
            source,
            target,
            speed,
            damage,
        },
        origin,
    ))
}
