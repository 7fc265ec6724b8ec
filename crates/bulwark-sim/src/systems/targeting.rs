//! Tower targeting and firing.
//!
//! A tower off cooldown picks the closest monster within range and launches
//! a projectile at it. Exact distance ties go to the lowest monster id, i.e.
//! the monster that spawned first.

use hecs::World;

use bulwark_core::components::{Monster, Tower};
use bulwark_core::events::GameEvent;
use bulwark_core::types::{MonsterId, Position, ProjectileId, TowerId};

use crate::world_setup;

/// Closest candidate within `range` of `origin`, lowest id on ties.
pub fn select_target(
    origin: &Position,
    range: f64,
    candidates: &[(MonsterId, Position)],
) -> Option<MonsterId> {
    let mut best: Option<(f64, MonsterId)> = None;

    for &(id, position) in candidates {
        let distance = origin.range_to(&position);
        if distance > range {
            continue;
        }
        let better = match best {
            None => true,
            Some((best_distance, best_id)) => {
                distance < best_distance || (distance == best_distance && id < best_id)
            }
        };
        if better {
            best = Some((distance, id));
        }
    }

    best.map(|(_, id)| id)
}

/// Fire if the cooldown has elapsed and a target is in range.
///
/// The cooldown is only consumed when a shot is actually taken.
pub fn try_fire(
    tower: &mut Tower,
    position: &Position,
    now_ms: f64,
    candidates: &[(MonsterId, Position)],
) -> Option<MonsterId> {
    if let Some(last) = tower.last_fire_ms {
        if now_ms - last < tower.fire_rate_ms {
            return None;
        }
    }

    let target = select_target(position, tower.range, candidates)?;
    tower.last_fire_ms = Some(now_ms);
    Some(target)
}

/// Let every tower attempt to fire. Returns the number of shots taken.
pub fn run(
    world: &mut World,
    now_ms: f64,
    projectile_speed: f64,
    next_projectile_id: &mut u32,
    events: &mut Vec<GameEvent>,
) -> usize {
    let mut candidates: Vec<(MonsterId, Position)> = world
        .query::<(&Monster, &Position)>()
        .iter()
        .map(|(_, (monster, position))| (monster.id, *position))
        .collect();
    if candidates.is_empty() {
        return 0;
    }
    candidates.sort_by_key(|(id, _)| *id);

    let mut shots: Vec<(TowerId, MonsterId, Position, i32)> = Vec::new();
    for (_entity, (tower, position)) in world.query_mut::<(&mut Tower, &Position)>() {
        if let Some(target) = try_fire(tower, position, now_ms, &candidates) {
            shots.push((tower.id, target, *position, tower.damage));
        }
    }
    shots.sort_by_key(|(tower, ..)| *tower);

    for &(tower, target, origin, damage) in &shots {
        let projectile = ProjectileId(*next_projectile_id);
        *next_projectile_id += 1;
        world_setup::spawn_projectile(
            world,
            projectile,
            tower,
            target,
            origin,
            projectile_speed,
            damage,
        );
        events.push(GameEvent::ProjectileFired {
            projectile,
            tower,
            target,
        });
    }

    shots.len()
}
