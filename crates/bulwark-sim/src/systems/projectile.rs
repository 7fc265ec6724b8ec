//! Projectile homing and impact resolution.

use hecs::{Entity, World};
use tracing::trace;

use bulwark_core::components::{Monster, Projectile};
use bulwark_core::constants::HIT_EPSILON;
use bulwark_core::events::GameEvent;
use bulwark_core::types::{MonsterId, Position, TowerId};

use crate::registry::MonsterRegistry;

/// Apply damage to a monster. Returns true only on the hit that kills it.
pub fn apply_damage(monster: &mut Monster, amount: i32) -> bool {
    let was_alive = monster.health > 0;
    monster.health -= amount;
    was_alive && monster.health <= 0
}

/// Move every projectile toward its target's current position and resolve
/// hits. Returns the monsters killed this tick with the tower credited.
///
/// Projectiles whose target no longer resolves are discarded without
/// touching any counter. A lethal hit drops the monster from the registry
/// at once, so later projectiles aimed at it fizzle in the same pass.
pub fn run(
    world: &mut World,
    registry: &mut MonsterRegistry,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
    dt_ms: f64,
) -> Vec<(MonsterId, TowerId)> {
    despawn_buffer.clear();
    let mut kills = Vec::new();

    let mut in_flight: Vec<(Entity, Projectile, Position)> = world
        .query::<(&Projectile, &Position)>()
        .iter()
        .map(|(entity, (projectile, position))| (entity, projectile.clone(), *position))
        .collect();
    in_flight.sort_by_key(|(_, projectile, _)| projectile.id);

    for (entity, projectile, mut position) in in_flight {
        let Some(target_entity) = registry.resolve(world, projectile.target) else {
            trace!(
                projectile = projectile.id.0,
                target = projectile.target.0,
                "target gone, projectile discarded"
            );
            events.push(GameEvent::ProjectileFizzled {
                projectile: projectile.id,
            });
            despawn_buffer.push(entity);
            continue;
        };

        let target_position = match world.get::<&Position>(target_entity) {
            Ok(p) => *p,
            Err(_) => {
                events.push(GameEvent::ProjectileFizzled {
                    projectile: projectile.id,
                });
                despawn_buffer.push(entity);
                continue;
            }
        };

        let remaining = position.step_toward(&target_position, projectile.speed * dt_ms / 1000.0);
        if remaining >= HIT_EPSILON {
            if let Ok(mut p) = world.get::<&mut Position>(entity) {
                *p = position;
            }
            continue;
        }

        // Impact: the projectile is removed whether or not the hit is lethal.
        despawn_buffer.push(entity);
        events.push(GameEvent::ProjectileHit {
            projectile: projectile.id,
            target: projectile.target,
            damage: projectile.damage,
        });

        let killed = match world.get::<&mut Monster>(target_entity) {
            Ok(mut monster) => apply_damage(&mut monster, projectile.damage),
            Err(_) => false,
        };
        if killed {
            registry.remove(projectile.target);
            despawn_buffer.push(target_entity);
            events.push(GameEvent::MonsterKilled {
                monster: projectile.target,
                by: projectile.source,
            });
            kills.push((projectile.target, projectile.source));
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    kills
}
