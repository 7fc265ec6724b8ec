//! Cleanup system: removes entities on stage transitions.

use hecs::{Entity, World};

use bulwark_core::components::{Monster, Projectile};

use crate::registry::MonsterRegistry;

/// Remove every monster and projectile. Towers stay in place.
/// Uses a pre-allocated buffer to avoid per-call allocation.
pub fn clear_combatants(
    world: &mut World,
    registry: &mut MonsterRegistry,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();
    registry.clear();

    for (entity, _monster) in world.query_mut::<&Monster>() {
        despawn_buffer.push(entity);
    }
    for (entity, _projectile) in world.query_mut::<&Projectile>() {
        despawn_buffer.push(entity);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Remove every entity, towers included.
pub fn clear_all(world: &mut World, registry: &mut MonsterRegistry) {
    registry.clear();
    world.clear();
}
