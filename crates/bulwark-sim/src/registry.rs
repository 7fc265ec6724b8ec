//! Liveness table mapping stable monster ids to ECS entities.
//!
//! Projectiles hold a `MonsterId`, never an entity. A monster that was
//! killed, escaped or cleared is removed here first, after which every
//! lookup for it returns `None`.

use std::collections::HashMap;

use hecs::{Entity, World};

use bulwark_core::types::MonsterId;

#[derive(Debug, Default)]
pub struct MonsterRegistry {
    live: HashMap<MonsterId, Entity>,
}

impl MonsterRegistry {
    pub fn insert(&mut self, id: MonsterId, entity: Entity) {
        self.live.insert(id, entity);
    }

    /// Drop a monster from the table. Returns its entity if it was live.
    pub fn remove(&mut self, id: MonsterId) -> Option<Entity> {
        self.live.remove(&id)
    }

    /// Resolve a monster id to a live entity.
    pub fn resolve(&self, world: &World, id: MonsterId) -> Option<Entity> {
        self.live
            .get(&id)
            .copied()
            .filter(|&entity| world.contains(entity))
    }

    pub fn is_live(&self, id: MonsterId) -> bool {
        self.live.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn clear(&mut self) {
        self.live.clear();
    }
}
