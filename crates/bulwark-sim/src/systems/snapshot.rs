//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only and never modifies the world.

use hecs::World;

use bulwark_core::components::*;
use bulwark_core::events::GameEvent;
use bulwark_core::state::*;
use bulwark_core::types::{Position, SimTime};

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    paused: bool,
    round: RoundState,
    pending_transition: Option<PendingTransitionView>,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        paused,
        round,
        pending_transition,
        monsters: build_monsters(world),
        towers: build_towers(world, time.elapsed_ms),
        projectiles: build_projectiles(world),
        events,
    }
}

fn build_monsters(world: &World) -> Vec<MonsterView> {
    let mut monsters: Vec<MonsterView> = world
        .query::<(&Monster, &PathFollower, &Position)>()
        .iter()
        .map(|(_, (monster, follower, position))| MonsterView {
            id: monster.id,
            position: *position,
            health: monster.health,
            max_health: monster.max_health,
            path_index: follower.path_index,
        })
        .collect();

    monsters.sort_by_key(|m| m.id);
    monsters
}

fn build_towers(world: &World, now_ms: f64) -> Vec<TowerView> {
    let mut towers: Vec<TowerView> = world
        .query::<(&Tower, &Position)>()
        .iter()
        .map(|(_, (tower, position))| TowerView {
            id: tower.id,
            position: *position,
            range: tower.range,
            cooldown_remaining_ms: tower
                .last_fire_ms
                .map(|last| (tower.fire_rate_ms - (now_ms - last)).max(0.0))
                .unwrap_or(0.0),
        })
        .collect();

    towers.sort_by_key(|t| t.id);
    towers
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &Position)>()
        .iter()
        .map(|(_, (projectile, position))| ProjectileView {
            id: projectile.id,
            position: *position,
            target: projectile.target,
        })
        .collect();

    projectiles.sort_by_key(|p| p.id);
    projectiles
}
