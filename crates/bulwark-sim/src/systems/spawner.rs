//! Wave spawning system. Releases one monster per spawn interval.

use hecs::World;
use tracing::debug;

use bulwark_core::events::GameEvent;
use bulwark_core::paths::Path;
use bulwark_core::types::MonsterId;

use crate::config::MonsterSpec;
use crate::registry::MonsterRegistry;
use crate::round::RoundCounters;
use crate::world_setup;

/// Spawn parameters for the current wave.
pub struct WaveRules<'a> {
    pub path: &'a Path,
    pub monster: &'a MonsterSpec,
    pub max_per_wave: u32,
    pub spawn_interval_ms: f64,
}

/// Accumulate `dt_ms` on the spawn timer and spawn a monster when it is due.
pub fn run(
    world: &mut World,
    registry: &mut MonsterRegistry,
    counters: &mut RoundCounters,
    rules: &WaveRules<'_>,
    next_monster_id: &mut u32,
    events: &mut Vec<GameEvent>,
    dt_ms: f64,
) -> Option<MonsterId> {
    counters.spawn_timer_ms += dt_ms;

    if counters.monsters_spawned >= rules.max_per_wave
        || counters.spawn_timer_ms < rules.spawn_interval_ms
    {
        return None;
    }

    let id = MonsterId(*next_monster_id);
    *next_monster_id += 1;

    let entity = world_setup::spawn_monster(world, id, rules.monster, rules.path);
    registry.insert(id, entity);

    counters.spawn_timer_ms = 0.0;
    counters.monsters_spawned += 1;
    events.push(GameEvent::MonsterSpawned { monster: id });
    debug!(
        monster = id.0,
        spawned = counters.monsters_spawned,
        "monster spawned"
    );

    Some(id)
}
