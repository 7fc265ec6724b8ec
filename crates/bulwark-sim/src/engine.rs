//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, the round counters and the
//! deferred transition schedule. It processes player commands, runs all
//! systems in a fixed order, and produces `GameStateSnapshot`s. Completely
//! headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use tracing::{debug, info};

use bulwark_core::commands::PlayerCommand;
use bulwark_core::components::Tower;
use bulwark_core::constants::MAX_TIME_SCALE;
use bulwark_core::enums::{PlacementRejection, RoundPhase, TransitionKind};
use bulwark_core::error::ConfigError;
use bulwark_core::events::GameEvent;
use bulwark_core::paths::Path;
use bulwark_core::state::{GameStateSnapshot, RoundState};
use bulwark_core::types::{Position, SimTime, TowerId};

use crate::config::SimConfig;
use crate::placement;
use crate::registry::MonsterRegistry;
use crate::round::RoundCounters;
use crate::schedule::TransitionSchedule;
use crate::systems;
use crate::systems::spawner::WaveRules;
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    config: SimConfig,
    world: World,
    time: SimTime,
    phase: RoundPhase,
    paused: bool,
    time_scale: f64,
    counters: RoundCounters,
    monsters: MonsterRegistry,
    schedule: TransitionSchedule,
    next_monster_id: u32,
    next_tower_id: u32,
    next_projectile_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new engine. Fails fast on an invalid configuration.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let counters = RoundCounters::new(1, config.spawn_interval_ms);
        info!(
            stages = config.stage_count(),
            kill_target = config.kill_target,
            escape_limit = config.escape_limit,
            "simulation created"
        );
        Ok(Self {
            time_scale: config.time_scale,
            config,
            world: World::new(),
            time: SimTime::default(),
            phase: RoundPhase::Spawning,
            paused: false,
            counters,
            monsters: MonsterRegistry::default(),
            schedule: TransitionSchedule::new(),
            next_monster_id: 0,
            next_tower_id: 0,
            next_projectile_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: vec![GameEvent::StageStarted { stage: 1 }],
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Pointer input from the presentation layer: try to place a tower.
    pub fn on_pointer_down(&mut self, x: f64, y: f64) -> Result<TowerId, PlacementRejection> {
        self.place_tower(x, y)
    }

    /// Place a tower immediately. Rejections are reported, never raised.
    pub fn place_tower(&mut self, x: f64, y: f64) -> Result<TowerId, PlacementRejection> {
        let point = Position::new(x, y);
        match self.validate_placement(&point) {
            Ok(()) => {
                let id = TowerId(self.next_tower_id);
                self.next_tower_id += 1;
                world_setup::spawn_tower(&mut self.world, id, point, &self.config.tower);
                self.events.push(GameEvent::TowerPlaced {
                    tower: id,
                    position: point,
                });
                debug!(tower = id.0, x, y, "tower placed");
                Ok(id)
            }
            Err(reason) => {
                self.events.push(GameEvent::PlacementRejected {
                    position: point,
                    reason,
                });
                debug!(x, y, ?reason, "tower placement rejected");
                Err(reason)
            }
        }
    }

    /// Advance the simulation by one frame and return the resulting snapshot.
    ///
    /// `delta_ms` is wall-clock time since the previous frame; it is clamped
    /// to `max_frame_delta_ms` and scaled by the time scale.
    pub fn tick(&mut self, delta_ms: f64) -> GameStateSnapshot {
        self.process_commands();

        if !self.paused {
            let dt = self.frame_delta(delta_ms);
            self.time.advance(dt);
            self.run_due_transitions();
            if self.phase.is_playing() {
                self.run_systems(dt);
            }
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.paused,
            self.round_state(),
            self.schedule.next(),
            events,
        )
    }

    /// Read-only HUD state.
    pub fn round_state(&self) -> RoundState {
        self.counters.view(self.phase)
    }

    /// Get the current round phase.
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Path of the stage currently in play.
    pub fn current_path(&self) -> &Path {
        stage_path(&self.config, self.counters.stage)
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Number of monsters still resolvable by projectiles.
    pub fn live_monsters(&self) -> usize {
        self.monsters.len()
    }

    /// Credit kills as if projectiles had landed, then evaluate the win rule.
    #[cfg(test)]
    pub(crate) fn credit_kills(&mut self, count: u32) {
        self.counters.kills += count;
        self.check_stage_won();
    }

    /// Credit escapes as if monsters had reached the exit, then evaluate the loss rule.
    #[cfg(test)]
    pub(crate) fn credit_escapes(&mut self, count: u32) {
        self.counters.escapes += count;
        self.check_stage_lost();
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::PlaceTower { x, y } => {
                let _ = self.place_tower(x, y);
            }
            PlayerCommand::Pause => {
                self.paused = true;
            }
            PlayerCommand::Resume => {
                self.paused = false;
            }
            PlayerCommand::Restart => {
                self.restart();
            }
            PlayerCommand::SetTimeScale { scale } => {
                self.time_scale = if scale.is_finite() {
                    scale.clamp(0.0, MAX_TIME_SCALE)
                } else {
                    1.0
                };
            }
        }
    }

    fn frame_delta(&self, delta_ms: f64) -> f64 {
        let clamped = if delta_ms.is_finite() && delta_ms > 0.0 {
            delta_ms.min(self.config.max_frame_delta_ms)
        } else {
            0.0
        };
        clamped * self.time_scale
    }

    fn validate_placement(&self, point: &Position) -> Result<(), PlacementRejection> {
        if matches!(
            self.phase,
            RoundPhase::StageWon | RoundPhase::AllStagesComplete
        ) {
            return Err(PlacementRejection::RoundOver);
        }
        let towers: Vec<Position> = self
            .world
            .query::<(&Tower, &Position)>()
            .iter()
            .map(|(_, (_, position))| *position)
            .collect();
        placement::check_placement(point, self.current_path(), &towers, &self.config)
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt_ms: f64) {
        let path = stage_path(&self.config, self.counters.stage);

        // 1. Wave spawning
        let rules = WaveRules {
            path,
            monster: &self.config.monster,
            max_per_wave: self.config.max_per_wave,
            spawn_interval_ms: self.config.spawn_interval_ms,
        };
        systems::spawner::run(
            &mut self.world,
            &mut self.monsters,
            &mut self.counters,
            &rules,
            &mut self.next_monster_id,
            &mut self.events,
            dt_ms,
        );
        if self.phase == RoundPhase::Spawning
            && self.counters.monsters_spawned >= self.config.max_per_wave
        {
            self.phase = RoundPhase::Active;
        }

        // 2. Monster movement and escapes
        let escaped = systems::movement::run(&mut self.world, path, dt_ms);
        for (entity, id) in escaped {
            self.monsters.remove(id);
            let _ = self.world.despawn(entity);
            self.counters.escapes += 1;
            self.events.push(GameEvent::MonsterEscaped { monster: id });
            debug!(monster = id.0, escapes = self.counters.escapes, "monster escaped");
        }
        if self.check_stage_lost() {
            return;
        }

        // 3. Tower targeting
        systems::targeting::run(
            &mut self.world,
            self.time.elapsed_ms,
            self.config.projectile.speed,
            &mut self.next_projectile_id,
            &mut self.events,
        );

        // 4. Projectiles and kills
        let kills = systems::projectile::run(
            &mut self.world,
            &mut self.monsters,
            &mut self.events,
            &mut self.despawn_buffer,
            dt_ms,
        );
        self.counters.kills += kills.len() as u32;
        self.check_stage_won();
    }

    /// Lose the stage if the escape limit is reached.
    fn check_stage_lost(&mut self) -> bool {
        if !self.phase.is_playing() || self.counters.escapes < self.config.escape_limit {
            return false;
        }

        let stage = self.counters.stage;
        info!(
            stage,
            kills = self.counters.kills,
            escapes = self.counters.escapes,
            "stage lost, restarting from stage 1"
        );
        self.events.push(GameEvent::StageLost {
            stage,
            kills: self.counters.kills,
            escapes: self.counters.escapes,
        });

        self.schedule.cancel_all();
        systems::cleanup::clear_all(&mut self.world, &mut self.monsters);
        self.counters = RoundCounters::new(1, self.config.spawn_interval_ms);
        self.phase = RoundPhase::StageLost;
        self.schedule.schedule(
            self.time.elapsed_ms + self.config.restart_delay_ms,
            TransitionKind::Resume,
        );
        true
    }

    /// Win the stage if the kill target is reached.
    fn check_stage_won(&mut self) -> bool {
        if !self.phase.is_playing() || self.counters.kills < self.config.kill_target {
            return false;
        }

        let stage = self.counters.stage;
        info!(
            stage,
            kills = self.counters.kills,
            escapes = self.counters.escapes,
            "stage won"
        );
        self.events.push(GameEvent::StageWon {
            stage,
            kills: self.counters.kills,
            escapes: self.counters.escapes,
        });
        systems::cleanup::clear_combatants(
            &mut self.world,
            &mut self.monsters,
            &mut self.despawn_buffer,
        );

        if stage < self.config.stage_count() {
            self.phase = RoundPhase::StageWon;
            self.schedule.schedule(
                self.time.elapsed_ms + self.config.stage_advance_delay_ms,
                TransitionKind::AdvanceStage,
            );
        } else {
            self.phase = RoundPhase::AllStagesComplete;
            self.events.push(GameEvent::AllStagesComplete);
            info!("all stages complete");
        }
        true
    }

    /// Fire deferred transitions that are due on the logical clock.
    fn run_due_transitions(&mut self) {
        for kind in self.schedule.drain_due(self.time.elapsed_ms) {
            match kind {
                TransitionKind::AdvanceStage if self.phase == RoundPhase::StageWon => {
                    let stage = self.counters.stage + 1;
                    self.counters = RoundCounters::new(stage, self.config.spawn_interval_ms);
                    self.phase = RoundPhase::Spawning;
                    self.events.push(GameEvent::StageStarted { stage });
                    info!(stage, "stage started");
                }
                TransitionKind::Resume if self.phase == RoundPhase::StageLost => {
                    self.phase = RoundPhase::Spawning;
                    self.events.push(GameEvent::StageStarted {
                        stage: self.counters.stage,
                    });
                    info!(stage = self.counters.stage, "play resumed");
                }
                stale => {
                    debug!(?stale, phase = ?self.phase, "ignoring transition for another phase");
                }
            }
        }
    }

    /// Abandon the run: clear everything and start stage 1 now.
    fn restart(&mut self) {
        self.schedule.cancel_all();
        systems::cleanup::clear_all(&mut self.world, &mut self.monsters);
        self.counters = RoundCounters::new(1, self.config.spawn_interval_ms);
        self.phase = RoundPhase::Spawning;
        self.events.push(GameEvent::StageStarted { stage: 1 });
        info!("run restarted");
    }
}

/// Path for a stage number the engine produced itself. Stage numbers only
/// ever range over `1..=stage_count`, validated at construction.
fn stage_path(config: &SimConfig, stage: u32) -> &Path {
    &config.stages[(stage - 1) as usize]
}
