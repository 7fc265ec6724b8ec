//! Headless runner for BULWARK.
//!
//! Runs the simulation without a presentation layer, either as fast as
//! possible on a fixed frame delta or in real time on the game loop thread.
//! Towers are auto-placed at seeded random sites along the first path.

mod autoplace;
mod game_loop;

use std::path::PathBuf;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use bulwark_core::enums::RoundPhase;
use bulwark_core::events::GameEvent;
use bulwark_core::state::GameStateSnapshot;
use bulwark_core::types::Position;
use bulwark_sim::{SimConfig, SimulationEngine};

use crate::game_loop::GameLoopCommand;

#[derive(Parser, Debug)]
#[command(name = "headless-runner")]
#[command(about = "Run a BULWARK simulation without a renderer")]
struct Args {
    /// JSON config file; built-in defaults when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Simulated seconds to run (wall-clock seconds with --realtime)
    #[arg(long, default_value = "120")]
    seconds: f64,

    /// Frame delta in milliseconds for fast runs
    #[arg(long, default_value = "16")]
    delta_ms: f64,

    /// Number of towers to auto-place
    #[arg(long, default_value = "6")]
    towers: usize,

    /// Seed for tower placement
    #[arg(long, default_value = "12345")]
    seed: u64,

    /// Drive the engine from the wall clock on a game loop thread
    #[arg(long)]
    realtime: bool,

    /// Print the final snapshot as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

/// Event tallies across the whole run.
#[derive(Debug, Default)]
struct RunSummary {
    frames: u64,
    spawned: u32,
    kills: u32,
    escapes: u32,
    shots: u32,
    fizzles: u32,
    stages_won: u32,
    stages_lost: u32,
    rejected_placements: u32,
}

impl RunSummary {
    /// Tally one frame's events. Returns true if the stage was lost.
    fn record(&mut self, events: &[GameEvent]) -> bool {
        self.frames += 1;
        let mut lost = false;
        for event in events {
            match event {
                GameEvent::MonsterSpawned { .. } => self.spawned += 1,
                GameEvent::MonsterKilled { .. } => self.kills += 1,
                GameEvent::MonsterEscaped { .. } => self.escapes += 1,
                GameEvent::ProjectileFired { .. } => self.shots += 1,
                GameEvent::ProjectileFizzled { .. } => self.fizzles += 1,
                GameEvent::PlacementRejected { reason, .. } => {
                    self.rejected_placements += 1;
                    warn!(?reason, "auto-placed tower rejected");
                }
                GameEvent::StageWon { stage, .. } => {
                    self.stages_won += 1;
                    info!(stage, "stage won");
                }
                GameEvent::StageLost { stage, .. } => {
                    self.stages_lost += 1;
                    lost = true;
                    info!(stage, "stage lost");
                }
                _ => {}
            }
        }
        lost
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SimConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => SimConfig::default(),
    };

    let plan = autoplace::plan_towers(&config, args.towers, args.seed)?;
    if plan.len() < args.towers {
        warn!(requested = args.towers, placed = plan.len(), "not enough valid tower sites");
    }
    info!(towers = plan.len(), seed = args.seed, "tower plan ready");

    let engine = SimulationEngine::new(config)?;
    let (snapshot, summary) = if args.realtime {
        run_realtime(engine, &plan, args.seconds)?
    } else {
        run_fast(engine, &plan, args.seconds, args.delta_ms)
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print_summary(&snapshot, &summary);
    }

    Ok(())
}

fn run_fast(
    mut engine: SimulationEngine,
    plan: &[Position],
    seconds: f64,
    delta_ms: f64,
) -> (GameStateSnapshot, RunSummary) {
    let mut summary = RunSummary::default();
    let mut snapshot = GameStateSnapshot::default();
    let frames = (seconds * 1000.0 / delta_ms.max(1.0)).ceil() as u64;

    engine.queue_commands(autoplace::place_commands(plan));

    for _ in 0..frames {
        snapshot = engine.tick(delta_ms);
        if summary.record(&snapshot.events) {
            // A loss clears the towers along with everything else.
            engine.queue_commands(autoplace::place_commands(plan));
        }
        if snapshot.round.phase == RoundPhase::AllStagesComplete {
            break;
        }
    }

    (snapshot, summary)
}

fn run_realtime(
    engine: SimulationEngine,
    plan: &[Position],
    seconds: f64,
) -> Result<(GameStateSnapshot, RunSummary), Box<dyn std::error::Error>> {
    let latest = Arc::new(Mutex::new(None));
    let (snap_tx, snap_rx) = mpsc::channel();
    let (cmd_tx, handle) = game_loop::spawn_game_loop(engine, snap_tx, Arc::clone(&latest))?;

    let send_plan = |tx: &mpsc::Sender<GameLoopCommand>| {
        for cmd in autoplace::place_commands(plan) {
            let _ = tx.send(GameLoopCommand::Player(cmd));
        }
    };
    send_plan(&cmd_tx);

    let mut summary = RunSummary::default();
    let deadline = Instant::now() + Duration::from_secs_f64(seconds.max(0.0));
    let mut last_status = Instant::now();

    while Instant::now() < deadline {
        match snap_rx.recv_timeout(Duration::from_millis(100)) {
            Ok(snapshot) => {
                if summary.record(&snapshot.events) {
                    send_plan(&cmd_tx);
                }
                if last_status.elapsed() >= Duration::from_secs(1) {
                    let round = snapshot.round;
                    info!(
                        stage = round.stage,
                        kills = round.kills,
                        escapes = round.escapes,
                        monsters = snapshot.monsters.len(),
                        "status"
                    );
                    last_status = Instant::now();
                }
                if snapshot.round.phase == RoundPhase::AllStagesComplete {
                    break;
                }
            }
            Err(mpsc::RecvTimeoutError::Timeout) => continue,
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    let _ = cmd_tx.send(GameLoopCommand::Shutdown);
    handle.join().map_err(|_| "game loop thread panicked")?;

    let snapshot = latest
        .lock()
        .map_err(|_| "snapshot lock poisoned")?
        .take()
        .unwrap_or_default();
    Ok((snapshot, summary))
}

fn print_summary(snapshot: &GameStateSnapshot, summary: &RunSummary) {
    let round = snapshot.round;
    println!("=== Simulation Complete ===");
    println!("Frames: {}", summary.frames);
    println!("Simulated time: {:.1}s", snapshot.time.elapsed_ms / 1000.0);
    println!("Phase: {:?}", round.phase);
    println!("Stage: {} (kills {}, escapes {})", round.stage, round.kills, round.escapes);
    println!("Stages won: {}", summary.stages_won);
    println!("Stages lost: {}", summary.stages_lost);
    println!("Monsters spawned: {}", summary.spawned);
    println!("Monsters killed: {}", summary.kills);
    println!("Monsters escaped: {}", summary.escapes);
    println!("Shots fired: {} ({} fizzled)", summary.shots, summary.fizzles);
    println!("Towers standing: {}", snapshot.towers.len());
    if summary.rejected_placements > 0 {
        println!("Rejected placements: {}", summary.rejected_placements);
    }
}
