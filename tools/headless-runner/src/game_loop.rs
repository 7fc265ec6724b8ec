//! Game loop thread. Drives the simulation engine from the wall clock.
//!
//! The engine is moved into this thread and owned there. Commands arrive via
//! an `mpsc` channel. Every snapshot is sent back on a second channel and the
//! most recent one is stored in shared state for synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::debug;

use bulwark_core::commands::PlayerCommand;
use bulwark_core::state::GameStateSnapshot;
use bulwark_sim::SimulationEngine;

/// Target frame rate of the loop.
const FRAME_RATE: u64 = 60;

/// Nominal duration of one frame.
const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE);

/// Messages accepted by the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    Player(PlayerCommand),
    Shutdown,
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop(
    engine: SimulationEngine,
    snapshot_tx: mpsc::Sender<GameStateSnapshot>,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> std::io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("bulwark-game-loop".into())
        .spawn(move || {
            run_game_loop(engine, cmd_rx, snapshot_tx, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown, or until either channel disconnects.
fn run_game_loop(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    snapshot_tx: mpsc::Sender<GameStateSnapshot>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let mut last_frame = Instant::now();
    let mut next_frame_time = last_frame;

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => {
                    debug!("game loop shutting down");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance by the real time since the last frame; the engine clamps and scales it
        let now = Instant::now();
        let delta_ms = now.duration_since(last_frame).as_secs_f64() * 1000.0;
        last_frame = now;
        let snapshot = engine.tick(delta_ms);

        // 3. Publish
        if snapshot_tx.send(snapshot.clone()).is_err() {
            return;
        }
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next frame
        next_frame_time += FRAME_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > FRAME_DURATION * 2 {
            // Too far behind, reset to avoid a catch-up spiral
            next_frame_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulwark_core::events::GameEvent;
    use bulwark_core::types::TowerId;
    use bulwark_sim::SimConfig;

    fn spawn_default() -> (
        mpsc::Sender<GameLoopCommand>,
        mpsc::Receiver<GameStateSnapshot>,
        Arc<Mutex<Option<GameStateSnapshot>>>,
        JoinHandle<()>,
    ) {
        let engine = SimulationEngine::new(SimConfig::default()).unwrap();
        let (snap_tx, snap_rx) = mpsc::channel();
        let latest = Arc::new(Mutex::new(None));
        let (cmd_tx, handle) = spawn_game_loop(engine, snap_tx, Arc::clone(&latest)).unwrap();
        (cmd_tx, snap_rx, latest, handle)
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Player(PlayerCommand::Pause)).unwrap();
        tx.send(GameLoopCommand::Player(PlayerCommand::Restart)).unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let commands: Vec<GameLoopCommand> = rx.try_iter().collect();

        assert_eq!(commands.len(), 3);
        assert!(matches!(commands[0], GameLoopCommand::Player(PlayerCommand::Pause)));
        assert!(matches!(commands[1], GameLoopCommand::Player(PlayerCommand::Restart)));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_loop_applies_commands_and_shuts_down() {
        let (cmd_tx, snap_rx, latest, handle) = spawn_default();

        cmd_tx
            .send(GameLoopCommand::Player(PlayerCommand::PlaceTower { x: 300.0, y: 200.0 }))
            .unwrap();

        let placed = snap_rx.iter().take(120).any(|snap| {
            snap.events
                .iter()
                .any(|e| matches!(e, GameEvent::TowerPlaced { tower: TowerId(0), .. }))
        });
        assert!(placed, "Tower placement never appeared in a snapshot");

        cmd_tx.send(GameLoopCommand::Shutdown).unwrap();
        handle.join().unwrap();

        let last = latest.lock().unwrap().clone().unwrap();
        assert_eq!(last.towers.len(), 1);
    }

    #[test]
    fn test_loop_exits_when_receiver_dropped() {
        let (_cmd_tx, snap_rx, _latest, handle) = spawn_default();
        drop(snap_rx);
        handle.join().unwrap();
    }

    #[test]
    fn test_frame_duration_constant() {
        // 60Hz = 16.667ms per frame
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(FRAME_DURATION.as_nanos(), expected_nanos as u128);
    }
}
