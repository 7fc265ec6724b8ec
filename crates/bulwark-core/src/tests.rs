#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::constants::*;
    use crate::enums::*;
    use crate::error::ConfigError;
    use crate::events::GameEvent;
    use crate::paths::{default_stages, stage_path, Path, STAGE_COUNT};
    use crate::state::GameStateSnapshot;
    use crate::types::{distance_to_segment, MonsterId, Position, SimTime, TowerId};

    // ---- Geometry ----

    #[test]
    fn test_range_to() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.range_to(&b) - 5.0).abs() < 1e-12);
        assert!((b.range_to(&a) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_step_toward_never_overshoots() {
        let mut p = Position::new(0.0, 0.0);
        let target = Position::new(10.0, 0.0);

        let remaining = p.step_toward(&target, 4.0);
        assert!((p.x - 4.0).abs() < 1e-12);
        assert!((remaining - 6.0).abs() < 1e-12);

        let remaining = p.step_toward(&target, 100.0);
        assert_eq!(p, target);
        assert_eq!(remaining, 0.0);
    }

    #[test]
    fn test_segment_distance_projection_and_clamp() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(100.0, 0.0);

        // Projection falls inside the segment.
        let d = distance_to_segment(&Position::new(50.0, 30.0), &a, &b);
        assert!((d - 30.0).abs() < 1e-12);

        // Projection clamps to the endpoints.
        let d = distance_to_segment(&Position::new(-30.0, 40.0), &a, &b);
        assert!((d - 50.0).abs() < 1e-12);
        let d = distance_to_segment(&Position::new(130.0, 40.0), &a, &b);
        assert!((d - 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_segment_distance_degenerate_segment() {
        let a = Position::new(10.0, 10.0);
        let d = distance_to_segment(&Position::new(13.0, 14.0), &a, &a);
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        time.advance(16.0);
        time.advance(20.0);
        assert_eq!(time.tick, 2);
        assert!((time.elapsed_ms - 36.0).abs() < 1e-12);
    }

    // ---- Paths ----

    #[test]
    fn test_predefined_stages_are_valid() {
        let stages = default_stages();
        assert_eq!(stages.len() as u32, STAGE_COUNT);
        for path in &stages {
            assert!(path.len() >= 2);
            for wp in path.waypoints() {
                assert!((0.0..=WORLD_WIDTH).contains(&wp.x));
                assert!((0.0..=WORLD_HEIGHT).contains(&wp.y));
            }
        }
    }

    #[test]
    fn test_unknown_stage_is_config_error() {
        assert!(matches!(stage_path(0), Err(ConfigError::UnknownStage(0))));
        assert!(matches!(stage_path(4), Err(ConfigError::UnknownStage(4))));
        assert!(stage_path(3).is_ok());
    }

    #[test]
    fn test_path_requires_two_waypoints() {
        let err = Path::new(vec![Position::new(1.0, 1.0)]).unwrap_err();
        assert!(matches!(err, ConfigError::PathTooShort { len: 1 }));
        assert!(Path::new(vec![]).is_err());
    }

    #[test]
    fn test_path_deserialize_validates_length() {
        let ok: Path = serde_json::from_str(r#"[{"x":0,"y":0},{"x":10,"y":0}]"#).unwrap();
        assert_eq!(ok.len(), 2);
        assert_eq!(ok.last_index(), 1);
        assert!((ok.length() - 10.0).abs() < 1e-12);

        let short: Result<Path, _> = serde_json::from_str(r#"[{"x":0,"y":0}]"#);
        assert!(short.is_err());
    }

    #[test]
    fn test_path_distance_uses_closest_segment() {
        let path = stage_path(1).unwrap();
        // Sits on the first segment (y = 100).
        assert!(path.distance_to(&Position::new(300.0, 100.0)) < 1e-9);
        // 50 px below the first segment, 150 px above the second horizontal run.
        let d = path.distance_to(&Position::new(300.0, 150.0));
        assert!((d - 50.0).abs() < 1e-9);
    }

    // ---- Enums ----

    #[test]
    fn test_round_phase_is_playing() {
        assert!(RoundPhase::Spawning.is_playing());
        assert!(RoundPhase::Active.is_playing());
        assert!(!RoundPhase::StageWon.is_playing());
        assert!(!RoundPhase::StageLost.is_playing());
        assert!(!RoundPhase::AllStagesComplete.is_playing());
    }

    #[test]
    fn test_wave_constants_always_resolve() {
        // Every wave must end in either a win or a loss.
        assert!(MAX_PER_WAVE + 1 >= KILL_TARGET + ESCAPE_LIMIT);
    }

    // ---- Serde ----

    /// PlayerCommand uses an internally tagged representation.
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::PlaceTower { x: 10.0, y: 20.0 },
            PlayerCommand::Pause,
            PlayerCommand::Resume,
            PlayerCommand::Restart,
            PlayerCommand::SetTimeScale { scale: 2.0 },
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since PlayerCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }

        let parsed: PlayerCommand =
            serde_json::from_str(r#"{"type":"PlaceTower","x":5.0,"y":6.0}"#).unwrap();
        assert!(matches!(parsed, PlayerCommand::PlaceTower { x, y } if x == 5.0 && y == 6.0));
    }

    #[test]
    fn test_game_event_tagging() {
        let event = GameEvent::MonsterKilled {
            monster: MonsterId(7),
            by: TowerId(2),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "MonsterKilled");
        assert_eq!(json["monster"], 7);
        assert_eq!(json["by"], 2);

        let rejected = GameEvent::PlacementRejected {
            position: Position::new(1.0, 2.0),
            reason: PlacementRejection::TooCloseToPath,
        };
        let json = serde_json::to_string(&rejected).unwrap();
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rejected);
    }

    #[test]
    fn test_default_snapshot_is_empty() {
        let snapshot = GameStateSnapshot::default();
        assert_eq!(snapshot.round.phase, RoundPhase::Spawning);
        assert!(snapshot.monsters.is_empty());
        assert!(snapshot.pending_transition.is_none());
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"round\""));
    }

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::UnresolvableWave {
            max_per_wave: 5,
            kill_target: 20,
            escape_limit: 3,
        };
        assert!(err.to_string().contains("5 monsters"));
        assert_eq!(
            ConfigError::UnknownStage(9).to_string(),
            "stage 9 does not exist"
        );
    }
}
