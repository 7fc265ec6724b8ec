//! Seeded tower auto-placement for unattended runs.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use bulwark_core::commands::PlayerCommand;
use bulwark_core::error::ConfigError;
use bulwark_core::types::Position;
use bulwark_sim::placement::check_placement;
use bulwark_sim::SimConfig;

/// Candidate draws per requested tower before giving up on it.
const ATTEMPTS_PER_TOWER: usize = 200;

/// Pick up to `count` valid tower sites along the stage 1 path.
///
/// Candidates are drawn around random points on the path, between the
/// minimum clearance and half the tower range away from it, so every
/// tower covers some of the route.
pub fn plan_towers(config: &SimConfig, count: usize, seed: u64) -> Result<Vec<Position>, ConfigError> {
    let path = config.stage_path(1)?;
    let segments: Vec<(Position, Position)> = path
        .waypoints()
        .windows(2)
        .map(|seg| (seg[0], seg[1]))
        .collect();

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut chosen: Vec<Position> = Vec::with_capacity(count);
    let clearance = config.tower.min_path_clearance;
    let reach = (config.tower.range / 2.0).max(clearance + 1.0);

    for _ in 0..count * ATTEMPTS_PER_TOWER {
        if chosen.len() >= count {
            break;
        }

        let (a, b) = segments[rng.gen_range(0..segments.len())];
        let t: f64 = rng.gen_range(0.0..=1.0);
        let anchor = Position::from_vec(a.to_vec().lerp(b.to_vec(), t));
        let angle: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
        let radius: f64 = rng.gen_range(clearance..reach);
        let candidate = Position::new(
            anchor.x + radius * angle.cos(),
            anchor.y + radius * angle.sin(),
        );

        if check_placement(&candidate, path, &chosen, config).is_ok() {
            chosen.push(candidate);
        }
    }

    Ok(chosen)
}

/// Placement commands for a tower plan.
pub fn place_commands(plan: &[Position]) -> impl Iterator<Item = PlayerCommand> + '_ {
    plan.iter()
        .map(|p| PlayerCommand::PlaceTower { x: p.x, y: p.y })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_is_seeded_and_valid() {
        let config = SimConfig::default();
        let a = plan_towers(&config, 6, 42).unwrap();
        let b = plan_towers(&config, 6, 42).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 6);

        let path = config.stage_path(1).unwrap();
        for (i, site) in a.iter().enumerate() {
            assert!(check_placement(site, path, &a[..i], &config).is_ok());
        }
    }

    #[test]
    fn test_zero_towers() {
        let plan = plan_towers(&SimConfig::default(), 0, 1).unwrap();
        assert!(plan.is_empty());
    }
}
