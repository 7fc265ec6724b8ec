//! Tower placement validation.

use bulwark_core::enums::PlacementRejection;
use bulwark_core::paths::Path;
use bulwark_core::types::Position;

use crate::config::SimConfig;

/// Check whether a tower may stand at `point`.
///
/// Rejections are ordinary results for the UI to show, not errors.
pub fn check_placement(
    point: &Position,
    path: &Path,
    existing_towers: &[Position],
    config: &SimConfig,
) -> Result<(), PlacementRejection> {
    let in_bounds = (0.0..=config.world_width).contains(&point.x)
        && (0.0..=config.world_height).contains(&point.y);
    if !in_bounds {
        return Err(PlacementRejection::OutOfBounds);
    }

    if path.distance_to(point) < config.tower.min_path_clearance {
        return Err(PlacementRejection::TooCloseToPath);
    }

    if existing_towers
        .iter()
        .any(|tower| tower.range_to(point) < config.tower.min_spacing)
    {
        return Err(PlacementRejection::Occupied);
    }

    Ok(())
}
