//! Fallback placement for the supply/power structure that enables building
//! along the wall.

use super::PlacementCandidate;
use crate::config::WallConfig;
use crate::location::*;
use crate::region::Region;
use log::*;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub enum SupportBand {
    /// Every wall cell lies inside the band.
    Strict,
    /// Ranked by how many wall cells lie inside the relaxed band.
    Relaxed,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SupportCandidates {
    pub band: SupportBand,
    pub positions: Vec<PlacementCandidate>,
}

impl SupportCandidates {
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        self.positions.iter().map(|p| p.position)
    }

    /// Pick one position uniformly. Selection is left to the caller's RNG so
    /// replays stay deterministic under a seeded generator.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<GridCell> {
        self.positions.choose(rng).map(|p| p.position)
    }
}

fn within(distance: f32, min: f32, max: f32) -> bool {
    distance >= min && distance <= max
}

/// True when no existing support structure is strictly within `sight_range`
/// of the wall centroid.
pub fn needs_support(wall: &[GridCell], supports: &[GridCell], sight_range: f32) -> bool {
    let centroid = match Centroid::mean_of(wall) {
        Some(centroid) => centroid,
        None => return false,
    };

    !supports
        .iter()
        .any(|s| centroid.distance_to_cell(*s) < sight_range)
}

/// Front cells whose distance to every wall cell is within `[min, max]`.
pub fn strict_band(front: &[GridCell], wall: &[GridCell], min: f32, max: f32) -> Vec<GridCell> {
    if wall.is_empty() {
        return Vec::new();
    }

    front
        .iter()
        .copied()
        .filter(|f| wall.iter().all(|w| within(f.distance_to(*w), min, max)))
        .collect()
}

/// Front cells tied at the highest count of wall cells within `[min, max]`.
/// A best count of zero yields nothing.
pub fn relaxed_band(
    front: &[GridCell],
    wall: &[GridCell],
    min: f32,
    max: f32,
) -> Vec<PlacementCandidate> {
    let scored: Vec<PlacementCandidate> = front
        .iter()
        .map(|f| {
            let coverage = wall
                .iter()
                .filter(|w| within(f.distance_to(**w), min, max))
                .count();
            PlacementCandidate::new(*f, coverage)
        })
        .collect();

    let best = scored.iter().map(|c| c.coverage).max().unwrap_or(0);
    if best == 0 {
        return Vec::new();
    }

    scored.into_iter().filter(|c| c.coverage == best).collect()
}

/// Candidate positions for a support structure near the region's wall. Falls
/// back to the relaxed band when the strict band is empty; an empty result is
/// left to the caller.
pub fn support_candidates(region: &Region, config: &WallConfig) -> SupportCandidates {
    let wall = match region.wall() {
        Some(wall) if !wall.is_empty() => wall,
        _ => {
            return SupportCandidates {
                band: SupportBand::Strict,
                positions: Vec::new(),
            }
        }
    };

    let strict = strict_band(
        &region.front_cells,
        wall,
        config.support_min_distance,
        config.support_max_distance,
    );
    if !strict.is_empty() {
        debug!("Region {}: {} strict support positions", region.id, strict.len());
        return SupportCandidates {
            band: SupportBand::Strict,
            positions: strict
                .into_iter()
                .map(|c| PlacementCandidate::new(c, wall.len()))
                .collect(),
        };
    }

    let relaxed = relaxed_band(
        &region.front_cells,
        wall,
        config.relaxed_min_distance,
        config.support_max_distance,
    );
    debug!("Region {}: {} relaxed support positions", region.id, relaxed.len());

    SupportCandidates {
        band: SupportBand::Relaxed,
        positions: relaxed,
    }
}
