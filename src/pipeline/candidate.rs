//! Candidate walls between every pair of dead-hull clusters.
//!
//! For each pair the closest cells are joined by a Bresenham reference line.
//! The line is only a seed: the wall itself comes from an A* search over
//! placeable cells with both anchors forced open, so it bends around terrain
//! the straight line would cross.

use super::cluster::Cluster;
use super::RampAssumption;
use crate::location::*;
use crate::map_data::MapQuery;
use crate::raster::*;
use crate::search::*;
use fnv::FnvHashSet;
use itertools::Itertools;
use log::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CandidateWall {
    /// Wall cells, endpoint to endpoint, anchors excluded.
    pub cells: Vec<GridCell>,
    pub length: usize,
    /// Distance between the wall's centroid and the live hull's centroid.
    pub centroid_distance_to_live_hull: f32,
    /// The straight line the search was seeded with, anchors included.
    pub reference_line: Vec<GridCell>,
    /// Indices of the two clusters this wall joins.
    pub clusters: (usize, usize),
}

/// Build the walkability mask for a pass: placeable cells outside obstacles,
/// and outside ramps unless the pass ignores ramps.
pub fn wall_walk_grid<M: MapQuery + ?Sized>(
    map: &M,
    assumption: RampAssumption,
    blocked: &FnvHashSet<GridCell>,
) -> WalkGrid {
    WalkGrid::from_placement(map, |cell| {
        blocked.contains(&cell) || (assumption == RampAssumption::RampPresent && map.is_ramp(cell))
    })
}

/// Search a single wall between two anchor cells.
///
/// Anchors are stripped when not placeable. Any other unplaceable cell, or
/// an empty result, rejects the wall.
pub fn route_wall<M: MapQuery + ?Sized>(
    base_grid: &WalkGrid,
    map: &M,
    from: GridCell,
    to: GridCell,
) -> Option<Vec<GridCell>> {
    let mut grid = base_grid.clone();
    grid.force_walkable(from);
    grid.force_walkable(to);

    let path = find_grid_path(&grid, from, to)?;
    let last = path.len().saturating_sub(1);

    let mut cells = Vec::with_capacity(path.len());
    for (i, cell) in path.into_iter().enumerate() {
        let is_anchor = i == 0 || i == last;
        if map.is_placeable(cell) {
            cells.push(cell);
        } else if !is_anchor {
            trace!("Wall path through unplaceable cell {:?} discarded", cell);
            return None;
        }
    }

    if cells.is_empty() {
        None
    } else {
        Some(cells)
    }
}

pub fn generate_candidates<M: MapQuery + ?Sized>(
    clusters: &[Cluster],
    live_hull: &[GridCell],
    map: &M,
    assumption: RampAssumption,
    blocked: &FnvHashSet<GridCell>,
) -> Vec<CandidateWall> {
    let live_centroid = match Centroid::mean_of(live_hull) {
        Some(c) => c,
        None => return Vec::new(),
    };

    let base_grid = wall_walk_grid(map, assumption, blocked);

    let candidates: Vec<CandidateWall> = (0..clusters.len())
        .tuple_combinations()
        .filter_map(|(i, j)| {
            let (from, to) = closest_pair(&clusters[i].cells, &clusters[j].cells)?;
            let reference_line = bresenham(from, to);

            let cells = match route_wall(&base_grid, map, from, to) {
                Some(cells) => cells,
                None => {
                    trace!(
                        "No wall between clusters {} and {} ({:?} -> {:?})",
                        i,
                        j,
                        from,
                        to
                    );
                    return None;
                }
            };

            let centroid = Centroid::mean_of(&cells)?;
            Some(CandidateWall {
                length: cells.len(),
                centroid_distance_to_live_hull: centroid.distance_to(live_centroid),
                cells,
                reference_line,
                clusters: (i, j),
            })
        })
        .collect();

    debug!(
        "Candidate walls ({:?}): clusters={}, candidates={}",
        assumption,
        clusters.len(),
        candidates.len()
    );

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::cluster::cluster_dead_hull;
    use crate::pipeline::hull::classify_hull;
    use crate::terrain::FastMapGrid;

    fn choke() -> FastMapGrid {
        FastMapGrid::from_ascii(&[
            "###/////###",
            "###/////###",
            "##.......##",
            "#.........#",
            "#.........#",
            "###########",
        ])
        .unwrap()
    }

    #[test]
    fn detours_around_the_ramp() {
        let map = choke();
        let hull: Vec<_> = (2..=8).map(|x| GridCell::new(x, 2)).collect();
        let blocked = FnvHashSet::default();
        let partition = classify_hull(&hull, &map, RampAssumption::RampPresent, &blocked);
        let clusters = cluster_dead_hull(&partition.dead, partition.live_diameter());
        assert_eq!(clusters.len(), 2);

        let candidates =
            generate_candidates(&clusters, &partition.live, &map, RampAssumption::RampPresent, &blocked);
        assert_eq!(candidates.len(), 1);

        let wall = &candidates[0];
        assert_eq!(wall.length, 5);
        assert_eq!(wall.cells.first(), Some(&GridCell::new(3, 2)));
        assert_eq!(wall.cells.last(), Some(&GridCell::new(7, 2)));
        assert!(wall.cells.iter().all(|c| map.is_placeable(*c)));
        // The straight reference runs along the ramp; the wall does not.
        assert!(wall.reference_line.iter().all(|c| c.y() == 1));
        assert!(wall.cells.iter().all(|c| c.y() >= 2));
        assert!(wall.centroid_distance_to_live_hull <= 1.0);
    }

    #[test]
    fn single_cluster_yields_nothing() {
        let map = choke();
        let clusters = cluster_dead_hull(&[GridCell::new(2, 1)], 2.0);
        let live = [GridCell::new(4, 2), GridCell::new(6, 2)];
        let candidates = generate_candidates(
            &clusters,
            &live,
            &map,
            RampAssumption::RampPresent,
            &FnvHashSet::default(),
        );
        assert!(candidates.is_empty());
    }

    #[test]
    fn route_rejects_adjacent_anchors() {
        let map = choke();
        let grid = wall_walk_grid(&map, RampAssumption::RampPresent, &FnvHashSet::default());
        assert!(route_wall(&grid, &map, GridCell::new(0, 0), GridCell::new(1, 0)).is_none());
    }

    #[test]
    fn obstacles_close_the_walk_grid() {
        let map = choke();
        let blocked: FnvHashSet<GridCell> = (2..=4).map(|y| GridCell::new(5, y)).collect();
        let grid = wall_walk_grid(&map, RampAssumption::RampPresent, &blocked);
        assert!(route_wall(&grid, &map, GridCell::new(2, 1), GridCell::new(8, 1)).is_none());
    }
}
