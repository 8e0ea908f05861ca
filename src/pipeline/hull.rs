//! Hull classification: splits a region's forward hull into live cells (open
//! boundary a wall can span) and dead cells (unpathable terrain the wall
//! anchors on).
//!
//! Cardinal neighbors decide dead contributions and the ramp test for live
//! cells. Diagonal neighbors take part in the unpathable check and the
//! obstacle check only.

use super::RampAssumption;
use crate::location::*;
use crate::map_data::MapQuery;
use fnv::FnvHashSet;
use log::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HullPartition {
    /// Walkable boundary cells, in hull order.
    pub live: Vec<GridCell>,
    /// Unpathable anchor cells next to the hull, in first-seen order.
    pub dead: Vec<GridCell>,
}

impl HullPartition {
    /// Largest pairwise distance between live cells; 0 below two cells.
    pub fn live_diameter(&self) -> f32 {
        live_hull_diameter(&self.live)
    }
}

pub fn live_hull_diameter(live: &[GridCell]) -> f32 {
    let mut diameter = 0.0f32;
    for (i, a) in live.iter().enumerate() {
        for b in &live[i + 1..] {
            diameter = diameter.max(a.distance_to(*b));
        }
    }
    diameter
}

/// Every cell covered by a known obstacle footprint.
pub fn obstacle_cells<M: MapQuery + ?Sized>(map: &M) -> FnvHashSet<GridCell> {
    map.obstacles().iter().flat_map(|o| o.cells()).collect()
}

pub fn classify_hull<M: MapQuery + ?Sized>(
    hull: &[GridCell],
    map: &M,
    assumption: RampAssumption,
    blocked: &FnvHashSet<GridCell>,
) -> HullPartition {
    let ramp_test = |cell: GridCell| map.in_bounds(cell) && assumption.accepts(map.is_ramp(cell));

    let mut live = Vec::new();
    let mut dead = Vec::new();
    let mut seen_dead: FnvHashSet<GridCell> = FnvHashSet::default();

    for &cell in hull {
        let cardinal = map.neighbors_of(cell, false);
        let diagonal: Vec<GridCell> = cell
            .diagonal_neighbors()
            .filter(|n| map.in_bounds(*n))
            .collect();

        let dead_cardinal: Vec<GridCell> = cardinal
            .iter()
            .copied()
            .filter(|n| !map.is_pathable(*n))
            .collect();
        let any_dead_diagonal = diagonal.iter().any(|n| !map.is_pathable(*n));

        if dead_cardinal.is_empty() && !any_dead_diagonal {
            let touches_ramp = cardinal.iter().any(|n| ramp_test(*n));
            let touches_obstacle = cardinal
                .iter()
                .chain(diagonal.iter())
                .any(|n| blocked.contains(n));

            if touches_ramp && !touches_obstacle && !blocked.contains(&cell) {
                live.push(cell);
            }
            continue;
        }

        for anchor in dead_cardinal {
            if blocked.contains(&anchor) || seen_dead.contains(&anchor) {
                continue;
            }
            let near_ramp = map
                .neighbors_of(anchor, true)
                .into_iter()
                .any(|n| ramp_test(n));
            if near_ramp {
                seen_dead.insert(anchor);
                dead.push(anchor);
            }
        }
    }

    debug!(
        "Hull classified ({:?}): hull={}, live={}, dead={}",
        assumption,
        hull.len(),
        live.len(),
        dead.len()
    );

    HullPartition { live, dead }
}
