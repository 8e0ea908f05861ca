//! The wall computation pipeline.
//!
//! One pass runs hull classification, clustering, candidate generation, and
//! selection under a single ramp assumption. `find_wall` runs the
//! ramp-present pass first and falls back to the inverted assumption.

pub mod candidate;
pub mod carve;
pub mod cluster;
pub mod hull;
pub mod select;

use crate::location::*;
use crate::map_data::MapQuery;
use crate::visual::WallObserver;
use candidate::*;
use cluster::*;
use hull::*;
use log::*;
use select::*;
use serde::{Deserialize, Serialize};

/// Which way the ramp predicate is read during a pass.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub enum RampAssumption {
    /// The choke opens onto a ramp; live cells must touch one.
    RampPresent,
    /// The choke has no ramp; the predicate is inverted.
    NoRamp,
}

impl RampAssumption {
    /// Apply the assumption to a cell's ramp flag.
    #[inline]
    pub fn accepts(self, is_ramp: bool) -> bool {
        match self {
            RampAssumption::RampPresent => is_ramp,
            RampAssumption::NoRamp => !is_ramp,
        }
    }

    pub fn inverted(self) -> Self {
        match self {
            RampAssumption::RampPresent => RampAssumption::NoRamp,
            RampAssumption::NoRamp => RampAssumption::RampPresent,
        }
    }
}

/// Outcome of a successful pass.
#[derive(Clone, Debug, PartialEq)]
pub struct WallSelection {
    pub wall: CandidateWall,
    pub assumption: RampAssumption,
    pub live_diameter: f32,
}

/// Run the full pipeline once under `assumption`.
pub fn run_pass<M, O>(
    hull: &[GridCell],
    map: &M,
    assumption: RampAssumption,
    observer: &mut O,
) -> Option<WallSelection>
where
    M: MapQuery + ?Sized,
    O: WallObserver + ?Sized,
{
    let blocked = obstacle_cells(map);

    let partition = classify_hull(hull, map, assumption, &blocked);
    observer.hull_classified(assumption, &partition);

    if partition.live.is_empty() {
        debug!("Pass {:?}: no live hull", assumption);
        return None;
    }

    let live_diameter = partition.live_diameter();
    let clusters = cluster_dead_hull(&partition.dead, live_diameter);
    observer.clusters_formed(assumption, &clusters);

    let candidates = generate_candidates(&clusters, &partition.live, map, assumption, &blocked);
    observer.candidates_generated(assumption, &candidates);

    let selected = select_shortest(candidates, live_diameter)?;
    debug!(
        "Pass {:?}: selected wall of length {} (diameter {:.2})",
        assumption, selected.length, live_diameter
    );

    Some(WallSelection {
        wall: selected,
        assumption,
        live_diameter,
    })
}

/// Find the region wall, retrying with the ramp assumption inverted when
/// `retry_without_ramp` is set. `None` is the recognized "undefended choke"
/// state.
pub fn find_wall<M, O>(
    hull: &[GridCell],
    map: &M,
    retry_without_ramp: bool,
    observer: &mut O,
) -> Option<WallSelection>
where
    M: MapQuery + ?Sized,
    O: WallObserver + ?Sized,
{
    let first = RampAssumption::RampPresent;
    run_pass(hull, map, first, observer).or_else(|| {
        if retry_without_ramp {
            run_pass(hull, map, first.inverted(), observer)
        } else {
            None
        }
    })
}
