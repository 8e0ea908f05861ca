use crate::location::*;
use crate::pipeline::candidate::CandidateWall;
use crate::pipeline::cluster::Cluster;
use crate::pipeline::hull::HullPartition;
use crate::pipeline::RampAssumption;
use crate::region::RegionId;

/// Hooks invoked after each wall-planning stage completes, for debug drawing
/// or diagnostics. Every hook defaults to doing nothing.
pub trait WallObserver {
    fn hull_classified(&mut self, _assumption: RampAssumption, _partition: &HullPartition) {}

    fn clusters_formed(&mut self, _assumption: RampAssumption, _clusters: &[Cluster]) {}

    fn candidates_generated(&mut self, _assumption: RampAssumption, _candidates: &[CandidateWall]) {}

    fn wall_selected(&mut self, _region: RegionId, _wall: &[GridCell]) {}

    fn area_carved(&mut self, _region: RegionId, _kept: usize, _removed: usize) {}
}

pub struct NoopObserver;

impl WallObserver for NoopObserver {}
