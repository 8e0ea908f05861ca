//! Public API for wall planning.
//!
//! `WallPlanner` is a small fluent builder holding the tuning. A region's wall
//! is computed at most once: the first call runs the pipeline, stores the
//! result on the region and carves its area fill, and later calls return the
//! stored wall untouched.

use crate::config::WallConfig;
use crate::error::*;
use crate::footprint::StructureType;
use crate::location::*;
use crate::map_data::MapQuery;
use crate::pipeline::carve::carve_area_fill;
use crate::pipeline::find_wall;
use crate::placement::support::needs_support;
use crate::placement::{support_candidates, SupportCandidates, WallSequencer};
use crate::region::{Region, RegionId, RegionRegistry};
use crate::visual::{NoopObserver, WallObserver};
use log::*;

#[derive(Clone, Debug, Default)]
pub struct WallPlanner {
    config: WallConfig,
}

impl WallPlanner {
    pub fn new() -> Self {
        WallPlanner::default()
    }

    pub fn config(mut self, config: WallConfig) -> Self {
        self.config = config;
        self
    }

    pub fn settings(&self) -> &WallConfig {
        &self.config
    }

    /// Compute the region's wall if it has not been computed yet.
    ///
    /// `Ok(None)` means no acceptable wall exists; that result is not cached,
    /// so a later call retries against the then-current map.
    pub fn compute_wall<'r, M, O>(
        &self,
        region: &'r mut Region,
        map: &M,
        observer: &mut O,
    ) -> Result<Option<&'r [GridCell]>>
    where
        M: MapQuery + ?Sized,
        O: WallObserver + ?Sized,
    {
        if region.has_wall() {
            debug!("Region {}: wall already computed", region.id);
            return Ok(region.wall());
        }
        if region.hull.is_empty() {
            return Err(WallError::EmptyHull { region: region.id });
        }
        self.config.validate()?;

        let selection = match find_wall(&region.hull, map, self.config.retry_without_ramp, observer) {
            Some(selection) => selection,
            None => {
                debug!("Region {}: no wall found", region.id);
                return Ok(None);
            }
        };

        debug!(
            "Region {}: wall of {} cells ({:?})",
            region.id, selection.wall.length, selection.assumption
        );
        let wall = selection.wall.cells;
        observer.wall_selected(region.id, &wall);

        let before = region.area_fill.len();
        region.area_fill = carve_area_fill(&region.area_fill, &wall, region.townhall_position);
        let kept = region.area_fill.len();
        observer.area_carved(region.id, kept, before - kept);

        region.set_wall(wall);
        Ok(region.wall())
    }

    /// Look the region up and compute its wall on first request.
    pub fn ensure_wall<'r, M, O>(
        &self,
        registry: &'r mut RegionRegistry,
        id: RegionId,
        map: &M,
        observer: &mut O,
    ) -> Result<Option<&'r [GridCell]>>
    where
        M: MapQuery + ?Sized,
        O: WallObserver + ?Sized,
    {
        let region = registry.get_mut(id).ok_or(WallError::UnknownRegion(id))?;
        self.compute_wall(region, map, observer)
    }

    /// Sequencer over the region's wall using this planner's gap sizing.
    pub fn sequencer(&self, region: &Region) -> Option<WallSequencer> {
        WallSequencer::for_region(region, &self.config)
    }

    /// Support positions for the region's wall, or `None` when a support
    /// structure among `structures` is already in sight.
    pub fn support_positions(
        &self,
        region: &Region,
        structures: &[(StructureType, GridCell)],
    ) -> Option<SupportCandidates> {
        let wall = region.wall()?;
        let supports: Vec<GridCell> = structures
            .iter()
            .filter(|(kind, _)| kind.is_support())
            .map(|(_, position)| *position)
            .collect();
        if !needs_support(wall, &supports, self.config.support_sight_range) {
            return None;
        }
        Some(support_candidates(region, &self.config))
    }
}

/// Compute a region's wall with default settings and no observer.
pub fn plan_region_wall<'r, M: MapQuery + ?Sized>(
    region: &'r mut Region,
    map: &M,
) -> Result<Option<&'r [GridCell]>> {
    WallPlanner::new().compute_wall(region, map, &mut NoopObserver)
}
