//! Wall construction sequencing.
//!
//! The sequencer owns the list of wall cells not yet covered by a building
//! and proposes, one request at a time, the placement covering the most of
//! them. A placement that would cover every remaining cell is never offered:
//! the finished wall keeps exactly one open cell. Confirmed placements are
//! reserved, so later proposals never overlap a queued building.

use super::PlacementCandidate;
use crate::config::WallConfig;
use crate::constants::*;
use crate::footprint::Footprint;
use crate::location::*;
use crate::map_data::MapQuery;
use crate::region::Region;
use fnv::FnvHashSet;
use log::*;

#[derive(Clone, Debug)]
pub struct WallSequencer {
    remaining: Vec<GridCell>,
    placed: Vec<(GridCell, Footprint)>,
    reserved: FnvHashSet<GridCell>,
    enforce_gap_sizing: bool,
}

impl WallSequencer {
    pub fn new(wall: &[GridCell]) -> Self {
        WallSequencer {
            remaining: wall.to_vec(),
            placed: Vec::new(),
            reserved: FnvHashSet::default(),
            enforce_gap_sizing: false,
        }
    }

    /// A sequencer for the region's wall, or `None` when no wall was found.
    pub fn for_region(region: &Region, config: &WallConfig) -> Option<Self> {
        region
            .wall()
            .map(|wall| WallSequencer::new(wall).with_gap_sizing(config.enforce_gap_sizing))
    }

    pub fn with_gap_sizing(mut self, enabled: bool) -> Self {
        self.enforce_gap_sizing = enabled;
        self
    }

    /// Wall cells not yet covered, in wall order.
    pub fn remaining(&self) -> &[GridCell] {
        &self.remaining
    }

    /// Confirmed placements, in order.
    pub fn placed(&self) -> &[(GridCell, Footprint)] {
        &self.placed
    }

    /// Only the reserved gap (or nothing) is left.
    pub fn is_complete(&self) -> bool {
        self.remaining.len() <= 1
    }

    /// Drop cells the map no longer reports as placeable, e.g. because a
    /// building finished on them.
    pub fn sync_with_map<M: MapQuery + ?Sized>(&mut self, map: &M) {
        let before = self.remaining.len();
        self.remaining.retain(|c| map.is_placeable(*c));
        if self.remaining.len() != before {
            debug!(
                "Wall sequencer synced: {} -> {} remaining",
                before,
                self.remaining.len()
            );
        }
    }

    /// Gap sizing: near the end of the wall only a specific building width
    /// fits the opening that remains.
    pub fn accepts_footprint(&self, footprint: Footprint) -> bool {
        if !self.enforce_gap_sizing {
            return true;
        }
        let (first, last) = match (self.remaining.first(), self.remaining.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return false,
        };
        let span = first.distance_to(last).round() as i32;

        if self.remaining.len() == 4 && span == GAP_SIZING_WIDE_SPAN {
            footprint.width == 3
        } else if span <= GAP_SIZING_NARROW_SPAN {
            footprint.width == 2
        } else {
            true
        }
    }

    /// Every acceptable placement for `footprint`, highest coverage first.
    pub fn ranked_placements<M: MapQuery + ?Sized>(
        &self,
        map: &M,
        footprint: Footprint,
    ) -> Vec<PlacementCandidate> {
        if self.is_complete() {
            return Vec::new();
        }
        if self.remaining.iter().all(|c| map.has_creep(*c)) {
            debug!("Wall sequencer: remaining wall is under creep");
            return Vec::new();
        }
        if !self.accepts_footprint(footprint) {
            trace!("Wall sequencer: footprint {:?} does not fit the gap", footprint);
            return Vec::new();
        }

        let mut seen: FnvHashSet<GridCell> = FnvHashSet::default();
        let mut anchors: Vec<GridCell> = Vec::new();
        for cell in &self.remaining {
            for anchor in footprint.anchors_covering(*cell) {
                if seen.insert(anchor) {
                    anchors.push(anchor);
                }
            }
        }

        let mut placements: Vec<PlacementCandidate> = anchors
            .into_iter()
            .filter(|anchor| {
                map.is_placeable_at(footprint, *anchor) && !self.overlaps_placed(footprint, *anchor)
            })
            .map(|anchor| PlacementCandidate::new(anchor, self.coverage_of(footprint, anchor)))
            .collect();
        placements.sort_by(|a, b| b.coverage.cmp(&a.coverage));

        let total = self.remaining.len();
        placements.retain(|p| p.coverage >= 1 && p.coverage < total);
        placements
    }

    pub fn next_placement<M: MapQuery + ?Sized>(
        &self,
        map: &M,
        footprint: Footprint,
    ) -> Option<PlacementCandidate> {
        self.ranked_placements(map, footprint).into_iter().next()
    }

    fn overlaps_placed(&self, footprint: Footprint, anchor: GridCell) -> bool {
        footprint.cells_at(anchor).any(|c| self.reserved.contains(&c))
    }

    fn coverage_of(&self, footprint: Footprint, anchor: GridCell) -> usize {
        self.remaining
            .iter()
            .filter(|c| footprint.contains(anchor, **c))
            .count()
    }

    /// Record an accepted placement and reserve its cells. Returns the number
    /// of wall cells it covered.
    pub fn confirm(&mut self, candidate: &PlacementCandidate, footprint: Footprint) -> usize {
        self.reserved.extend(footprint.cells_at(candidate.position));
        self.placed.push((candidate.position, footprint));

        let before = self.remaining.len();
        self.remaining
            .retain(|c| !footprint.contains(candidate.position, *c));
        let covered = before - self.remaining.len();
        debug!(
            "Wall placement at {:?} covered {} cells, {} remaining",
            candidate.position,
            covered,
            self.remaining.len()
        );
        covered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::FastMapGrid;
    use proptest::prelude::*;

    fn open_map() -> FastMapGrid {
        let rows: Vec<String> = (0..12).map(|_| ".".repeat(16)).collect();
        let refs: Vec<&str> = rows.iter().map(|r| r.as_str()).collect();
        FastMapGrid::from_ascii(&refs).unwrap()
    }

    fn line(y: i32, xs: std::ops::RangeInclusive<i32>) -> Vec<GridCell> {
        xs.map(|x| GridCell::new(x, y)).collect()
    }

    fn placed_cells_are_disjoint(sequencer: &WallSequencer) -> bool {
        let mut seen = FnvHashSet::default();
        sequencer
            .placed()
            .iter()
            .flat_map(|(anchor, footprint)| footprint.cells_at(*anchor))
            .all(|c| seen.insert(c))
    }

    #[test]
    fn prefers_highest_coverage() {
        let map = open_map();
        let sequencer = WallSequencer::new(&line(5, 3..=9));
        let best = sequencer.next_placement(&map, Footprint::new(3, 3)).unwrap();
        assert_eq!(best.coverage, 3);
    }

    #[test]
    fn never_seals_the_last_gap() {
        let map = open_map();
        let sequencer = WallSequencer::new(&line(5, 4..=6));
        let ranked = sequencer.ranked_placements(&map, Footprint::new(3, 3));
        assert!(!ranked.is_empty());
        assert!(ranked.iter().all(|p| p.coverage < 3));
        assert_eq!(ranked[0].coverage, 2);
    }

    #[test]
    fn runs_down_to_one_cell() {
        let map = open_map();
        let mut sequencer = WallSequencer::new(&line(5, 2..=12));
        let footprint = Footprint::new(3, 3);
        let mut steps = 0;
        while let Some(placement) = sequencer.next_placement(&map, footprint) {
            let covered = sequencer.confirm(&placement, footprint);
            assert_eq!(covered, placement.coverage);
            steps += 1;
            assert!(steps < 20);
        }
        assert_eq!(sequencer.remaining().len(), 1);
        assert!(sequencer.is_complete());
        assert_eq!(sequencer.placed().len(), 4);
        assert!(placed_cells_are_disjoint(&sequencer));
    }

    #[test]
    fn confirmed_placements_are_reserved() {
        let map = open_map();
        let footprint = Footprint::new(3, 3);
        let mut sequencer = WallSequencer::new(&line(5, 3..=7));

        let first = sequencer.next_placement(&map, footprint).unwrap();
        assert_eq!(first.coverage, 3);
        sequencer.confirm(&first, footprint);

        let ranked = sequencer.ranked_placements(&map, footprint);
        assert!(!ranked.is_empty());
        for candidate in &ranked {
            assert!(footprint
                .cells_at(candidate.position)
                .all(|c| !footprint.contains(first.position, c)));
        }

        sequencer.confirm(&ranked[0], footprint);
        assert!(placed_cells_are_disjoint(&sequencer));
        assert_eq!(sequencer.remaining().len(), 1);
    }

    #[test]
    fn respects_placeability() {
        let mut map = open_map();
        for y in 0..12 {
            for x in 0..16 {
                if y != 5 {
                    map.occupy(Footprint::new(1, 1), GridCell::new(x, y));
                }
            }
        }
        // Only the wall row is placeable; no 2x2 fits anywhere.
        let sequencer = WallSequencer::new(&line(5, 3..=8));
        assert!(sequencer.next_placement(&map, Footprint::new(2, 2)).is_none());
        assert!(sequencer.next_placement(&map, Footprint::new(1, 1)).is_some());
    }

    #[test]
    fn creep_everywhere_stops_placement() {
        let mut map = open_map();
        let wall = line(5, 3..=8);
        for c in &wall {
            map.set_creep(*c, true);
        }
        let sequencer = WallSequencer::new(&wall);
        assert!(sequencer.next_placement(&map, Footprint::new(3, 3)).is_none());
    }

    #[test]
    fn sync_drops_built_cells() {
        let mut map = open_map();
        let mut sequencer = WallSequencer::new(&line(5, 3..=8));
        map.occupy(Footprint::new(3, 3), GridCell::new(4, 5));
        sequencer.sync_with_map(&map);
        assert_eq!(sequencer.remaining(), &line(5, 6..=8)[..]);
    }

    #[test]
    fn gap_sizing_selects_width() {
        let map = open_map();
        let four = WallSequencer::new(&line(5, 3..=6)).with_gap_sizing(true);
        assert!(four.accepts_footprint(Footprint::new(3, 3)));
        assert!(!four.accepts_footprint(Footprint::new(2, 2)));

        let three = WallSequencer::new(&line(5, 3..=5)).with_gap_sizing(true);
        assert!(three.accepts_footprint(Footprint::new(2, 2)));
        assert!(three.next_placement(&map, Footprint::new(3, 3)).is_none());

        let long = WallSequencer::new(&line(5, 1..=10)).with_gap_sizing(true);
        assert!(long.accepts_footprint(Footprint::new(3, 3)));
        assert!(long.accepts_footprint(Footprint::new(2, 2)));
    }

    #[test]
    fn complete_sequencer_offers_nothing() {
        let map = open_map();
        let sequencer = WallSequencer::new(&[GridCell::new(4, 4)]);
        assert!(sequencer.is_complete());
        assert!(sequencer.next_placement(&map, Footprint::new(2, 2)).is_none());
    }

    proptest! {
        #[test]
        fn placements_stay_disjoint_and_below_remaining(
            xs in prop::collection::btree_set(2i32..14, 2..10),
            y in 2i32..10,
            wide in any::<bool>(),
        ) {
            let map = open_map();
            let wall: Vec<GridCell> = xs.into_iter().map(|x| GridCell::new(x, y)).collect();
            let footprint = if wide { Footprint::new(3, 3) } else { Footprint::new(2, 2) };
            let mut sequencer = WallSequencer::new(&wall);

            while let Some(placement) = sequencer.next_placement(&map, footprint) {
                let remaining = sequencer.remaining().len();
                prop_assert!(placement.coverage >= 1);
                prop_assert!(placement.coverage < remaining);
                sequencer.confirm(&placement, footprint);
            }
            prop_assert!(!sequencer.remaining().is_empty());
            prop_assert!(placed_cells_are_disjoint(&sequencer));
        }
    }
}
