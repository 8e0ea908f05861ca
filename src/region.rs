//! Base regions and the caller-owned registry that holds them.
//!
//! A `Region` is created when the map's expansions are enumerated. Its wall
//! is written at most once; `RegionRegistry` replaces any process-wide cache
//! and is passed by reference into the planner.

use crate::location::*;
use fnv::FnvHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionId(pub u32);

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Region {
    pub id: RegionId,
    /// Ordered boundary cells facing the rest of the map.
    pub hull: Vec<GridCell>,
    /// Interior cells available for buildings.
    pub area_fill: Vec<GridCell>,
    /// Front-facing cells of the interior, used for support placement.
    pub front_cells: Vec<GridCell>,
    pub townhall_position: GridCell,
    #[serde(default)]
    wall: Option<Vec<GridCell>>,
}

impl Region {
    pub fn new(
        id: RegionId,
        hull: Vec<GridCell>,
        area_fill: Vec<GridCell>,
        front_cells: Vec<GridCell>,
        townhall_position: GridCell,
    ) -> Self {
        Region {
            id,
            hull,
            area_fill,
            front_cells,
            townhall_position,
            wall: None,
        }
    }

    /// The computed wall, endpoint to endpoint, if one was found.
    pub fn wall(&self) -> Option<&[GridCell]> {
        self.wall.as_deref()
    }

    pub fn has_wall(&self) -> bool {
        self.wall.is_some()
    }

    /// Write-once. Returns false and leaves the region untouched if a wall is
    /// already set.
    pub(crate) fn set_wall(&mut self, wall: Vec<GridCell>) -> bool {
        if self.wall.is_some() {
            return false;
        }
        self.wall = Some(wall);
        true
    }
}

/// Region arena keyed by id.
#[derive(Default)]
pub struct RegionRegistry {
    regions: FnvHashMap<RegionId, Region>,
}

impl RegionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a region, replacing (and returning) any previous one with the same id.
    pub fn insert(&mut self, region: Region) -> Option<Region> {
        self.regions.insert(region.id, region)
    }

    pub fn get(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(&id)
    }

    pub fn get_mut(&mut self, id: RegionId) -> Option<&mut Region> {
        self.regions.get_mut(&id)
    }

    pub fn wall_of(&self, id: RegionId) -> Option<&[GridCell]> {
        self.get(id).and_then(|r| r.wall())
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(id: u32) -> Region {
        Region::new(
            RegionId(id),
            vec![GridCell::new(0, 0)],
            Vec::new(),
            Vec::new(),
            GridCell::new(5, 5),
        )
    }

    #[test]
    fn wall_is_write_once() {
        let mut r = region(1);
        assert!(r.set_wall(vec![GridCell::new(1, 1)]));
        assert!(!r.set_wall(vec![GridCell::new(2, 2)]));
        assert_eq!(r.wall(), Some(&[GridCell::new(1, 1)][..]));
    }

    #[test]
    fn registry_lookup() {
        let mut registry = RegionRegistry::new();
        assert!(registry.insert(region(1)).is_none());
        registry.insert(region(2));
        assert_eq!(registry.len(), 2);
        assert!(registry.wall_of(RegionId(1)).is_none());
        assert!(registry.get(RegionId(3)).is_none());
    }

    #[test]
    fn serde_keeps_wall() {
        let mut r = region(4);
        r.set_wall(vec![GridCell::new(3, 3), GridCell::new(4, 3)]);
        let json = serde_json::to_string(&r).unwrap();
        let back: Region = serde_json::from_str(&json).unwrap();
        assert_eq!(back.wall(), r.wall());
        assert_eq!(back.id, RegionId(4));
    }
}
