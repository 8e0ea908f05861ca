//! Grid-constrained path search over a walkability mask.
//!
//! The mask is built from placement data rather than pathing data: a wall can
//! only be made of cells a building could occupy. Endpoints are usually
//! unbuildable terrain anchors, so callers force them open before searching.

use crate::location::*;
use crate::map_data::MapQuery;
use crate::terrain::GridArray;
use pathfinding::directed::astar::astar;

/// Walkability mask for the path search.
#[derive(Clone, Debug)]
pub struct WalkGrid {
    open: GridArray<bool>,
}

impl WalkGrid {
    /// All cells blocked.
    pub fn blocked(width: i32, height: i32) -> Self {
        WalkGrid {
            open: GridArray::new(width, height, false),
        }
    }

    /// Placeable cells are open, everything else blocked. `exclude` closes
    /// additional cells (obstacles, ramps).
    pub fn from_placement<M, F>(map: &M, exclude: F) -> Self
    where
        M: MapQuery + ?Sized,
        F: Fn(GridCell) -> bool,
    {
        let mut grid = WalkGrid::blocked(map.width(), map.height());
        for y in 0..map.height() {
            for x in 0..map.width() {
                let cell = GridCell::new(x, y);
                if map.is_placeable(cell) && !exclude(cell) {
                    grid.open.set(cell, true);
                }
            }
        }
        grid
    }

    pub fn is_walkable(&self, cell: GridCell) -> bool {
        self.open.get(cell).copied().unwrap_or(false)
    }

    pub fn set_walkable(&mut self, cell: GridCell, walkable: bool) {
        self.open.set(cell, walkable);
    }

    pub fn force_walkable(&mut self, cell: GridCell) {
        self.set_walkable(cell, true);
    }
}

/// A* between two cells, 8-connected with unit step cost.
///
/// Returns the path including both endpoints, or `None` when the endpoints
/// are not connected through walkable cells.
pub fn find_grid_path(grid: &WalkGrid, start: GridCell, goal: GridCell) -> Option<Vec<GridCell>> {
    if !grid.is_walkable(start) || !grid.is_walkable(goal) {
        return None;
    }

    let result = astar(
        &start,
        |&cell| {
            NEIGHBORS_8
                .iter()
                .map(move |&(dx, dy)| cell.offset(dx, dy))
                .filter(|n| grid.is_walkable(*n))
                .map(|n| (n, 1u32))
                .collect::<Vec<_>>()
        },
        |&cell| cell.chebyshev_distance_to(goal),
        |&cell| cell == goal,
    );

    result.map(|(path, _cost)| path)
}
