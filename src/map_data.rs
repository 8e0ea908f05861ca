use crate::footprint::*;
use crate::location::*;

/// Trait for providing map queries to the wall planner.
/// Implementations exist for both a live agent and offline use
/// ([`crate::terrain::FastMapGrid`]).
///
/// Cells outside the map are never pathable, placeable, or ramps.
pub trait MapQuery {
    fn width(&self) -> i32;
    fn height(&self) -> i32;

    fn is_pathable(&self, cell: GridCell) -> bool;
    fn is_placeable(&self, cell: GridCell) -> bool;
    fn is_ramp(&self, cell: GridCell) -> bool;
    fn has_creep(&self, cell: GridCell) -> bool;

    fn in_bounds(&self, cell: GridCell) -> bool {
        (0..self.width()).contains(&cell.x()) && (0..self.height()).contains(&cell.y())
    }

    fn footprint_of(&self, structure: StructureType) -> Footprint {
        structure.footprint()
    }

    /// Whether every cell of `footprint` anchored at `anchor` is placeable.
    fn is_placeable_at(&self, footprint: Footprint, anchor: GridCell) -> bool {
        footprint.cells_at(anchor).all(|c| self.is_placeable(c))
    }

    /// In-bounds neighbors of `cell`, cardinal first when diagonals are included.
    fn neighbors_of(&self, cell: GridCell, include_diagonal: bool) -> Vec<GridCell> {
        let cardinal = cell.neighbors(false);
        let diagonal = cell.diagonal_neighbors().filter(move |_| include_diagonal);
        cardinal
            .chain(diagonal)
            .filter(|n| self.in_bounds(*n))
            .collect()
    }

    /// Known unbuildable obstacles (plates, doodads) on the map.
    fn obstacles(&self) -> &[Obstacle] {
        &[]
    }
}
