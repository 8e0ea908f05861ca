//! Building footprints: the rectangular cell occupancy of each structure type.
//!
//! A footprint is anchored at its center cell. Odd sizes extend evenly around
//! the anchor; even sizes extend one further toward negative coordinates, so a
//! 2x2 anchored at `(x, y)` covers `x-1..=x` by `y-1..=y`.

use crate::location::*;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct Footprint {
    pub width: u8,
    pub height: u8,
}

impl Footprint {
    pub const fn new(width: u8, height: u8) -> Self {
        Footprint { width, height }
    }

    #[inline]
    fn min_corner(self, anchor: GridCell) -> GridCell {
        anchor.offset(-(self.width as i32 / 2), -(self.height as i32 / 2))
    }

    /// All cells occupied when anchored at `anchor`, row by row.
    pub fn cells_at(self, anchor: GridCell) -> impl Iterator<Item = GridCell> {
        let corner = self.min_corner(anchor);
        let width = self.width as i32;
        let height = self.height as i32;
        (0..height).flat_map(move |dy| (0..width).map(move |dx| corner.offset(dx, dy)))
    }

    pub fn contains(self, anchor: GridCell, cell: GridCell) -> bool {
        let corner = self.min_corner(anchor);
        let dx = cell.x() - corner.x();
        let dy = cell.y() - corner.y();

        (0..self.width as i32).contains(&dx) && (0..self.height as i32).contains(&dy)
    }

    /// Every anchor whose footprint would occupy `cell`.
    pub fn anchors_covering(self, cell: GridCell) -> impl Iterator<Item = GridCell> {
        let corner = self.min_corner(cell);
        let width = self.width as i32;
        let height = self.height as i32;
        // Mirror of `min_corner`: anchors lie in the window opposite the offset.
        let base = GridCell::new(
            cell.x() + (cell.x() - corner.x()) - (width - 1),
            cell.y() + (cell.y() - corner.y()) - (height - 1),
        );
        (0..height).flat_map(move |dy| (0..width).map(move |dx| base.offset(dx, dy)))
    }

    pub fn area(self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Building types the wall logic places or treats as obstacles.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub enum StructureType {
    Pylon,
    Gateway,
    CyberneticsCore,
    Forge,
    SupplyDepot,
    Barracks,
    EngineeringBay,
    Bunker,
    SpawningPool,
    EvolutionChamber,
    SpineCrawler,
    /// Unbuildable plates and similar terrain doodads.
    UnbuildablePlate,
}

impl StructureType {
    pub fn footprint(self) -> Footprint {
        match self {
            StructureType::Pylon | StructureType::SupplyDepot | StructureType::SpineCrawler => {
                Footprint::new(2, 2)
            }
            StructureType::Gateway
            | StructureType::CyberneticsCore
            | StructureType::Forge
            | StructureType::Barracks
            | StructureType::EngineeringBay
            | StructureType::Bunker
            | StructureType::SpawningPool
            | StructureType::EvolutionChamber => Footprint::new(3, 3),
            StructureType::UnbuildablePlate => Footprint::new(6, 6),
        }
    }

    /// Structures that enable construction around them (power, supply).
    pub fn is_support(self) -> bool {
        matches!(self, StructureType::Pylon | StructureType::SupplyDepot)
    }
}

/// A known obstacle on the map that must never become part of a wall.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct Obstacle {
    pub position: GridCell,
    pub footprint: Footprint,
}

impl Obstacle {
    pub fn new(position: GridCell, footprint: Footprint) -> Self {
        Obstacle {
            position,
            footprint,
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = GridCell> {
        self.footprint.cells_at(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_by_three_is_centered() {
        let fp = Footprint::new(3, 3);
        let cells: Vec<_> = fp.cells_at(GridCell::new(5, 5)).collect();
        assert_eq!(cells.len(), 9);
        assert_eq!(cells[0], GridCell::new(4, 4));
        assert_eq!(cells[8], GridCell::new(6, 6));
    }

    #[test]
    fn two_by_two_extends_negative() {
        let fp = Footprint::new(2, 2);
        let cells: Vec<_> = fp.cells_at(GridCell::new(5, 5)).collect();
        assert_eq!(
            cells,
            vec![
                GridCell::new(4, 4),
                GridCell::new(5, 4),
                GridCell::new(4, 5),
                GridCell::new(5, 5)
            ]
        );
        assert!(fp.contains(GridCell::new(5, 5), GridCell::new(4, 4)));
        assert!(!fp.contains(GridCell::new(5, 5), GridCell::new(6, 5)));
    }

    #[test]
    fn anchors_covering_agree_with_contains() {
        for fp in [Footprint::new(2, 2), Footprint::new(3, 3), Footprint::new(2, 3)] {
            let cell = GridCell::new(10, 10);
            let anchors: Vec<_> = fp.anchors_covering(cell).collect();
            assert_eq!(anchors.len(), fp.area());
            assert!(anchors.iter().all(|a| fp.contains(*a, cell)));
        }
    }
}
