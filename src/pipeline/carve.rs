//! Area carving: trims a region's interior to cells strictly nearer the
//! townhall than every wall cell.

use crate::location::*;

/// Cells of `area_fill` closer to `townhall` than the nearest wall cell.
/// Never adds cells, and an empty wall keeps everything.
pub fn carve_area_fill(area_fill: &[GridCell], wall: &[GridCell], townhall: GridCell) -> Vec<GridCell> {
    let nearest_wall = wall
        .iter()
        .map(|w| w.distance_to(townhall))
        .fold(f32::INFINITY, f32::min);

    area_fill
        .iter()
        .copied()
        .filter(|p| p.distance_to(townhall) < nearest_wall)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn drops_cells_beyond_the_wall() {
        let townhall = GridCell::new(5, 10);
        let wall: Vec<_> = (3..=7).map(|x| GridCell::new(x, 5)).collect();
        let area: Vec<_> = (0..=12).map(|y| GridCell::new(5, y)).collect();

        let carved = carve_area_fill(&area, &wall, townhall);
        assert!(carved.iter().all(|c| c.y() > 5));
        assert_eq!(carved.len(), 7);
    }

    #[test]
    fn idempotent() {
        let townhall = GridCell::new(0, 0);
        let wall = [GridCell::new(3, 0), GridCell::new(0, 3)];
        let area: Vec<_> = (0..5)
            .flat_map(|x| (0..5).map(move |y| GridCell::new(x, y)))
            .collect();
        let once = carve_area_fill(&area, &wall, townhall);
        let twice = carve_area_fill(&once, &wall, townhall);
        assert_eq!(once, twice);
    }

    proptest! {
        #[test]
        fn carving_never_adds_cells(
            area in prop::collection::vec((0i32..30, 0i32..30), 0..60),
            wall in prop::collection::vec((0i32..30, 0i32..30), 0..10),
            tx in 0i32..30,
            ty in 0i32..30,
        ) {
            let area: Vec<GridCell> = area.into_iter().map(GridCell::from).collect();
            let wall: Vec<GridCell> = wall.into_iter().map(GridCell::from).collect();
            let carved = carve_area_fill(&area, &wall, GridCell::new(tx, ty));
            prop_assert!(carved.len() <= area.len());
            prop_assert!(carved.iter().all(|c| area.contains(c)));
        }
    }
}
