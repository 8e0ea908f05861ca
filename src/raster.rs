//! Integer line rasterization and nearest-point helpers.

use crate::location::*;

/// Cells of the Bresenham line from `from` to `to`, both inclusive.
pub fn bresenham(from: GridCell, to: GridCell) -> Vec<GridCell> {
    let (mut x, mut y) = (from.x(), from.y());
    let dx = (to.x() - x).abs();
    let dy = -(to.y() - y).abs();
    let sx = if x < to.x() { 1 } else { -1 };
    let sy = if y < to.y() { 1 } else { -1 };
    let mut err = dx + dy;

    let mut line = Vec::with_capacity((dx.max(-dy) + 1) as usize);
    loop {
        line.push(GridCell::new(x, y));
        if x == to.x() && y == to.y() {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
    line
}

/// The closest pair of cells between two sets, scanning `a` then `b` in
/// order. The first minimum found wins.
pub fn closest_pair(a: &[GridCell], b: &[GridCell]) -> Option<(GridCell, GridCell)> {
    let mut best: Option<(GridCell, GridCell, i64)> = None;
    for &p in a {
        for &q in b {
            let d = p.distance_sq_to(q);
            if best.map_or(true, |(_, _, bd)| d < bd) {
                best = Some((p, q, d));
            }
        }
    }
    best.map(|(p, q, _)| (p, q))
}
