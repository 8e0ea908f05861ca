use serde::*;

/// Neighbor offsets for 8-directional movement.
pub const NEIGHBORS_8: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
];

/// Neighbor offsets for 4-directional (cardinal) movement.
pub const NEIGHBORS_4: [(i32, i32); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Diagonal-only neighbor offsets.
pub const NEIGHBORS_DIAGONAL: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, 1), (1, -1)];

/// A single map grid coordinate.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub struct GridCell {
    x: i32,
    y: i32,
}

impl GridCell {
    pub const fn new(x: i32, y: i32) -> Self {
        GridCell { x, y }
    }

    #[inline]
    pub fn x(self) -> i32 {
        self.x
    }

    #[inline]
    pub fn y(self) -> i32 {
        self.y
    }

    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        GridCell::new(self.x + dx, self.y + dy)
    }

    pub fn distance_to(self, other: Self) -> f32 {
        let dx = (self.x - other.x) as f32;
        let dy = (self.y - other.y) as f32;

        (dx * dx + dy * dy).sqrt()
    }

    /// Squared euclidean distance, exact in integers.
    pub fn distance_sq_to(self, other: Self) -> i64 {
        let dx = (self.x - other.x) as i64;
        let dy = (self.y - other.y) as i64;

        dx * dx + dy * dy
    }

    pub fn chebyshev_distance_to(self, other: Self) -> u32 {
        let dx = (self.x - other.x).unsigned_abs();
        let dy = (self.y - other.y).unsigned_abs();

        dx.max(dy)
    }

    /// Unbounded neighbors; callers clip against their grid.
    pub fn neighbors(self, include_diagonal: bool) -> impl Iterator<Item = GridCell> {
        let offsets: &'static [(i32, i32)] = if include_diagonal {
            &NEIGHBORS_8
        } else {
            &NEIGHBORS_4
        };
        offsets.iter().map(move |&(dx, dy)| self.offset(dx, dy))
    }

    pub fn diagonal_neighbors(self) -> impl Iterator<Item = GridCell> {
        NEIGHBORS_DIAGONAL
            .iter()
            .map(move |&(dx, dy)| self.offset(dx, dy))
    }
}

impl From<(i32, i32)> for GridCell {
    fn from((x, y): (i32, i32)) -> Self {
        GridCell::new(x, y)
    }
}

impl Serialize for GridCell {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (self.x, self.y).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GridCell {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        <(i32, i32)>::deserialize(deserializer).map(GridCell::from)
    }
}

/// Real-valued mean position of a set of cells.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Centroid {
    pub x: f32,
    pub y: f32,
}

impl Centroid {
    pub fn of_cell(cell: GridCell) -> Self {
        Centroid {
            x: cell.x() as f32,
            y: cell.y() as f32,
        }
    }

    /// Arithmetic mean of `cells`, or `None` for an empty set.
    pub fn mean_of(cells: &[GridCell]) -> Option<Self> {
        if cells.is_empty() {
            return None;
        }
        let (sx, sy) = cells.iter().fold((0i64, 0i64), |(sx, sy), c| {
            (sx + c.x() as i64, sy + c.y() as i64)
        });
        let n = cells.len() as f64;

        Some(Centroid {
            x: (sx as f64 / n) as f32,
            y: (sy as f64 / n) as f32,
        })
    }

    pub fn distance_to(self, other: Centroid) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;

        (dx * dx + dy * dy).sqrt()
    }

    pub fn distance_to_cell(self, cell: GridCell) -> f32 {
        self.distance_to(Centroid::of_cell(cell))
    }
}
