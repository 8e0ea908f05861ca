use crate::error::*;
use crate::footprint::*;
use crate::location::*;
use crate::map_data::MapQuery;
use bitflags::*;

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CellFlags: u8 {
        const NONE = 0;
        const PATHABLE = 1;
        const PLACEABLE = 2;
        const RAMP = 4;
        const CREEP = 8;
    }
}

/// Flat per-cell grid of map predicates.
///
/// This is the in-crate implementation of [`MapQuery`], used for offline
/// testing and replays. A live agent implements [`MapQuery`] over its own
/// game state instead.
#[derive(Clone, Debug)]
pub struct FastMapGrid {
    width: i32,
    height: i32,
    buffer: Vec<u8>,
    obstacles: Vec<Obstacle>,
}

impl FastMapGrid {
    pub fn new(width: i32, height: i32, buffer: Vec<u8>) -> Result<FastMapGrid> {
        if width <= 0 || height <= 0 {
            return Err(WallError::InvalidGrid(format!(
                "dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        if buffer.len() != (width as usize) * (height as usize) {
            return Err(WallError::InvalidGrid(format!(
                "buffer holds {} cells, expected {}",
                buffer.len(),
                width * height
            )));
        }
        Ok(FastMapGrid {
            width,
            height,
            buffer,
            obstacles: Vec::new(),
        })
    }

    /// Parse a map from rows of characters, row 0 being `y == 0`.
    ///
    /// - `#` unpathable
    /// - `.` pathable and placeable
    /// - `,` pathable, not placeable
    /// - `/` ramp (pathable, not placeable)
    /// - `~` pathable and placeable, with creep
    pub fn from_ascii(rows: &[&str]) -> Result<FastMapGrid> {
        let height = rows.len();
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        let mut buffer = Vec::with_capacity(width * height);

        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(WallError::InvalidGrid(format!(
                    "row {} has {} cells, expected {}",
                    y,
                    row.chars().count(),
                    width
                )));
            }
            for ch in row.chars() {
                let flags = match ch {
                    '#' => CellFlags::NONE,
                    '.' => CellFlags::PATHABLE | CellFlags::PLACEABLE,
                    ',' => CellFlags::PATHABLE,
                    '/' => CellFlags::PATHABLE | CellFlags::RAMP,
                    '~' => CellFlags::PATHABLE | CellFlags::PLACEABLE | CellFlags::CREEP,
                    other => {
                        return Err(WallError::InvalidGrid(format!(
                            "unknown cell character {:?} in row {}",
                            other, y
                        )))
                    }
                };
                buffer.push(flags.bits());
            }
        }

        FastMapGrid::new(width as i32, height as i32, buffer)
    }

    pub fn with_obstacles(mut self, obstacles: Vec<Obstacle>) -> Self {
        self.obstacles = obstacles;
        self
    }

    #[inline]
    fn index(&self, cell: GridCell) -> Option<usize> {
        if self.contains(cell) {
            Some(cell.y() as usize * self.width as usize + cell.x() as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn contains(&self, cell: GridCell) -> bool {
        (0..self.width).contains(&cell.x()) && (0..self.height).contains(&cell.y())
    }

    pub fn get(&self, cell: GridCell) -> CellFlags {
        self.index(cell)
            .map(|i| CellFlags::from_bits_truncate(self.buffer[i]))
            .unwrap_or(CellFlags::NONE)
    }

    pub fn set(&mut self, cell: GridCell, flags: CellFlags) {
        if let Some(i) = self.index(cell) {
            self.buffer[i] = flags.bits();
        }
    }

    /// Mark a finished building: its cells stop being placeable.
    pub fn occupy(&mut self, footprint: Footprint, anchor: GridCell) {
        for cell in footprint.cells_at(anchor) {
            let flags = self.get(cell);
            self.set(cell, flags - CellFlags::PLACEABLE);
        }
    }

    pub fn set_creep(&mut self, cell: GridCell, creep: bool) {
        let mut flags = self.get(cell);
        flags.set(CellFlags::CREEP, creep);
        self.set(cell, flags);
    }
}

impl MapQuery for FastMapGrid {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn is_pathable(&self, cell: GridCell) -> bool {
        self.get(cell).contains(CellFlags::PATHABLE)
    }

    fn is_placeable(&self, cell: GridCell) -> bool {
        self.get(cell).contains(CellFlags::PLACEABLE)
    }

    fn is_ramp(&self, cell: GridCell) -> bool {
        self.get(cell).contains(CellFlags::RAMP)
    }

    fn has_creep(&self, cell: GridCell) -> bool {
        self.get(cell).contains(CellFlags::CREEP)
    }

    fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }
}

/// A map-sized array for per-cell data.
#[derive(Clone, Debug)]
pub struct GridArray<T: Copy> {
    width: i32,
    height: i32,
    data: Vec<T>,
}

impl<T: Copy> GridArray<T> {
    pub fn new(width: i32, height: i32, initial: T) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        GridArray {
            width,
            height,
            data: vec![initial; (width as usize) * (height as usize)],
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn contains(&self, cell: GridCell) -> bool {
        (0..self.width).contains(&cell.x()) && (0..self.height).contains(&cell.y())
    }

    #[inline]
    pub fn get(&self, cell: GridCell) -> Option<&T> {
        if self.contains(cell) {
            let index = cell.y() as usize * self.width as usize + cell.x() as usize;
            self.data.get(index)
        } else {
            None
        }
    }

    #[inline]
    pub fn set(&mut self, cell: GridCell, value: T) {
        if self.contains(cell) {
            let index = cell.y() as usize * self.width as usize + cell.x() as usize;
            self.data[index] = value;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (GridCell, &T)> {
        let width = self.width.max(1);
        self.data.iter().enumerate().map(move |(i, v)| {
            let x = i as i32 % width;
            let y = i as i32 / width;
            (GridCell::new(x, y), v)
        })
    }
}
