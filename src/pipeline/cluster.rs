//! Greedy single-pass clustering of dead-hull cells.
//!
//! Each cell joins the first cluster whose centroid is strictly closer than
//! the live-hull diameter, otherwise it starts a new cluster. The result
//! depends on input order, so callers pass cells in hull order.

use crate::location::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    pub cells: Vec<GridCell>,
    pub centroid: Centroid,
}

impl Cluster {
    pub fn singleton(cell: GridCell) -> Self {
        Cluster {
            cells: vec![cell],
            centroid: Centroid::of_cell(cell),
        }
    }

    /// A new cluster with `cell` appended and the centroid updated as a
    /// running mean.
    pub fn with_cell(&self, cell: GridCell) -> Self {
        let n = self.cells.len() as f32;
        let mut cells = self.cells.clone();
        cells.push(cell);
        let centroid = Centroid {
            x: (self.centroid.x * n + cell.x() as f32) / (n + 1.0),
            y: (self.centroid.y * n + cell.y() as f32) / (n + 1.0),
        };
        Cluster { cells, centroid }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Place one cell into a cluster list, returning the new list.
pub fn assign_cell(clusters: &[Cluster], cell: GridCell, threshold: f32) -> Vec<Cluster> {
    let target = clusters
        .iter()
        .position(|c| c.centroid.distance_to_cell(cell) < threshold);

    match target {
        Some(index) => clusters
            .iter()
            .enumerate()
            .map(|(i, c)| if i == index { c.with_cell(cell) } else { c.clone() })
            .collect(),
        None => clusters
            .iter()
            .cloned()
            .chain(std::iter::once(Cluster::singleton(cell)))
            .collect(),
    }
}

pub fn cluster_dead_hull(dead: &[GridCell], live_diameter: f32) -> Vec<Cluster> {
    dead.iter()
        .fold(Vec::new(), |clusters, &cell| assign_cell(&clusters, cell, live_diameter))
}
