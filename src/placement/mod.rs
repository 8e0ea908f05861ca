//! Turning a computed wall into building placements.

pub mod sequencer;
pub mod support;

pub use sequencer::WallSequencer;
pub use support::{support_candidates, SupportBand, SupportCandidates};

use crate::location::GridCell;
use serde::{Deserialize, Serialize};

/// A proposed anchor position and how many target cells it would occupy.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct PlacementCandidate {
    pub position: GridCell,
    pub coverage: usize,
}

impl PlacementCandidate {
    pub fn new(position: GridCell, coverage: usize) -> Self {
        PlacementCandidate { position, coverage }
    }
}
