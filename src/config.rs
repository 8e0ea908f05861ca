use crate::constants::*;
use crate::error::*;
use serde::{Deserialize, Serialize};

/// Tuning for wall planning and support placement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WallConfig {
    /// Strict support band, inclusive, measured to every wall cell.
    pub support_min_distance: f32,
    pub support_max_distance: f32,
    /// Lower bound of the relaxed band. The upper bound is shared.
    pub relaxed_min_distance: f32,
    /// A support structure strictly within this distance of the wall centroid
    /// counts as already present.
    pub support_sight_range: f32,
    /// Rerun the pipeline with the ramp predicate inverted when the first
    /// pass finds nothing.
    pub retry_without_ramp: bool,
    /// Restrict footprint widths as the last gap closes.
    pub enforce_gap_sizing: bool,
}

impl Default for WallConfig {
    fn default() -> Self {
        WallConfig {
            support_min_distance: SUPPORT_MIN_DISTANCE,
            support_max_distance: SUPPORT_MAX_DISTANCE,
            relaxed_min_distance: RELAXED_MIN_DISTANCE,
            support_sight_range: SUPPORT_SIGHT_RANGE,
            retry_without_ramp: true,
            enforce_gap_sizing: false,
        }
    }
}

impl WallConfig {
    pub fn validate(&self) -> Result<()> {
        let distances = [
            ("support_min_distance", self.support_min_distance),
            ("support_max_distance", self.support_max_distance),
            ("relaxed_min_distance", self.relaxed_min_distance),
            ("support_sight_range", self.support_sight_range),
        ];
        for (name, value) in distances {
            if !value.is_finite() || value < 0.0 {
                return Err(WallError::InvalidConfig(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        if self.support_min_distance > self.support_max_distance {
            return Err(WallError::InvalidConfig(format!(
                "support band is empty: {} > {}",
                self.support_min_distance, self.support_max_distance
            )));
        }
        if self.relaxed_min_distance > self.support_max_distance {
            return Err(WallError::InvalidConfig(format!(
                "relaxed band is empty: {} > {}",
                self.relaxed_min_distance, self.support_max_distance
            )));
        }
        Ok(())
    }
}
