pub mod config;
pub mod constants;
pub mod error;
pub mod footprint;
pub mod location;
pub mod map_data;
pub mod pipeline;
pub mod placement;
pub mod planner;
pub mod raster;
pub mod region;
pub mod search;
pub mod terrain;

pub mod visual;
pub use visual::*;

pub use config::WallConfig;
pub use error::{Result, WallError};
pub use footprint::{Footprint, Obstacle, StructureType};
pub use location::{Centroid, GridCell};
pub use map_data::MapQuery;
pub use pipeline::RampAssumption;
pub use placement::{PlacementCandidate, SupportBand, SupportCandidates, WallSequencer};
pub use planner::{plan_region_wall, WallPlanner};
pub use region::{Region, RegionId, RegionRegistry};
pub use terrain::{CellFlags, FastMapGrid};
