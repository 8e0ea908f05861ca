use crate::region::RegionId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WallError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WallError {
    #[error("region {region} has no hull cells")]
    EmptyHull { region: RegionId },

    #[error("unknown region: {0}")]
    UnknownRegion(RegionId),

    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
