use ed_fleet::FleetError;
use ed_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("distance lookup failed: {0}")]
    Spatial(#[from] SpatialError),

    #[error("fleet error: {0}")]
    Fleet(#[from] FleetError),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
