use ed_core::EdError;
use ed_dispatch::DispatchError;
use ed_feed::FeedError;
use ed_fleet::FleetError;
use ed_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] EdError),

    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error(transparent)]
    Fleet(#[from] FleetError),

    #[error(transparent)]
    Spatial(#[from] SpatialError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error("invariant violated: {0}")]
    Invariant(String),
}

pub type SimResult<T> = Result<T, SimError>;
