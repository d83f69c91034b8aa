use ed_core::UnitId;
use ed_spatial::SpatialError;
use thiserror::Error;

use crate::UnitStatus;

#[derive(Debug, Error)]
pub enum FleetError {
    #[error("unit {0} already has an active route")]
    AlreadyCommitted(UnitId),

    #[error("unit {unit} is {status:?}, expected {expected:?}")]
    WrongStatus { unit: UnitId, status: UnitStatus, expected: UnitStatus },

    #[error("unit {0} has no active route")]
    NoRoute(UnitId),

    #[error("unit {0} not found")]
    UnknownUnit(UnitId),

    #[error("unit bound to unknown station {0:?}")]
    UnknownStation(String),

    #[error("duplicate station {0:?}")]
    DuplicateStation(String),

    #[error("spatial error: {0}")]
    Spatial(#[from] SpatialError),
}

pub type FleetResult<T> = Result<T, FleetError>;
