//! Placement error type.

use thiserror::Error;

use ed_core::Point;

#[derive(Debug, Error)]
pub enum PlacementError {
    #[error("point {index} at {point} has a non-finite coordinate")]
    NonFinitePoint { index: usize, point: Point },

    #[error("point {index} has invalid weight {weight}: must be finite and >= 0")]
    InvalidWeight { index: usize, weight: f64 },

    #[error("tolerance must be positive, got {0}")]
    Tolerance(f64),
}

pub type PlacementResult<T> = Result<T, PlacementError>;
