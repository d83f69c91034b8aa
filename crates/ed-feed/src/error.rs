use thiserror::Error;

use ed_core::{EdError, EmergencyId};

use crate::EmergencyStatus;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("feed parse error: {0}")]
    Parse(String),

    #[error("emergency {id}: {reason}")]
    InvalidRecord { id: EmergencyId, reason: String },

    #[error("emergency {0} already exists")]
    DuplicateId(EmergencyId),

    #[error("emergency {0} not found")]
    UnknownEmergency(EmergencyId),

    #[error("emergency {id}: cannot go from {from:?} to {to:?}")]
    InvalidTransition { id: EmergencyId, from: EmergencyStatus, to: EmergencyStatus },

    #[error(transparent)]
    Core(#[from] EdError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type FeedResult<T> = Result<T, FeedError>;
