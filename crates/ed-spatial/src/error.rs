//! Spatial-subsystem error type.

use thiserror::Error;

use ed_core::NodeId;

/// Errors produced by `ed-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("node {0} not found in node table")]
    UnknownNode(NodeId),

    #[error("node table is full ({0} nodes)")]
    Capacity(usize),

    #[error("location {0} has a non-finite coordinate")]
    NonFinite(ed_core::Point),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
