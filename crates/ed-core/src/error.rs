//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `EdError` as one variant
//! via `#[from]`, so `?` works across crate boundaries.

use thiserror::Error;

/// The top-level error type for `ed-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum EdError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `ed-*` crates.
pub type EdResult<T> = Result<T, EdError>;
