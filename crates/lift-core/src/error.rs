//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `LiftError` as one
//! variant via `#[from]`.

use thiserror::Error;

use crate::Floor;

/// The top-level error type for `lift-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum LiftError {
    #[error("floor {floor} is outside a {num_floors}-floor building")]
    FloorOutOfRange { floor: Floor, num_floors: u32 },

    #[error("trip from {floor} to itself")]
    SameFloorTrip { floor: Floor },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `lift-*` crates.
pub type LiftResult<T> = Result<T, LiftError>;
