//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `LiftError` as one
//! variant via `#[from]`, so a configuration failure surfaces unchanged at
//! every layer.

use thiserror::Error;

use crate::Floor;

/// The top-level error type for `lift-core` and a common base for sub-crates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LiftError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{floor} is outside a building with {floors} floors")]
    FloorOutOfRange { floor: Floor, floors: u32 },
}

/// Shorthand result type for all `lift-*` crates.
pub type LiftResult<T> = Result<T, LiftError>;
