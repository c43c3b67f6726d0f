//! Error types for the parts of the core that can fail hard: constructing a
//! layout object with bad input, and reading/writing the persisted format.
//!
//! Placement and validation results are reported structurally (§7 of the
//! design) — [`crate::placement::PlacementReason`] and
//! [`crate::validation::ValidationKind`] are plain data, not part of this
//! module.

use thiserror::Error;

/// Hard failure from a [`crate::layout::Layout`] mutation that never
/// partially applies.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ModelError {
    #[error("width and height must both be positive, got {width}x{height}")]
    NonPositiveSize { width: f64, height: f64 },

    #[error("object id {0} is already in use")]
    DuplicateId(u64),
}

/// Failure from loading or saving a layout to its JSON representation.
#[derive(Debug, Error)]
pub enum LayoutIoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid file extension '{0}', expected '.json'")]
    BadExtension(String),

    #[error("layout JSON root must be an object")]
    InvalidRoot,

    #[error("invalid object in layout JSON: {0}")]
    Model(#[from] ModelError),
}
