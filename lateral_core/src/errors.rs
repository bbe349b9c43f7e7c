//! # Error Types
//!
//! Structured error types for lateral_core. Every failure in the analysis
//! pipeline is a data or wiring problem surfaced straight to the caller;
//! nothing here is retried.
//!
//! ## Example
//!
//! ```rust
//! use lateral_core::errors::{LateralError, LateralResult};
//!
//! fn validate_height(height_in: f64) -> LateralResult<()> {
//!     if height_in <= 0.0 {
//!         return Err(LateralError::invalid_input(
//!             "story_height",
//!             height_in.to_string(),
//!             "Story height must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::Axis;

/// Result type alias for lateral_core operations
pub type LateralResult<T> = Result<T, LateralError>;

/// Structured error type for lateral analysis operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum LateralError {
    /// An input value is invalid (out of range, non-finite, zero length, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A level has no stiffness along an axis, so it cannot be analyzed rigidly
    #[error("Degenerate stiffness: level '{level}' has no stiffness along {axis}")]
    DegenerateStiffness { level: String, axis: Axis },

    /// A level's walls all pass through the center of rigidity, so torsion has no resistance
    #[error("Degenerate torsional stiffness: level '{level}' cannot resist torsion")]
    DegenerateTorsionalStiffness { level: String },

    /// A wall, node, level or load case id has no matching entry
    #[error("{kind} not found: '{id}'")]
    NotFound { kind: String, id: String },

    /// A load case mixes load patterns from different categories
    #[error("Load case '{load_case}' mixes {expected} and {found} load patterns")]
    MismatchedLoadPatternCategory {
        load_case: String,
        expected: String,
        found: String,
    },

    /// A response collection already holds an entry for this load pattern
    #[error("Duplicate response for load pattern '{load_pattern}' on '{element}'")]
    DuplicateLoadPattern {
        element: String,
        load_pattern: String,
    },

    /// A load pattern name is missing from the pattern catalog
    #[error("Unknown load pattern: '{load_pattern}'")]
    UnknownLoadPattern { load_pattern: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl LateralError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        LateralError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a DegenerateStiffness error
    pub fn degenerate_stiffness(level: impl Into<String>, axis: Axis) -> Self {
        LateralError::DegenerateStiffness {
            level: level.into(),
            axis,
        }
    }

    /// Create a DegenerateTorsionalStiffness error
    pub fn degenerate_torsional_stiffness(level: impl Into<String>) -> Self {
        LateralError::DegenerateTorsionalStiffness { level: level.into() }
    }

    /// Create a NotFound error
    pub fn not_found(kind: impl Into<String>, id: impl Into<String>) -> Self {
        LateralError::NotFound {
            kind: kind.into(),
            id: id.into(),
        }
    }

    /// Create a MismatchedLoadPatternCategory error
    pub fn mismatched_category(
        load_case: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        LateralError::MismatchedLoadPatternCategory {
            load_case: load_case.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create a DuplicateLoadPattern error
    pub fn duplicate_load_pattern(element: impl Into<String>, load_pattern: impl Into<String>) -> Self {
        LateralError::DuplicateLoadPattern {
            element: element.into(),
            load_pattern: load_pattern.into(),
        }
    }

    /// Create an UnknownLoadPattern error
    pub fn unknown_load_pattern(load_pattern: impl Into<String>) -> Self {
        LateralError::UnknownLoadPattern {
            load_pattern: load_pattern.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        LateralError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            LateralError::InvalidInput { .. } => "INVALID_INPUT",
            LateralError::DegenerateStiffness { .. } => "DEGENERATE_STIFFNESS",
            LateralError::DegenerateTorsionalStiffness { .. } => "DEGENERATE_TORSIONAL_STIFFNESS",
            LateralError::NotFound { .. } => "NOT_FOUND",
            LateralError::MismatchedLoadPatternCategory { .. } => "MISMATCHED_LOAD_PATTERN_CATEGORY",
            LateralError::DuplicateLoadPattern { .. } => "DUPLICATE_LOAD_PATTERN",
            LateralError::UnknownLoadPattern { .. } => "UNKNOWN_LOAD_PATTERN",
            LateralError::FileError { .. } => "FILE_ERROR",
            LateralError::SerializationError { .. } => "SERIALIZATION_ERROR",
            LateralError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

impl From<serde_json::Error> for LateralError {
    fn from(err: serde_json::Error) -> Self {
        LateralError::SerializationError {
            reason: err.to_string(),
        }
    }
}
