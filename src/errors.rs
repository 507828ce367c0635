//! Error types for textual point input
//!
//! Point operations themselves never fail at runtime. These errors only
//! come from turning text (command line arguments, user input) into points.

use thiserror::Error;

use crate::coordinates::Axis;

/// Main error type for point3d functionality
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PointError {
    /// The text did not contain exactly three comma-separated components
    #[error("Expected 3 comma-separated coordinates, found {found}")]
    WrongComponentCount {
        /// Number of components actually present
        found: usize,
    },

    /// One component could not be parsed as the coordinate type
    #[error("Invalid {axis} coordinate {text:?}: {reason}")]
    InvalidComponent {
        /// Axis of the offending component
        axis: Axis,
        /// The component text as given
        text: String,
        /// The coordinate type's own parse error, rendered
        reason: String,
    },
}

/// Extension of the Result type for point3d operations
pub type Result<T> = std::result::Result<T, PointError>;

/// Helper to build an `InvalidComponent` error from a coordinate parse failure
pub fn component_err(axis: Axis, text: &str, err: impl std::fmt::Display) -> PointError {
    PointError::InvalidComponent {
        axis,
        text: text.to_string(),
        reason: err.to_string(),
    }
}
