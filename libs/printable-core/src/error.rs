//! # Placement Errors
//!
//! Error types for the few fallible constructors in this crate. Editing
//! operations on a [`PrintableObject`](crate::PrintableObject) never fail:
//! invalid requests are ignored, so the errors here only cover building
//! inputs (axes, meshes, configuration).

use config::constants::ConfigError;
use thiserror::Error;

/// Errors that can occur while building placement inputs.
#[derive(Debug, Error, PartialEq)]
pub enum PlacementError {
    /// Axis index outside `0..=2`
    #[error("Invalid axis index: {0} (expected 0, 1 or 2)")]
    InvalidAxis(usize),

    /// Mesh vertex data that cannot form triangles
    #[error("Invalid mesh: {message}")]
    InvalidMesh { message: String },

    /// Rejected clearance configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

impl PlacementError {
    /// Creates an invalid mesh error.
    pub fn invalid_mesh(message: impl Into<String>) -> Self {
        Self::InvalidMesh {
            message: message.into(),
        }
    }
}

/// Result type alias for placement operations.
pub type PlacementResult<T> = Result<T, PlacementError>;
