//! Error types for snap classification.

use thiserror::Error;

/// Result type alias for snap operations.
pub type SnapResult<T> = Result<T, SnapError>;

/// Host contract violations detected while classifying a hit.
///
/// A hit that simply snaps to nothing is not an error; classification
/// returns `Ok(None)` for that.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum SnapError {
    /// The hit names a fragment that was not supplied.
    #[error("fragment {0} was not supplied with the hit")]
    UnknownFragment(u32),

    /// The hit names a triangle outside the fragment's index buffer.
    #[error("face index {index} out of range (fragment has {face_count} faces)")]
    FaceIndexOutOfRange {
        /// Requested face.
        index: usize,
        /// Faces in the fragment.
        face_count: usize,
    },

    /// Fragment geometry failed validation.
    #[error("invalid fragment geometry: {0}")]
    InvalidMesh(#[from] mesh_types::TypesError),

    /// Viewport has no usable pixel height.
    #[error("viewport height must be positive and finite, got {0}")]
    InvalidViewport(f64),

    /// Camera snapshot cannot produce a world-space scale.
    #[error("invalid camera: {0}")]
    InvalidCamera(String),

    /// Snap parameters are out of range.
    #[error("invalid snap parameters: {0}")]
    InvalidParams(String),
}

impl SnapError {
    /// Create an invalid camera error.
    #[must_use]
    pub fn invalid_camera(details: impl Into<String>) -> Self {
        Self::InvalidCamera(details.into())
    }

    /// Create an invalid params error.
    #[must_use]
    pub fn invalid_params(details: impl Into<String>) -> Self {
        Self::InvalidParams(details.into())
    }
}
