//! Error types for mesh data validation.

use thiserror::Error;

/// Result type alias for mesh type operations.
pub type TypesResult<T> = Result<T, TypesError>;

/// Errors raised while validating host-provided geometry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TypesError {
    /// A face refers to a vertex that does not exist.
    #[error("face {face} refers to vertex {index}, but the mesh has {vertex_count} vertices")]
    IndexOutOfRange {
        /// Offending face.
        face: usize,
        /// Offending vertex index.
        index: u32,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },
}
