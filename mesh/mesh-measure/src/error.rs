//! Error types for measurement operations.

use mesh_types::FeatureKind;
use thiserror::Error;

/// Result type alias for measurement operations.
pub type MeasureResult<T> = Result<T, MeasureError>;

/// Errors that can occur during measurement operations.
///
/// Degenerate geometry (parallel lines, coincident points) is never an
/// error; each such case has a defined result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MeasureError {
    /// Both picks are the same feature.
    #[error("cannot measure a feature against itself")]
    IdenticalFeatures,

    /// The measurement needs an arc radius the arc does not have.
    #[error("arc radius is undefined")]
    UndefinedArcRadius,

    /// A feature carries no geometry.
    #[error("{kind} feature has no geometry")]
    EmptyFeature {
        /// Kind of the empty feature.
        kind: FeatureKind,
    },
}

impl MeasureError {
    /// Create an empty feature error.
    #[must_use]
    pub const fn empty(kind: FeatureKind) -> Self {
        Self::EmptyFeature { kind }
    }
}
