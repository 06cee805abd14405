//! Feature snapping and pairwise measurement for triangle meshes.
//!
//! This umbrella crate re-exports the mesh-* crates behind a measurement
//! tool. All crates are Layer 0 (zero Bevy dependencies) and can be used
//! in CLI tools, WASM, or servers.
//!
//! # Quick Start
//!
//! ```
//! use mesh::prelude::*;
//!
//! let plate = TriangleMesh::from_raw(
//!     &[0.0, 0.0, 0.0, 10.0, 0.0, 0.0, 10.0, 10.0, 0.0, 0.0, 10.0, 0.0],
//!     &[0, 1, 2, 0, 2, 3],
//! );
//! let fragments = [Fragment::new(0, plate).unwrap()];
//! let ctx = SnapContext::new(
//!     CameraState::perspective(Point3::new(5.0, 5.0, 10.0), Point3::new(5.0, 5.0, 0.0), 90.0),
//!     Viewport::new(1000.0, 1000.0),
//! );
//! let hit = |x: f64, y: f64| MeshHit {
//!     intersect_point: Point3::new(x, y, 0.0),
//!     face_index: u32::from(y > x),
//!     fragment_id: 0,
//!     node_id: 1,
//!     viewport_index: None,
//! };
//!
//! let mut session = PickSession::new();
//!
//! // Corner, then the far edge.
//! session.hover(classify_hit(&hit(9.95, 0.05), &fragments, &ctx).unwrap());
//! session.commit();
//! session.hover(classify_hit(&hit(5.0, 9.9), &fragments, &ctx).unwrap());
//! session.commit();
//!
//! let report = session.report().unwrap();
//! assert_eq!(report.from, FeatureKind::Vertex);
//! assert_eq!(report.to, FeatureKind::Edge);
//! assert!((report.distance.unwrap() - 10.0).abs() < 1e-9);
//! ```
//!
//! # Module Organization
//!
//! - [`types`] - Triangles, indexed meshes, the `Feature` model and tolerances
//! - [`proximity`] - Closest points, plane intersections and angles
//! - [`snap`] - Detection radius and hit classification
//! - [`measure`] - Distance and angle between two features
//! - [`pick`] - The two-pick session
//!
//! # Feature Flags
//!
//! - `serde` - Serialize features, measurements and reports

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

// =============================================================================
// Re-exports
// =============================================================================

/// Triangles, indexed meshes, the `Feature` model and tolerances.
pub use mesh_types as types;

/// Closest points, plane intersections and angles.
pub use mesh_proximity as proximity;

/// Detection radius and hit classification.
pub use mesh_snap as snap;

/// Distance and angle between two features.
pub use mesh_measure as measure;

/// The two-pick session.
pub use mesh_pick as pick;

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for a measurement tool.
///
/// # Usage
///
/// ```
/// use mesh::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use mesh_types::{Feature, FeatureKind, Point3, Triangle, TriangleMesh, Vector3};

    // Classification
    pub use mesh_snap::{
        CameraState, Fragment, MeshHit, PlanarCandidate, PlanarHit, Snap, SnapContext,
        SnapParams, Viewport, classify_hit, classify_planar,
    };

    // Measurement
    pub use mesh_measure::{Measurement, Target, measure};

    // Session
    pub use mesh_pick::{CommitOutcome, MeasurementReport, PickSession, PickState};
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prelude_imports() {
        use prelude::*;

        let session = PickSession::new();
        assert_eq!(session.state(), PickState::NoPick);
        assert_eq!(FeatureKind::ALL.len(), 6);
    }

    #[test]
    fn test_module_reexports() {
        let _ = snap::SnapParams::default();
        let _ = types::TriangleMesh::new();
        assert!(types::SNAP_EPSILON > 0.0);
    }
}
