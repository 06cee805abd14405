//! Core types for mesh feature snapping and measurement.
//!
//! This crate provides the data model shared by the snapping, measurement
//! and pick-session crates:
//!
//! - [`TriangleMesh`] - An indexed triangle mesh in world coordinates
//! - [`Triangle`] - A concrete triangle with vertex positions
//! - [`EdgeMap`] - Shared-edge adjacency, built once per mesh
//! - [`Feature`] - What a pick snapped to (vertex, edge, face, arc, ...)
//! - [`BoundingSphere`] - Pruning bounds for triangle-set searches
//! - [`SNAP_EPSILON`] - The single tolerance behind every comparison
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero Bevy dependencies**. It can be used in:
//! - Viewer back ends
//! - Web applications (WASM)
//! - CLI tools
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f64` and the
//! snapping tolerance is absolute in whatever unit the host model uses.
//!
//! # Example
//!
//! ```
//! use mesh_types::{EdgeFeature, Feature, FeatureKind, Point3};
//!
//! let edge = Feature::Edge(EdgeFeature::segment(
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(3.0, 4.0, 0.0),
//! ));
//!
//! assert_eq!(edge.kind(), FeatureKind::Edge);
//! assert!((edge.length().unwrap() - 5.0).abs() < 1e-10);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod adjacency;
mod error;
mod feature;
mod mesh;
mod segment;
mod sphere;
mod tolerance;
mod traits;
mod triangle;

pub use adjacency::EdgeMap;
pub use error::{TypesError, TypesResult};
pub use feature::{ArcFeature, EdgeFeature, FaceFeature, FaceIdentity, Feature, FeatureKind};
pub use mesh::TriangleMesh;
pub use segment::{Segment, segments_from_strip};
pub use sphere::BoundingSphere;
pub use tolerance::{
    PointWelder, SNAP_EPSILON, approx_eq, directions_parallel, points_equal, unit, vectors_equal,
};
pub use traits::MeshTopology;
pub use triangle::Triangle;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
