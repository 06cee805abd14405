//! Snap classification: which feature a pointer hit is aiming at.
//!
//! Given a ray hit on a triangle mesh (or on flattened 2D drawing content),
//! this crate recovers the most specific feature near the hit:
//!
//! - **Vertex** when the hit is within the snap radius of a corner
//! - **Edge** when it is within the snap radius of a straight edge, refined
//!   to **Circular Arc** or **Curved Edge** for loops and bends
//! - **Face** otherwise, or **Curved Face** for non-planar regions
//!
//! The snap radius is a fixed pixel size converted to world units at the
//! hit point ([`DetectionRadius`]), so discrimination feels the same at
//! every zoom level.
//!
//! Fragments are prepared once ([`Fragment::new`]) and reused for every
//! hit; the shared-edge map needed to grow faces is built at that point.
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero Bevy dependencies**.
//!
//! # Example
//!
//! ```
//! use mesh_snap::{CameraState, Fragment, MeshHit, SnapContext, Viewport, classify_hit};
//! use mesh_types::{FeatureKind, TriangleMesh};
//! use nalgebra::Point3;
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
//!
//! let hit = MeshHit {
//!     intersect_point: Point3::new(4.0, 6.0, 0.0),
//!     face_index: 1,
//!     fragment_id: 0,
//!     node_id: 1,
//!     viewport_index: None,
//! };
//! let snap = classify_hit(&hit, &fragments, &ctx).unwrap().unwrap();
//! assert_eq!(snap.kind(), FeatureKind::Face);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod classify;
mod curve;
mod edge;
mod error;
mod face;
mod fragment;
mod params;
mod planar;
mod radius;

pub use classify::{MeshHit, Snap, SnapContext, classify_hit, refine_edge};
pub use curve::{edge_is_curved, fit_circle};
pub use edge::{EdgeCandidate, boundary_segments, nearest_boundary_edge, nearest_topology_edge};
pub use error::{SnapError, SnapResult};
pub use face::{FaceRegion, face_is_curved, grow_coplanar_face, topology_face};
pub use fragment::{Fragment, FragmentTopology, TopologyEdge, TopologyFace};
pub use params::SnapParams;
pub use planar::{CurveCandidate, PlanarCandidate, PlanarHit, classify_planar};
pub use radius::{CameraState, DetectionRadius, Viewport};

pub use nalgebra::{Point2, Point3, Vector3};
