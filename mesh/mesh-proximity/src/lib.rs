//! Closest-point and intersection primitives for feature measurement.
//!
//! Every measurement between two snapped features reduces to one of the
//! queries in this crate:
//!
//! - **Points**: projection onto lines, segments and planes
//! - **Segments**: closest points between two segments
//! - **Triangles**: barycentric projection, segment-triangle and
//!   triangle-triangle closest points
//! - **Sets**: exhaustive minima over polylines and triangle sets, with
//!   bounding-sphere pruning for triangle-set pairs
//! - **Planes**: plane-plane and line-plane intersection
//! - **Angles**: vector and line-to-plane angles in degrees
//!
//! All functions are pure. Degeneracy tests use
//! [`SNAP_EPSILON`](mesh_types::SNAP_EPSILON).
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero Bevy dependencies**.
//!
//! # Example
//!
//! ```
//! use mesh_proximity::{closest_point_on_triangle, closest_points_segment_segment};
//! use mesh_types::{Segment, Triangle};
//! use nalgebra::Point3;
//!
//! let tri = Triangle::from_arrays([0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 2.0, 0.0]);
//! let p = closest_point_on_triangle(&Point3::new(0.5, 0.5, 3.0), &tri);
//! assert!((p - Point3::new(0.5, 0.5, 0.0)).norm() < 1e-10);
//!
//! let a = Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 0.0, 10.0));
//! let b = Segment::new(Point3::new(5.0, 0.0, 0.0), Point3::new(5.0, 0.0, 10.0));
//! assert!((closest_points_segment_segment(&a, &b).distance() - 5.0).abs() < 1e-10);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod angle;
mod pair;
mod plane;
mod point;
mod segment;
mod sets;
mod triangle;

pub use angle::{angle_between, angle_line_plane};
pub use pair::ClosestPair;
pub use plane::{PlaneIntersection, intersect_line_plane, intersect_plane_plane};
pub use point::{
    closest_point_on_line, closest_point_on_plane, closest_point_on_segment,
    distance_point_segment, line_parameter, point_on_segment,
};
pub use segment::closest_points_segment_segment;
pub use sets::{
    closest_point_on_polyline, closest_point_on_triangles, closest_points_polyline_triangles,
    closest_points_polylines, closest_points_triangle_sets,
    closest_points_triangle_sets_exhaustive,
};
pub use triangle::{
    closest_point_on_triangle, closest_points_segment_triangle, closest_points_triangle_triangle,
    project_onto_triangle,
};
