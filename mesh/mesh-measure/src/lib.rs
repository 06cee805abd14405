//! Distance and angle measurement between two picked features.
//!
//! This crate turns a pair of snapped features into a single result:
//!
//! - **Distance**: two points, the Euclidean distance between them and the
//!   absolute delta along each world axis
//! - **Angle**: degrees between two edges, an edge and a face, or two faces
//!
//! Which one depends on the pair of feature kinds and their relative
//! orientation; see [`measure`]. A pair of identical features is refused
//! before any geometry runs ([`is_identical`]).
//!
//! Results carry optional drawing hints ([`Extension`],
//! [`AngleAnnotation`]) for the overlay layer. Formatting and unit
//! conversion are left to the host.
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero Bevy dependencies**. It can be used in:
//! - CLI tools
//! - Web applications (WASM)
//! - Servers
//!
//! # Example
//!
//! ```
//! use mesh_measure::{Target, measure};
//! use mesh_types::{EdgeFeature, Feature, Point3};
//!
//! let left = Feature::Edge(EdgeFeature::segment(
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(0.0, 0.0, 10.0),
//! ));
//! let right = Feature::Edge(EdgeFeature::segment(
//!     Point3::new(5.0, 0.0, 0.0),
//!     Point3::new(5.0, 0.0, 10.0),
//! ));
//!
//! let m = measure(
//!     &Target::new(&left, Point3::new(0.0, 0.0, 2.0)),
//!     &Target::new(&right, Point3::new(5.0, 0.0, 7.0)),
//! )
//! .unwrap();
//!
//! // Parallel edges measure their gap, not an angle.
//! assert!((m.distance().unwrap() - 5.0).abs() < 1e-10);
//! assert!(m.angle().is_none());
//! ```
//!
//! # Coordinate System
//!
//! Uses a **right-handed coordinate system**. Axis deltas are reported
//! along world X, Y and Z.

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod dispatch;
mod error;
mod identity;
mod pairs;
mod result;

// Re-export main types and functions
pub use dispatch::{Target, measure};
pub use error::{MeasureError, MeasureResult};
pub use identity::is_identical;
pub use result::{
    AngleAnnotation, AngleMeasurement, DistanceMeasurement, Extension, Measurement,
    measure_distance,
};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
