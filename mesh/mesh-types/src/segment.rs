//! Straight line pieces making up edge geometry.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A straight segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Segment {
    /// Start point.
    pub start: Point3<f64>,
    /// End point.
    pub end: Point3<f64>,
}

impl Segment {
    /// Create a segment.
    #[inline]
    #[must_use]
    pub const fn new(start: Point3<f64>, end: Point3<f64>) -> Self {
        Self { start, end }
    }

    /// Vector from start to end.
    #[inline]
    #[must_use]
    pub fn direction(&self) -> Vector3<f64> {
        self.end - self.start
    }

    /// Segment length.
    #[inline]
    #[must_use]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    /// The same segment traversed the other way.
    #[inline]
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }
}

/// Split a line strip into consecutive pieces.
///
/// Fewer than two points yields no pieces.
///
/// # Example
///
/// ```
/// use mesh_types::{segments_from_strip, Point3};
///
/// let strip = [
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(1.0, 1.0, 0.0),
/// ];
/// let pieces = segments_from_strip(&strip);
/// assert_eq!(pieces.len(), 2);
/// assert_eq!(pieces[1].start, strip[1]);
/// ```
#[must_use]
pub fn segments_from_strip(points: &[Point3<f64>]) -> Vec<Segment> {
    points
        .windows(2)
        .map(|w| Segment::new(w[0], w[1]))
        .collect()
}
