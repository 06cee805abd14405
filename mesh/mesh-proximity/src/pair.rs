//! Closest-point pair returned by every two-sided query.

use nalgebra::Point3;

/// A pair of closest points, one on each queried object.
///
/// `a` always lies on the first argument of the query that produced it and
/// `b` on the second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestPair {
    /// Point on the first object.
    pub a: Point3<f64>,
    /// Point on the second object.
    pub b: Point3<f64>,
}

impl ClosestPair {
    /// Create a pair.
    #[inline]
    #[must_use]
    pub const fn new(a: Point3<f64>, b: Point3<f64>) -> Self {
        Self { a, b }
    }

    /// Distance between the two points.
    #[inline]
    #[must_use]
    pub fn distance(&self) -> f64 {
        (self.b - self.a).norm()
    }

    /// Squared distance between the two points.
    #[inline]
    #[must_use]
    pub fn distance_squared(&self) -> f64 {
        (self.b - self.a).norm_squared()
    }

    /// The same pair with the roles of the objects exchanged.
    #[inline]
    #[must_use]
    pub const fn swapped(self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }

    /// Whichever of `self` and `other` is closer; `self` on ties.
    #[inline]
    #[must_use]
    pub fn nearer(self, other: Self) -> Self {
        if other.distance_squared() < self.distance_squared() {
            other
        } else {
            self
        }
    }
}

/// Keep the nearest of a stream of pairs.
pub(crate) fn nearest(pairs: impl IntoIterator<Item = ClosestPair>) -> Option<ClosestPair> {
    pairs.into_iter().reduce(ClosestPair::nearer)
}
