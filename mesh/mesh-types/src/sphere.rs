//! Bounding spheres used to prune triangle-pair searches.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A sphere enclosing a set of points.
///
/// The center is the midpoint of the points' axis-aligned bounding box and
/// the radius is the largest distance from it to any point. That is not the
/// minimal enclosing sphere, but it is cheap and tight enough for pruning.
///
/// # Example
///
/// ```
/// use mesh_types::{BoundingSphere, Point3};
///
/// let a = BoundingSphere::new(Point3::new(0.0, 0.0, 0.0), 1.0);
/// let b = BoundingSphere::new(Point3::new(5.0, 0.0, 0.0), 1.0);
///
/// assert!((a.min_distance(&b) - 3.0).abs() < 1e-10);
/// assert!((a.max_distance(&b) - 7.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundingSphere {
    /// Sphere center.
    pub center: Point3<f64>,
    /// Sphere radius.
    pub radius: f64,
}

impl BoundingSphere {
    /// Create a sphere from its center and radius.
    #[inline]
    #[must_use]
    pub const fn new(center: Point3<f64>, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Sphere around a set of points.
    ///
    /// An empty iterator yields a zero-radius sphere at the origin.
    #[must_use]
    pub fn from_points<'a>(points: impl Iterator<Item = &'a Point3<f64>> + Clone) -> Self {
        let mut min = Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY);
        let mut max = Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY);
        let mut any = false;
        for p in points.clone() {
            any = true;
            min = min.inf(p);
            max = max.sup(p);
        }
        if !any {
            return Self::new(Point3::origin(), 0.0);
        }

        let center = nalgebra::center(&min, &max);
        let radius = points.map(|p| (p - center).norm()).fold(0.0_f64, f64::max);
        Self { center, radius }
    }

    /// Lower bound on the distance between anything inside `self` and
    /// anything inside `other`. Negative when the spheres overlap.
    #[inline]
    #[must_use]
    pub fn min_distance(&self, other: &Self) -> f64 {
        (self.center - other.center).norm() - self.radius - other.radius
    }

    /// Upper bound on the distance between any point inside `self` and
    /// any point inside `other`.
    #[inline]
    #[must_use]
    pub fn max_distance(&self, other: &Self) -> f64 {
        (self.center - other.center).norm() + self.radius + other.radius
    }
}
