//! Triangle with concrete world-space corners.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::sphere::BoundingSphere;
use crate::tolerance::{approx_eq, vectors_equal};

/// A triangle with concrete vertex positions.
///
/// Snapping and measurement work on resolved positions rather than indices,
/// so faces are handed around as `Triangle` values once they leave the
/// indexed [`TriangleMesh`](crate::TriangleMesh).
///
/// Winding is counter-clockwise when viewed from the front.
///
/// # Example
///
/// ```
/// use mesh_types::{Triangle, Point3};
///
/// let tri = Triangle::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// );
///
/// assert!((tri.area() - 0.5).abs() < 1e-10);
/// let normal = tri.normal().unwrap();
/// assert!((normal.z - 1.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Triangle {
    /// First vertex.
    pub v0: Point3<f64>,
    /// Second vertex.
    pub v1: Point3<f64>,
    /// Third vertex.
    pub v2: Point3<f64>,
}

impl Triangle {
    /// Create a new triangle from three points.
    #[inline]
    #[must_use]
    pub const fn new(v0: Point3<f64>, v1: Point3<f64>, v2: Point3<f64>) -> Self {
        Self { v0, v1, v2 }
    }

    /// Create a triangle from coordinate arrays.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::Triangle;
    ///
    /// let tri = Triangle::from_arrays([0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 2.0, 0.0]);
    /// assert!((tri.area() - 2.0).abs() < 1e-10);
    /// ```
    #[inline]
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Point3::new is not const in nalgebra
    pub fn from_arrays(v0: [f64; 3], v1: [f64; 3], v2: [f64; 3]) -> Self {
        Self {
            v0: Point3::new(v0[0], v0[1], v0[2]),
            v1: Point3::new(v1[0], v1[1], v1[2]),
            v2: Point3::new(v2[0], v2[1], v2[2]),
        }
    }

    /// Cross product of the two edges leaving `v0`.
    ///
    /// The magnitude equals twice the area.
    #[inline]
    #[must_use]
    pub fn normal_unnormalized(&self) -> Vector3<f64> {
        (self.v1 - self.v0).cross(&(self.v2 - self.v0))
    }

    /// Unit face normal, or `None` for a zero-area triangle.
    #[must_use]
    pub fn normal(&self) -> Option<Vector3<f64>> {
        let n = self.normal_unnormalized();
        let len_sq = n.norm_squared();
        if len_sq > f64::EPSILON {
            Some(n / len_sq.sqrt())
        } else {
            None
        }
    }

    /// Area of the triangle.
    #[inline]
    #[must_use]
    pub fn area(&self) -> f64 {
        self.normal_unnormalized().norm() * 0.5
    }

    /// Signed offset of the supporting plane along `normal`.
    ///
    /// Two triangles lie in the same plane when their normals agree and
    /// their offsets along that shared normal agree.
    #[inline]
    #[must_use]
    pub fn plane_offset(&self, normal: &Vector3<f64>) -> f64 {
        normal.dot(&self.v0.coords)
    }

    /// Whether `other` lies in the same plane with the same facing.
    ///
    /// Both unit normals must match component-wise and both plane offsets
    /// must match, each within [`SNAP_EPSILON`](crate::SNAP_EPSILON).
    /// Degenerate triangles are never coplanar with anything.
    #[must_use]
    pub fn is_coplanar_with(&self, other: &Self) -> bool {
        let (Some(n1), Some(n2)) = (self.normal(), other.normal()) else {
            return false;
        };
        vectors_equal(&n1, &n2) && approx_eq(self.plane_offset(&n1), other.plane_offset(&n1))
    }

    /// The three edges as (start, end) pairs: v0→v1, v1→v2, v2→v0.
    #[must_use]
    pub const fn edges(&self) -> [(Point3<f64>, Point3<f64>); 3] {
        [(self.v0, self.v1), (self.v1, self.v2), (self.v2, self.v0)]
    }

    /// Vertices as an array.
    #[inline]
    #[must_use]
    pub const fn vertices(&self) -> [Point3<f64>; 3] {
        [self.v0, self.v1, self.v2]
    }

    /// Smallest sphere around the axis-aligned box of the three corners.
    #[must_use]
    pub fn bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere::from_points(self.vertices().iter())
    }
}
