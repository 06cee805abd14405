//! Plane intersections.

use mesh_types::{SNAP_EPSILON, unit};
use nalgebra::{Point3, Vector3};

use crate::point::closest_point_on_line;

/// Line where two planes meet, plus where two reference points project
/// onto it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneIntersection {
    /// A point on the intersection line.
    pub origin: Point3<f64>,
    /// Direction of the line, `n1 × n2` (not normalized).
    pub direction: Vector3<f64>,
    /// Projection of the first plane's reference point onto the line.
    pub foot1: Point3<f64>,
    /// Projection of the second plane's reference point onto the line.
    pub foot2: Point3<f64>,
}

/// Intersect the plane through `p1` with normal `n1` and the plane through
/// `p2` with normal `n2`.
///
/// A point on the line is found by zeroing the coordinate along which the
/// line direction is largest and solving the remaining 2×2 system. Returns
/// `None` when the planes are parallel.
///
/// # Example
///
/// ```
/// use mesh_proximity::intersect_plane_plane;
/// use nalgebra::{Point3, Vector3};
///
/// let hit = intersect_plane_plane(
///     &Point3::new(3.0, 3.0, 0.0),
///     &Vector3::z(),
///     &Point3::new(0.0, 5.0, 7.0),
///     &Vector3::y(),
/// )
/// .unwrap();
///
/// // The line is y = 5, z = 0.
/// assert!((hit.foot1 - Point3::new(3.0, 5.0, 0.0)).norm() < 1e-10);
/// assert!((hit.foot2 - Point3::new(0.0, 5.0, 0.0)).norm() < 1e-10);
/// ```
#[must_use]
pub fn intersect_plane_plane(
    p1: &Point3<f64>,
    n1: &Vector3<f64>,
    p2: &Point3<f64>,
    n2: &Vector3<f64>,
) -> Option<PlaneIntersection> {
    let u = n1.cross(n2);
    let scale = n1.norm() * n2.norm();
    if scale < f64::EPSILON || u.norm() < SNAP_EPSILON * scale {
        return None;
    }

    let d1 = -n1.dot(&p1.coords);
    let d2 = -n2.dot(&p2.coords);
    let (ax, ay, az) = (u.x.abs(), u.y.abs(), u.z.abs());

    let origin = if ax >= ay && ax >= az {
        Point3::new(
            0.0,
            d2.mul_add(n1.z, -(d1 * n2.z)) / u.x,
            d1.mul_add(n2.y, -(d2 * n1.y)) / u.x,
        )
    } else if ay >= az {
        Point3::new(
            d1.mul_add(n2.z, -(d2 * n1.z)) / u.y,
            0.0,
            d2.mul_add(n1.x, -(d1 * n2.x)) / u.y,
        )
    } else {
        Point3::new(
            d2.mul_add(n1.y, -(d1 * n2.y)) / u.z,
            d1.mul_add(n2.x, -(d2 * n1.x)) / u.z,
            0.0,
        )
    };

    let along = origin + u;
    Some(PlaneIntersection {
        origin,
        direction: u,
        foot1: closest_point_on_line(p1, &origin, &along),
        foot2: closest_point_on_line(p2, &origin, &along),
    })
}

/// Where the infinite line through `a` and `b` crosses the plane through
/// `plane_point` with normal `normal`.
///
/// Returns `None` when the line is parallel to the plane or `a == b`.
#[must_use]
pub fn intersect_line_plane(
    plane_point: &Point3<f64>,
    normal: &Vector3<f64>,
    a: &Point3<f64>,
    b: &Point3<f64>,
) -> Option<Point3<f64>> {
    let n = unit(normal)?;
    let u = b - a;
    let dir = unit(&u)?;
    let denom = n.dot(&dir);
    if denom.abs() < SNAP_EPSILON {
        return None;
    }
    let t = n.dot(&(plane_point - a)) / denom;
    Some(a + dir * t)
}
