//! Point projections onto lines, segments and planes.

use mesh_types::{SNAP_EPSILON, Segment, unit};
use nalgebra::{Point3, Vector3};

/// Parameter `t` of the projection of `point` onto the line `a + t (b - a)`.
///
/// Returns `0.0` when `a` and `b` coincide.
#[must_use]
pub fn line_parameter(point: &Point3<f64>, a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    let ab = b - a;
    let len_sq = ab.norm_squared();
    if len_sq < f64::EPSILON {
        return 0.0;
    }
    (point - a).dot(&ab) / len_sq
}

/// Projection of `point` onto the infinite line through `a` and `b`.
///
/// # Example
///
/// ```
/// use mesh_proximity::closest_point_on_line;
/// use nalgebra::Point3;
///
/// let foot = closest_point_on_line(
///     &Point3::new(5.0, 3.0, 0.0),
///     &Point3::new(0.0, 0.0, 0.0),
///     &Point3::new(1.0, 0.0, 0.0),
/// );
/// assert!((foot - Point3::new(5.0, 0.0, 0.0)).norm() < 1e-10);
/// ```
#[must_use]
pub fn closest_point_on_line(
    point: &Point3<f64>,
    a: &Point3<f64>,
    b: &Point3<f64>,
) -> Point3<f64> {
    a + (b - a) * line_parameter(point, a, b)
}

/// Projection of `point` onto `segment`, clamped to its ends.
#[must_use]
pub fn closest_point_on_segment(point: &Point3<f64>, segment: &Segment) -> Point3<f64> {
    let t = line_parameter(point, &segment.start, &segment.end).clamp(0.0, 1.0);
    segment.start + segment.direction() * t
}

/// Distance from `point` to `segment`.
#[inline]
#[must_use]
pub fn distance_point_segment(point: &Point3<f64>, segment: &Segment) -> f64 {
    (closest_point_on_segment(point, segment) - point).norm()
}

/// Orthogonal projection of `point` onto the plane through `plane_point`
/// with normal `normal`.
///
/// The normal does not need to be unit length. A zero normal leaves the
/// point where it is.
#[must_use]
pub fn closest_point_on_plane(
    point: &Point3<f64>,
    plane_point: &Point3<f64>,
    normal: &Vector3<f64>,
) -> Point3<f64> {
    let Some(n) = unit(normal) else {
        return *point;
    };
    point - n * (point - plane_point).dot(&n)
}

/// Whether `point` lies on `segment` within [`SNAP_EPSILON`].
#[must_use]
pub fn point_on_segment(point: &Point3<f64>, segment: &Segment) -> bool {
    distance_point_segment(point, segment) <= SNAP_EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_projection_extends_beyond_ends() {
        let foot = closest_point_on_line(
            &Point3::new(-4.0, 2.0, 0.0),
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(1.0, 0.0, 0.0),
        );
        assert!((foot.x + 4.0).abs() < 1e-10);
        assert!(foot.y.abs() < 1e-10);
    }

    #[test]
    fn degenerate_line_returns_anchor() {
        let a = Point3::new(1.0, 1.0, 1.0);
        let foot = closest_point_on_line(&Point3::new(5.0, 0.0, 0.0), &a, &a);
        assert!((foot - a).norm() < 1e-12);
    }

    #[test]
    fn segment_projection_clamps() {
        let seg = Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 0.0, 0.0));
        let p = closest_point_on_segment(&Point3::new(5.0, 1.0, 0.0), &seg);
        assert!((p - seg.end).norm() < 1e-12);
        assert!((distance_point_segment(&Point3::new(1.0, 3.0, 0.0), &seg) - 3.0).abs() < 1e-10);
    }

    #[test]
    fn plane_projection_drops_normal_component() {
        let p = closest_point_on_plane(
            &Point3::new(1.0, 2.0, 7.0),
            &Point3::new(0.0, 0.0, 3.0),
            &Vector3::new(0.0, 0.0, 5.0),
        );
        assert!((p - Point3::new(1.0, 2.0, 3.0)).norm() < 1e-10);
    }

    #[test]
    fn point_on_segment_uses_tolerance() {
        let seg = Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0));
        assert!(point_on_segment(&Point3::new(0.5, 0.0005, 0.0), &seg));
        assert!(!point_on_segment(&Point3::new(0.5, 0.01, 0.0), &seg));
    }
}
