//! Closest points involving triangles.

use mesh_types::{Segment, Triangle};
use nalgebra::Point3;

use crate::pair::nearest;
use crate::point::closest_point_on_segment;
use crate::segment::closest_points_segment_segment;
use crate::ClosestPair;

/// Orthogonal projection of `point` onto the triangle's plane, if the
/// projection lands inside the triangle (boundary included).
///
/// Uses barycentric coordinates from cross products. Returns `None` for
/// degenerate triangles and for projections outside the triangle.
///
/// # Example
///
/// ```
/// use mesh_proximity::project_onto_triangle;
/// use mesh_types::Triangle;
/// use nalgebra::Point3;
///
/// let tri = Triangle::from_arrays([0.0, 0.0, 0.0], [4.0, 0.0, 0.0], [0.0, 4.0, 0.0]);
///
/// let inside = project_onto_triangle(&Point3::new(1.0, 1.0, 5.0), &tri).unwrap();
/// assert!((inside - Point3::new(1.0, 1.0, 0.0)).norm() < 1e-10);
///
/// assert!(project_onto_triangle(&Point3::new(5.0, 5.0, 1.0), &tri).is_none());
/// ```
#[must_use]
#[allow(clippy::many_single_char_names)]
pub fn project_onto_triangle(point: &Point3<f64>, tri: &Triangle) -> Option<Point3<f64>> {
    let u = tri.v1 - tri.v0;
    let v = tri.v2 - tri.v0;
    let n = u.cross(&v);
    let nn = n.norm_squared();
    if nn < f64::EPSILON {
        return None;
    }

    let w = point - tri.v0;
    let gamma = u.cross(&w).dot(&n) / nn;
    let beta = w.cross(&v).dot(&n) / nn;
    let alpha = 1.0 - gamma - beta;

    let inside = |x: f64| (0.0..=1.0).contains(&x);
    if inside(alpha) && inside(beta) && inside(gamma) {
        Some(Point3::from(
            tri.v0.coords * alpha + tri.v1.coords * beta + tri.v2.coords * gamma,
        ))
    } else {
        None
    }
}

/// Closest point on a triangle to `point`.
///
/// Falls back to the nearest point on the three edges when the plane
/// projection lies outside the triangle.
#[must_use]
pub fn closest_point_on_triangle(point: &Point3<f64>, tri: &Triangle) -> Point3<f64> {
    if let Some(projected) = project_onto_triangle(point, tri) {
        return projected;
    }

    tri.edges()
        .iter()
        .map(|(a, b)| closest_point_on_segment(point, &Segment::new(*a, *b)))
        .min_by(|p, q| {
            (p - point)
                .norm_squared()
                .total_cmp(&(q - point).norm_squared())
        })
        .unwrap_or(tri.v0)
}

/// Closest points between a segment and a triangle.
///
/// `a` lies on the segment and `b` on the triangle. A segment passing
/// through the triangle yields the crossing point twice.
#[must_use]
pub fn closest_points_segment_triangle(segment: &Segment, tri: &Triangle) -> ClosestPair {
    if let Some(hit) = segment_crossing(segment, tri) {
        return ClosestPair::new(hit, hit);
    }

    let endpoint_pairs = [segment.start, segment.end]
        .into_iter()
        .filter_map(|p| project_onto_triangle(&p, tri).map(|q| ClosestPair::new(p, q)));
    let edge_pairs = tri
        .edges()
        .into_iter()
        .map(|(a, b)| closest_points_segment_segment(segment, &Segment::new(a, b)));

    nearest(endpoint_pairs.chain(edge_pairs))
        .unwrap_or_else(|| ClosestPair::new(segment.start, tri.v0))
}

/// Closest points between two triangles.
///
/// Checks each edge of either triangle against the other triangle, which
/// covers vertex-to-face, edge-to-edge and piercing configurations.
#[must_use]
pub fn closest_points_triangle_triangle(t1: &Triangle, t2: &Triangle) -> ClosestPair {
    let forward = t1
        .edges()
        .into_iter()
        .map(|(a, b)| closest_points_segment_triangle(&Segment::new(a, b), t2));
    let backward = t2
        .edges()
        .into_iter()
        .map(|(a, b)| closest_points_segment_triangle(&Segment::new(a, b), t1).swapped());

    nearest(forward.chain(backward)).unwrap_or_else(|| ClosestPair::new(t1.v0, t2.v0))
}

/// Point where `segment` passes through the interior of `tri`, if any.
fn segment_crossing(segment: &Segment, tri: &Triangle) -> Option<Point3<f64>> {
    let n = tri.normal()?;
    let d0 = (segment.start - tri.v0).dot(&n);
    let d1 = (segment.end - tri.v0).dot(&n);
    if d0 * d1 > 0.0 || (d0 - d1).abs() < f64::EPSILON {
        return None;
    }
    let t = d0 / (d0 - d1);
    let hit = segment.start + segment.direction() * t;
    project_onto_triangle(&hit, tri)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tri() -> Triangle {
        Triangle::from_arrays([0.0, 0.0, 0.0], [4.0, 0.0, 0.0], [0.0, 4.0, 0.0])
    }

    #[test]
    fn projection_on_edge_counts_as_inside() {
        let p = project_onto_triangle(&Point3::new(2.0, 0.0, 3.0), &tri());
        assert!(p.is_some());
    }

    #[test]
    fn degenerate_triangle_has_no_projection() {
        let flat = Triangle::from_arrays([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]);
        assert!(project_onto_triangle(&Point3::new(0.5, 1.0, 0.0), &flat).is_none());
    }

    #[test]
    fn closest_point_outside_falls_back_to_edge() {
        let p = closest_point_on_triangle(&Point3::new(2.0, -3.0, 0.0), &tri());
        assert!((p - Point3::new(2.0, 0.0, 0.0)).norm() < 1e-10);
    }

    #[test]
    fn closest_point_beyond_corner_is_corner() {
        let p = closest_point_on_triangle(&Point3::new(-1.0, -1.0, 2.0), &tri());
        assert!(p.coords.norm() < 1e-10);
    }

    #[test]
    fn segment_above_triangle() {
        let seg = Segment::new(Point3::new(1.0, 1.0, 2.0), Point3::new(1.0, 1.0, 5.0));
        let pair = closest_points_segment_triangle(&seg, &tri());
        assert!((pair.distance() - 2.0).abs() < 1e-10);
        assert!((pair.b - Point3::new(1.0, 1.0, 0.0)).norm() < 1e-10);
    }

    #[test]
    fn segment_through_triangle_touches() {
        let seg = Segment::new(Point3::new(1.0, 1.0, -2.0), Point3::new(1.0, 1.0, 5.0));
        let pair = closest_points_segment_triangle(&seg, &tri());
        assert!(pair.distance() < 1e-10);
    }

    #[test]
    fn segment_beside_triangle_hits_edge() {
        let seg = Segment::new(Point3::new(-2.0, 1.0, 0.0), Point3::new(-2.0, 3.0, 0.0));
        let pair = closest_points_segment_triangle(&seg, &tri());
        assert!((pair.distance() - 2.0).abs() < 1e-10);
    }

    #[test]
    fn stacked_triangles() {
        let upper = Triangle::from_arrays([0.0, 0.0, 3.0], [4.0, 0.0, 3.0], [0.0, 4.0, 3.0]);
        let pair = closest_points_triangle_triangle(&tri(), &upper);
        assert!((pair.distance() - 3.0).abs() < 1e-10);
        assert!(pair.a.z.abs() < 1e-10);
        assert!((pair.b.z - 3.0).abs() < 1e-10);
    }

    #[test]
    fn side_by_side_triangles() {
        let other = Triangle::from_arrays([6.0, 0.0, 0.0], [9.0, 0.0, 0.0], [6.0, 3.0, 0.0]);
        let pair = closest_points_triangle_triangle(&tri(), &other);
        assert!((pair.distance() - 2.0).abs() < 1e-10);
    }
}
