//! Closest points between two segments.

use mesh_types::{SNAP_EPSILON, Segment};

use crate::ClosestPair;

/// Closest points between two finite segments.
///
/// Solves for the parameters of the common perpendicular and clamps them
/// to both segments. When the segments are parallel the parameter on the
/// first segment is pinned to its start and the second is solved from it,
/// which still yields the minimum distance. A zero-length second segment
/// is projected onto the first.
///
/// # Example
///
/// ```
/// use mesh_proximity::closest_points_segment_segment;
/// use mesh_types::Segment;
/// use nalgebra::Point3;
///
/// let a = Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 0.0, 0.0));
/// let b = Segment::new(Point3::new(1.0, -1.0, 3.0), Point3::new(1.0, 1.0, 3.0));
///
/// let pair = closest_points_segment_segment(&a, &b);
/// assert!((pair.distance() - 3.0).abs() < 1e-10);
/// assert!((pair.a - Point3::new(1.0, 0.0, 0.0)).norm() < 1e-10);
/// ```
#[must_use]
#[allow(clippy::many_single_char_names, clippy::similar_names)]
pub fn closest_points_segment_segment(s1: &Segment, s2: &Segment) -> ClosestPair {
    let u = s1.direction();
    let v = s2.direction();
    let w = s1.start - s2.start;

    let a = u.dot(&u);
    let b = u.dot(&v);
    let c = v.dot(&v);
    let d = u.dot(&w);
    let e = v.dot(&w);
    let det = a.mul_add(c, -(b * b));

    // Second segment is a point: project it onto the first.
    if c <= f64::MIN_POSITIVE {
        return ClosestPair::new(s1.start + u * ratio(-d, a), s2.start);
    }

    let (mut s_num, mut s_den) = (0.0, det);
    let (mut t_num, mut t_den) = (0.0, det);

    // Parallel or degenerate: sin of the angle below SNAP_EPSILON.
    if det <= SNAP_EPSILON * SNAP_EPSILON * a * c {
        s_den = 1.0;
        t_num = e;
        t_den = c;
    } else {
        s_num = b.mul_add(e, -(c * d));
        t_num = a.mul_add(e, -(b * d));
        if s_num < 0.0 {
            s_num = 0.0;
            t_num = e;
            t_den = c;
        } else if s_num > s_den {
            s_num = s_den;
            t_num = e + b;
            t_den = c;
        }
    }

    if t_num < 0.0 {
        t_num = 0.0;
        if -d < 0.0 {
            s_num = 0.0;
        } else if -d > a {
            s_num = s_den;
        } else {
            s_num = -d;
            s_den = a;
        }
    } else if t_num > t_den {
        t_num = t_den;
        if -d + b < 0.0 {
            s_num = 0.0;
        } else if -d + b > a {
            s_num = s_den;
        } else {
            s_num = -d + b;
            s_den = a;
        }
    }

    let s = ratio(s_num, s_den);
    let t = ratio(t_num, t_den);

    ClosestPair::new(s1.start + u * s, s2.start + v * t)
}

fn ratio(num: f64, den: f64) -> f64 {
    if den.abs() <= f64::MIN_POSITIVE {
        0.0
    } else {
        (num / den).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn seg(a: [f64; 3], b: [f64; 3]) -> Segment {
        Segment::new(Point3::new(a[0], a[1], a[2]), Point3::new(b[0], b[1], b[2]))
    }

    #[test]
    fn crossing_segments_touch() {
        let pair = closest_points_segment_segment(
            &seg([-1.0, 0.0, 0.0], [1.0, 0.0, 0.0]),
            &seg([0.0, -1.0, 0.0], [0.0, 1.0, 0.0]),
        );
        assert!(pair.distance() < 1e-10);
    }

    #[test]
    fn parallel_overlapping_segments_report_gap() {
        let pair = closest_points_segment_segment(
            &seg([0.0, 0.0, 0.0], [0.0, 0.0, 10.0]),
            &seg([5.0, 0.0, 2.0], [5.0, 0.0, 12.0]),
        );
        assert!((pair.distance() - 5.0).abs() < 1e-10);
    }

    #[test]
    fn parallel_disjoint_segments_use_nearest_ends() {
        let pair = closest_points_segment_segment(
            &seg([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]),
            &seg([3.0, 4.0, 0.0], [5.0, 4.0, 0.0]),
        );
        assert!((pair.distance() - (4.0_f64 + 16.0).sqrt()).abs() < 1e-10);
        assert!((pair.a - Point3::new(1.0, 0.0, 0.0)).norm() < 1e-10);
        assert!((pair.b - Point3::new(3.0, 4.0, 0.0)).norm() < 1e-10);
    }

    #[test]
    fn skew_segments_clamp_to_endpoint() {
        let pair = closest_points_segment_segment(
            &seg([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]),
            &seg([3.0, -1.0, 2.0], [3.0, 1.0, 2.0]),
        );
        assert!((pair.a - Point3::new(1.0, 0.0, 0.0)).norm() < 1e-10);
        assert!((pair.b - Point3::new(3.0, 0.0, 2.0)).norm() < 1e-10);
    }

    #[test]
    fn degenerate_segment_acts_as_point() {
        let pair = closest_points_segment_segment(
            &seg([2.0, 2.0, 0.0], [2.0, 2.0, 0.0]),
            &seg([0.0, 0.0, 0.0], [4.0, 0.0, 0.0]),
        );
        assert!((pair.distance() - 2.0).abs() < 1e-10);
        assert!((pair.b - Point3::new(2.0, 0.0, 0.0)).norm() < 1e-10);
    }

    #[test]
    fn degenerate_second_segment_projects_onto_first() {
        let line = seg([0.0, 0.0, 0.0], [4.0, 0.0, 0.0]);
        let point = seg([2.0, 2.0, 0.0], [2.0, 2.0, 0.0]);

        let pair = closest_points_segment_segment(&line, &point);
        assert!((pair.distance() - 2.0).abs() < 1e-10);
        assert!((pair.a - Point3::new(2.0, 0.0, 0.0)).norm() < 1e-10);
        assert!((pair.b - Point3::new(2.0, 2.0, 0.0)).norm() < 1e-10);

        let swapped = closest_points_segment_segment(&point, &line);
        assert!((swapped.distance() - pair.distance()).abs() < 1e-10);
    }

    #[test]
    fn degenerate_second_segment_past_the_end_clamps() {
        let pair = closest_points_segment_segment(
            &seg([0.0, 0.0, 0.0], [4.0, 0.0, 0.0]),
            &seg([7.0, 4.0, 0.0], [7.0, 4.0, 0.0]),
        );
        assert!((pair.distance() - 5.0).abs() < 1e-10);
        assert!((pair.a - Point3::new(4.0, 0.0, 0.0)).norm() < 1e-10);
    }

    #[test]
    fn both_degenerate() {
        let pair = closest_points_segment_segment(
            &seg([0.0, 0.0, 0.0], [0.0, 0.0, 0.0]),
            &seg([0.0, 3.0, 4.0], [0.0, 3.0, 4.0]),
        );
        assert!((pair.distance() - 5.0).abs() < 1e-10);
    }
}
