//! Angles between directions and planes, in degrees.

use mesh_types::unit;
use nalgebra::Vector3;

/// Angle between two vectors in degrees, in `[0, 180]`.
///
/// Zero-length input yields `0.0`.
///
/// # Example
///
/// ```
/// use mesh_proximity::angle_between;
/// use nalgebra::Vector3;
///
/// let a = angle_between(&Vector3::x(), &Vector3::new(1.0, 1.0, 0.0));
/// assert!((a - 45.0).abs() < 1e-10);
/// ```
#[must_use]
pub fn angle_between(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    let (Some(a), Some(b)) = (unit(a), unit(b)) else {
        return 0.0;
    };
    a.dot(&b).clamp(-1.0, 1.0).acos().to_degrees()
}

/// Angle between a line direction and a plane in degrees, in `[0, 90]`.
///
/// This is the complement of the angle between the line and the plane
/// normal, folded so that either normal orientation gives the same answer.
#[must_use]
pub fn angle_line_plane(direction: &Vector3<f64>, normal: &Vector3<f64>) -> f64 {
    let to_normal = angle_between(direction, normal);
    if to_normal > 90.0 {
        to_normal - 90.0
    } else {
        90.0 - to_normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_vectors_are_straight() {
        assert!((angle_between(&Vector3::z(), &-Vector3::z()) - 180.0).abs() < 1e-10);
    }

    #[test]
    fn zero_vector_gives_zero() {
        assert!(angle_between(&Vector3::zeros(), &Vector3::x()).abs() < 1e-12);
    }

    #[test]
    fn line_along_normal_is_perpendicular_to_plane() {
        assert!((angle_line_plane(&Vector3::z(), &Vector3::z()) - 90.0).abs() < 1e-10);
        assert!((angle_line_plane(&-Vector3::z(), &Vector3::z()) - 90.0).abs() < 1e-10);
    }

    #[test]
    fn line_in_plane_has_zero_angle() {
        assert!(angle_line_plane(&Vector3::x(), &Vector3::z()).abs() < 1e-10);
    }

    #[test]
    fn tilted_line_is_folded() {
        let up = angle_line_plane(&Vector3::new(1.0, 0.0, 1.0), &Vector3::z());
        let down = angle_line_plane(&Vector3::new(1.0, 0.0, -1.0), &Vector3::z());
        assert!((up - 45.0).abs() < 1e-10);
        assert!((down - 45.0).abs() < 1e-10);
    }
}
