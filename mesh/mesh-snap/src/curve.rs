//! Edge refinement: circles and curved edges.

use mesh_types::{EdgeFeature, Point3, approx_eq, directions_parallel, unit};

/// Fit a circle to a closed edge.
///
/// The edge qualifies when it is closed, has at least `min_samples`
/// pieces, and every piece start lies at the same distance (within
/// [`SNAP_EPSILON`](mesh_types::SNAP_EPSILON)) from the centroid of the
/// piece starts. Returns the center and radius.
///
/// # Example
///
/// ```
/// use mesh_snap::fit_circle;
/// use mesh_types::{EdgeFeature, Point3};
///
/// let ring: Vec<Point3<f64>> = (0..=12)
///     .map(|i| {
///         let t = f64::from(i) * std::f64::consts::TAU / 12.0;
///         Point3::new(2.0 * t.cos(), 2.0 * t.sin(), 1.0)
///     })
///     .collect();
///
/// let (center, radius) = fit_circle(&EdgeFeature::from_strip(&ring), 8).unwrap();
/// assert!((center - Point3::new(0.0, 0.0, 1.0)).norm() < 1e-10);
/// assert!((radius - 2.0).abs() < 1e-10);
/// ```
#[must_use]
pub fn fit_circle(edge: &EdgeFeature, min_samples: usize) -> Option<(Point3<f64>, f64)> {
    if !edge.is_closed() || edge.pieces.len() < min_samples.max(3) {
        return None;
    }

    #[allow(clippy::cast_precision_loss)]
    let count = edge.pieces.len() as f64;
    let sum = edge
        .pieces
        .iter()
        .fold(nalgebra::Vector3::zeros(), |acc, s| acc + s.start.coords);
    let center = Point3::from(sum / count);

    let radius = (edge.pieces[0].start - center).norm();
    if approx_eq(radius, 0.0) {
        return None;
    }
    edge.pieces
        .iter()
        .all(|s| approx_eq((s.start - center).norm(), radius))
        .then_some((center, radius))
}

/// True when an edge is not a single straight line.
///
/// Closed loops are always curved. Otherwise the edge is curved when any
/// piece runs in a direction neither equal nor opposite to the first
/// piece's. Zero-length pieces are ignored.
#[must_use]
pub fn edge_is_curved(edge: &EdgeFeature) -> bool {
    if edge.pieces.len() < 2 {
        return false;
    }
    if edge.is_closed() {
        return true;
    }
    let mut directions = edge
        .pieces
        .iter()
        .map(mesh_types::Segment::direction)
        .filter(|d| unit(d).is_some());
    let Some(first) = directions.next() else {
        return false;
    };
    directions.any(|d| !directions_parallel(&d, &first))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    fn ring(samples: u32, radius: f64) -> Vec<Point3<f64>> {
        (0..=samples)
            .map(|i| {
                let t = f64::from(i) * TAU / f64::from(samples);
                Point3::new(radius * t.cos(), radius * t.sin(), 0.0)
            })
            .collect()
    }

    #[test]
    fn sixteen_point_ring_is_a_circle() {
        let edge = EdgeFeature::from_strip(&ring(16, 3.0));
        let (center, radius) = fit_circle(&edge, 8).unwrap();
        assert!(center.coords.norm() < 1e-10);
        assert!((radius - 3.0).abs() < 1e-3);
    }

    #[test]
    fn perturbed_ring_is_not_a_circle() {
        let mut points = ring(16, 3.0);
        points[5] *= 1.01;
        let edge = EdgeFeature::from_strip(&points);
        assert!(fit_circle(&edge, 8).is_none());
        assert!(edge_is_curved(&edge));
    }

    #[test]
    fn too_few_samples_is_not_a_circle() {
        let edge = EdgeFeature::from_strip(&ring(6, 1.0));
        assert!(fit_circle(&edge, 8).is_none());
        assert!(fit_circle(&edge, 6).is_some());
    }

    #[test]
    fn open_arc_is_curved_but_not_a_circle() {
        let points = ring(16, 1.0);
        let edge = EdgeFeature::from_strip(&points[..9]);
        assert!(fit_circle(&edge, 8).is_none());
        assert!(edge_is_curved(&edge));
    }

    #[test]
    fn straight_edges_are_not_curved() {
        let edge = EdgeFeature::from_strip(&[
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(3.0, 0.0, 0.0),
        ]);
        assert!(!edge_is_curved(&edge));
        assert!(!edge_is_curved(&EdgeFeature::segment(
            Point3::origin(),
            Point3::new(0.0, 1.0, 0.0)
        )));
    }
}
