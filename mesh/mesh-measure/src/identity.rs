//! Detecting a second pick of the same feature.

use mesh_types::{EdgeFeature, FaceFeature, FaceIdentity, Feature, points_equal};
use nalgebra::Point3;

/// Whether two features are the same feature picked twice.
///
/// - Vertices: equal within [`SNAP_EPSILON`](mesh_types::SNAP_EPSILON).
/// - Straight edges: same end points, in either order.
/// - Arcs and curved edges: same vertex lists, pointwise. Arcs must also
///   share their center.
/// - Faces: same topology identity when both carry one, otherwise the
///   same vertex lists, pointwise. The two notions are never mixed.
///
/// Features of different kinds are never identical.
///
/// # Example
///
/// ```
/// use mesh_measure::is_identical;
/// use mesh_types::{EdgeFeature, Feature, Point3};
///
/// let a = Feature::Edge(EdgeFeature::segment(Point3::origin(), Point3::new(1.0, 0.0, 0.0)));
/// let b = Feature::Edge(EdgeFeature::segment(Point3::new(1.0, 0.0, 0.0), Point3::origin()));
/// assert!(is_identical(&a, &b));
/// assert!(!is_identical(&a, &Feature::Vertex(Point3::origin())));
/// ```
#[must_use]
pub fn is_identical(a: &Feature, b: &Feature) -> bool {
    match (a, b) {
        (Feature::Vertex(p), Feature::Vertex(q)) => points_equal(p, q),
        (Feature::Edge(e1), Feature::Edge(e2)) => same_endpoints(e1, e2),
        (Feature::CurvedEdge(e1), Feature::CurvedEdge(e2)) => same_vertices(e1, e2),
        (Feature::CircularArc(a1), Feature::CircularArc(a2)) => {
            points_equal(&a1.center, &a2.center) && same_vertices(&a1.edge, &a2.edge)
        }
        (Feature::Face(f1), Feature::Face(f2))
        | (Feature::CurvedFace(f1), Feature::CurvedFace(f2)) => same_face(f1, f2),
        _ => false,
    }
}

fn same_endpoints(e1: &EdgeFeature, e2: &EdgeFeature) -> bool {
    match (e1.endpoints(), e2.endpoints()) {
        (Some((a1, b1)), Some((a2, b2))) => {
            (points_equal(&a1, &a2) && points_equal(&b1, &b2))
                || (points_equal(&a1, &b2) && points_equal(&b1, &a2))
        }
        (None, None) => true,
        _ => false,
    }
}

fn same_vertices(e1: &EdgeFeature, e2: &EdgeFeature) -> bool {
    pointwise(e1.vertices(), e2.vertices())
}

fn same_face(f1: &FaceFeature, f2: &FaceFeature) -> bool {
    match (f1.identity, f2.identity) {
        (FaceIdentity::Topology { .. }, FaceIdentity::Topology { .. }) => {
            f1.identity == f2.identity
        }
        _ => pointwise(f1.vertices(), f2.vertices()),
    }
}

fn pointwise(
    mut a: impl Iterator<Item = Point3<f64>>,
    mut b: impl Iterator<Item = Point3<f64>>,
) -> bool {
    loop {
        match (a.next(), b.next()) {
            (Some(p), Some(q)) if points_equal(&p, &q) => {}
            (None, None) => return true,
            _ => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_types::{ArcFeature, Triangle};
    use nalgebra::Vector3;

    fn square_face(z: f64) -> FaceFeature {
        FaceFeature::new(
            vec![
                Triangle::from_arrays([0.0, 0.0, z], [1.0, 0.0, z], [1.0, 1.0, z]),
                Triangle::from_arrays([0.0, 0.0, z], [1.0, 1.0, z], [0.0, 1.0, z]),
            ],
            Vector3::z(),
        )
    }

    #[test]
    fn vertices_within_tolerance_are_identical() {
        let a = Feature::Vertex(Point3::new(1.0, 1.0, 1.0));
        let b = Feature::Vertex(Point3::new(1.0004, 1.0, 1.0));
        let c = Feature::Vertex(Point3::new(1.1, 1.0, 1.0));
        assert!(is_identical(&a, &b));
        assert!(!is_identical(&a, &c));
    }

    #[test]
    fn faces_compare_by_vertices_without_topology() {
        let a = Feature::Face(square_face(0.0));
        let b = Feature::Face(square_face(0.0));
        let c = Feature::Face(square_face(2.0));
        assert!(is_identical(&a, &b));
        assert!(!is_identical(&a, &c));
        assert!(!is_identical(&a, &Feature::CurvedFace(square_face(0.0))));
    }

    #[test]
    fn topology_identity_wins_when_both_have_it() {
        let tagged = |face_id| {
            square_face(0.0).with_identity(FaceIdentity::Topology {
                fragment_id: 1,
                face_id,
            })
        };
        assert!(is_identical(
            &Feature::Face(tagged(4)),
            &Feature::Face(tagged(4))
        ));
        // Same geometry, different topology faces.
        assert!(!is_identical(
            &Feature::Face(tagged(4)),
            &Feature::Face(tagged(5))
        ));
        // Mixed identities fall back to vertices.
        assert!(is_identical(
            &Feature::Face(tagged(4)),
            &Feature::Face(square_face(0.0))
        ));
    }

    #[test]
    fn arcs_need_matching_centers_and_samples() {
        let ring = EdgeFeature::from_strip(&[
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(-1.0, 0.0, 0.0),
        ]);
        let arc = |center| {
            Feature::CircularArc(ArcFeature {
                edge: ring.clone(),
                center,
                radius: Some(1.0),
            })
        };
        assert!(is_identical(&arc(Point3::origin()), &arc(Point3::origin())));
        assert!(!is_identical(
            &arc(Point3::origin()),
            &arc(Point3::new(0.0, 0.0, 1.0))
        ));
    }
}
