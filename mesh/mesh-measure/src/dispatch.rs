//! Symmetric dispatch over pairs of feature kinds.

use mesh_types::{Feature, FeatureKind};
use nalgebra::Point3;
use tracing::debug;

use crate::identity::is_identical;
use crate::pairs::{
    arc_arc, edge_edge, edge_face, face_face, point_edge, point_face, point_point,
    point_polyline, point_triangles, polyline_triangles, polylines, triangle_sets,
};
use crate::{MeasureError, MeasureResult, Measurement};

/// A picked feature and the point where the pick ray hit it.
///
/// The hit point anchors the measurement: it chooses which end of an edge
/// to measure from and supplies the plane point of a face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target<'a> {
    /// The picked feature.
    pub feature: &'a Feature,
    /// World-space pick point.
    pub hit: Point3<f64>,
}

impl<'a> Target<'a> {
    /// Pair a feature with its pick point.
    #[must_use]
    pub const fn new(feature: &'a Feature, hit: Point3<f64>) -> Self {
        Self { feature, hit }
    }

    /// Kind of the picked feature.
    #[must_use]
    pub const fn kind(&self) -> FeatureKind {
        self.feature.kind()
    }
}

/// Measure between two picked features.
///
/// Produces a distance or an angle depending on the pair of kinds:
///
/// | Pair | Result |
/// |---|---|
/// | Vertex with anything | distance |
/// | Edge - Edge | distance if parallel, else angle |
/// | Edge - Face | distance if parallel to the plane, else angle |
/// | Face - Face | distance if parallel, else angle |
/// | Circular Arc | its center stands in for a vertex |
/// | Curved Edge / Curved Face | minimum distance over pieces |
///
/// The pair is unordered: measuring `(b, a)` gives the mirror of
/// `(a, b)`, with `from` on `b`.
///
/// # Errors
///
/// - [`MeasureError::IdenticalFeatures`] when both targets are the same
///   feature.
/// - [`MeasureError::UndefinedArcRadius`] for concentric arcs when either
///   lacks a radius.
/// - [`MeasureError::EmptyFeature`] when a feature carries no geometry.
///
/// # Example
///
/// ```
/// use mesh_measure::{Target, measure};
/// use mesh_types::{Feature, Point3};
///
/// let a = Feature::Vertex(Point3::new(0.0, 0.0, 0.0));
/// let b = Feature::Vertex(Point3::new(3.0, 4.0, 0.0));
///
/// let m = measure(
///     &Target::new(&a, Point3::new(0.0, 0.0, 0.0)),
///     &Target::new(&b, Point3::new(3.0, 4.0, 0.0)),
/// )
/// .unwrap();
/// assert!((m.distance().unwrap() - 5.0).abs() < 1e-10);
/// ```
pub fn measure(a: &Target<'_>, b: &Target<'_>) -> MeasureResult<Measurement> {
    if is_identical(a.feature, b.feature) {
        debug!(kind = %a.kind(), "rejected measurement of a feature against itself");
        return Err(MeasureError::IdenticalFeatures);
    }

    let result = dispatch(a, b)?;
    debug!(
        first = %a.kind(),
        second = %b.kind(),
        result = if result.angle().is_some() { "angle" } else { "distance" },
        "measured feature pair"
    );
    Ok(result)
}

fn dispatch(a: &Target<'_>, b: &Target<'_>) -> MeasureResult<Measurement> {
    use Feature::{CircularArc, CurvedEdge, CurvedFace, Edge, Face, Vertex};

    let (a_hit, b_hit) = (&a.hit, &b.hit);
    match (a.feature, b.feature) {
        (Vertex(p), Vertex(q)) => Ok(point_point(*p, *q)),
        (Vertex(p), Edge(e)) => point_edge(p, e, FeatureKind::Edge),
        (Vertex(p), Face(f)) => Ok(point_face(p, f, b_hit)),
        (Vertex(p), CircularArc(arc)) => Ok(point_point(*p, arc.center)),
        (Vertex(p), CurvedEdge(e)) => point_polyline(p, e, FeatureKind::CurvedEdge),
        (Vertex(p), CurvedFace(f)) => point_triangles(p, f, FeatureKind::CurvedFace),

        (Edge(e1), Edge(e2)) => edge_edge(e1, a_hit, e2, b_hit),
        (Edge(e), Face(f)) => edge_face(e, a_hit, f, b_hit),
        (Edge(e), CircularArc(arc)) => {
            Ok(point_edge(&arc.center, e, FeatureKind::Edge)?.reversed())
        }
        (Edge(e1), CurvedEdge(e2)) => {
            polylines(e1, FeatureKind::Edge, e2, FeatureKind::CurvedEdge)
        }
        (Edge(e), CurvedFace(f)) => {
            polyline_triangles(e, FeatureKind::Edge, f, FeatureKind::CurvedFace)
        }

        (Face(f1), Face(f2)) => face_face(f1, a_hit, f2, b_hit),
        (Face(f), CircularArc(arc)) => Ok(point_face(&arc.center, f, a_hit).reversed()),
        (Face(f), CurvedEdge(e)) => {
            Ok(polyline_triangles(e, FeatureKind::CurvedEdge, f, FeatureKind::Face)?.reversed())
        }
        (Face(f1), CurvedFace(f2)) => {
            triangle_sets(f1, FeatureKind::Face, f2, FeatureKind::CurvedFace)
        }

        (CircularArc(a1), CircularArc(a2)) => arc_arc(a1, a2, b_hit),
        (CircularArc(arc), CurvedEdge(e)) => {
            point_polyline(&arc.center, e, FeatureKind::CurvedEdge)
        }
        (CircularArc(arc), CurvedFace(f)) => {
            point_triangles(&arc.center, f, FeatureKind::CurvedFace)
        }

        (CurvedEdge(e1), CurvedEdge(e2)) => {
            polylines(e1, FeatureKind::CurvedEdge, e2, FeatureKind::CurvedEdge)
        }
        (CurvedEdge(e), CurvedFace(f)) => {
            polyline_triangles(e, FeatureKind::CurvedEdge, f, FeatureKind::CurvedFace)
        }

        (CurvedFace(f1), CurvedFace(f2)) => {
            triangle_sets(f1, FeatureKind::CurvedFace, f2, FeatureKind::CurvedFace)
        }

        (Edge(_) | Face(_) | CircularArc(_) | CurvedEdge(_) | CurvedFace(_), Vertex(_))
        | (Face(_) | CircularArc(_) | CurvedEdge(_) | CurvedFace(_), Edge(_))
        | (CircularArc(_) | CurvedEdge(_) | CurvedFace(_), Face(_))
        | (CurvedEdge(_) | CurvedFace(_), CircularArc(_))
        | (CurvedFace(_), CurvedEdge(_)) => dispatch(b, a).map(Measurement::reversed),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use mesh_types::{ArcFeature, EdgeFeature, FaceFeature, Triangle};
    use nalgebra::Vector3;

    fn face_at_z(z: f64) -> Feature {
        Feature::Face(FaceFeature::new(
            vec![Triangle::from_arrays([0.0, 0.0, z], [1.0, 0.0, z], [0.0, 1.0, z])],
            Vector3::z(),
        ))
    }

    fn every_kind() -> Vec<(Feature, Point3<f64>)> {
        let bump = FaceFeature::new(
            vec![
                Triangle::from_arrays([5.0, 0.0, 0.0], [6.0, 0.0, 0.0], [5.0, 1.0, 0.5]),
                Triangle::from_arrays([6.0, 0.0, 0.0], [6.0, 1.0, 0.0], [5.0, 1.0, 0.5]),
            ],
            Vector3::z(),
        );
        let bend = EdgeFeature::from_strip(&[
            Point3::new(-3.0, 0.0, 0.0),
            Point3::new(-2.0, 1.0, 0.0),
            Point3::new(-1.0, 1.0, 0.0),
        ]);
        let ring = ArcFeature {
            edge: EdgeFeature::from_strip(&[
                Point3::new(1.0, 5.0, 0.0),
                Point3::new(0.0, 6.0, 0.0),
                Point3::new(-1.0, 5.0, 0.0),
            ]),
            center: Point3::new(0.0, 5.0, 0.0),
            radius: Some(1.0),
        };
        vec![
            (Feature::Vertex(Point3::new(0.0, 0.0, 4.0)), Point3::new(0.0, 0.0, 4.0)),
            (
                Feature::Edge(EdgeFeature::segment(
                    Point3::new(0.0, -2.0, 1.0),
                    Point3::new(1.0, -2.0, 1.0),
                )),
                Point3::new(0.5, -2.0, 1.0),
            ),
            (face_at_z(-1.0), Point3::new(0.2, 0.2, -1.0)),
            (Feature::CircularArc(ring), Point3::new(0.0, 6.0, 0.0)),
            (Feature::CurvedEdge(bend), Point3::new(-2.0, 1.0, 0.0)),
            (Feature::CurvedFace(bump), Point3::new(5.5, 0.5, 0.1)),
        ]
    }

    #[test]
    fn every_pair_is_measurable_both_ways() {
        let features = every_kind();
        for (i, (fa, ha)) in features.iter().enumerate() {
            for (fb, hb) in features.iter().skip(i + 1) {
                let ab = measure(&Target::new(fa, *ha), &Target::new(fb, *hb)).unwrap();
                let ba = measure(&Target::new(fb, *hb), &Target::new(fa, *ha)).unwrap();
                assert_eq!(ab.clone().reversed(), ba, "{} vs {}", fa.kind(), fb.kind());
                if let Some(d) = ab.distance() {
                    assert!(d.is_finite() && d >= 0.0);
                }
            }
        }
    }

    #[test]
    fn identical_features_are_rejected() {
        for (feature, hit) in every_kind() {
            let target = Target::new(&feature, hit);
            assert_eq!(
                measure(&target, &target),
                Err(MeasureError::IdenticalFeatures),
                "{}",
                feature.kind()
            );
        }
    }

    #[test]
    fn vertex_to_face_projects_onto_the_plane() {
        let v = Feature::Vertex(Point3::new(0.25, 0.25, 3.0));
        let f = face_at_z(0.0);
        let m = measure(
            &Target::new(&f, Point3::new(0.1, 0.1, 0.0)),
            &Target::new(&v, Point3::new(0.25, 0.25, 3.0)),
        )
        .unwrap();
        let (from, to) = m.points().unwrap();
        assert!((from - Point3::new(0.25, 0.25, 0.0)).norm() < 1e-10);
        assert!((to - Point3::new(0.25, 0.25, 3.0)).norm() < 1e-10);
    }

    #[test]
    fn empty_curved_edge_is_an_error() {
        let empty = Feature::CurvedEdge(EdgeFeature::new(Vec::new()));
        let v = Feature::Vertex(Point3::origin());
        assert_eq!(
            measure(
                &Target::new(&v, Point3::origin()),
                &Target::new(&empty, Point3::origin())
            ),
            Err(MeasureError::EmptyFeature {
                kind: FeatureKind::CurvedEdge
            })
        );
    }
}
