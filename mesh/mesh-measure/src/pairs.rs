//! Measurement algorithms for each pairing of feature geometry.
//!
//! Every function measures from its first argument to its second, so the
//! returned `from` point (or first angle arm) lies on the first feature.

use mesh_proximity::{
    ClosestPair, angle_between, angle_line_plane, closest_point_on_line, closest_point_on_plane,
    closest_point_on_polyline, closest_point_on_triangles, closest_points_polyline_triangles,
    closest_points_polylines, closest_points_triangle_sets, intersect_line_plane,
    intersect_plane_plane, point_on_segment,
};
use mesh_types::{
    ArcFeature, EdgeFeature, FaceFeature, FeatureKind, SNAP_EPSILON, Segment, directions_parallel,
    points_equal, unit,
};
use nalgebra::Point3;

use crate::{
    AngleAnnotation, AngleMeasurement, Extension, MeasureError, MeasureResult, Measurement,
    measure_distance,
};

pub(crate) fn point_point(p: Point3<f64>, q: Point3<f64>) -> Measurement {
    measure_distance(p, q).into()
}

/// Point to the infinite line through an edge.
pub(crate) fn point_edge(
    p: &Point3<f64>,
    edge: &EdgeFeature,
    kind: FeatureKind,
) -> MeasureResult<Measurement> {
    let (a, b) = edge.endpoints().ok_or(MeasureError::empty(kind))?;
    let foot = closest_point_on_line(p, &a, &b);
    Ok(measure_distance(*p, foot)
        .with_extension(line_extension(&foot, &a, &b))
        .into())
}

/// Point to the plane of a face. `face_hit` is the face's pick point.
pub(crate) fn point_face(p: &Point3<f64>, face: &FaceFeature, face_hit: &Point3<f64>) -> Measurement {
    let foot = closest_point_on_plane(p, face_hit, &face.normal);
    measure_distance(*p, foot)
        .with_extension(plane_extension(&foot, face))
        .into()
}

pub(crate) fn point_polyline(
    p: &Point3<f64>,
    edge: &EdgeFeature,
    kind: FeatureKind,
) -> MeasureResult<Measurement> {
    closest_point_on_polyline(p, &edge.pieces)
        .map(from_pair)
        .ok_or(MeasureError::empty(kind))
}

pub(crate) fn point_triangles(
    p: &Point3<f64>,
    face: &FaceFeature,
    kind: FeatureKind,
) -> MeasureResult<Measurement> {
    closest_point_on_triangles(p, &face.triangles)
        .map(from_pair)
        .ok_or(MeasureError::empty(kind))
}

pub(crate) fn polylines(
    first: &EdgeFeature,
    first_kind: FeatureKind,
    second: &EdgeFeature,
    second_kind: FeatureKind,
) -> MeasureResult<Measurement> {
    non_empty(&first.pieces, first_kind)?;
    non_empty(&second.pieces, second_kind)?;
    closest_points_polylines(&first.pieces, &second.pieces)
        .map(from_pair)
        .ok_or(MeasureError::empty(first_kind))
}

pub(crate) fn polyline_triangles(
    edge: &EdgeFeature,
    edge_kind: FeatureKind,
    face: &FaceFeature,
    face_kind: FeatureKind,
) -> MeasureResult<Measurement> {
    non_empty(&edge.pieces, edge_kind)?;
    non_empty(&face.triangles, face_kind)?;
    closest_points_polyline_triangles(&edge.pieces, &face.triangles)
        .map(from_pair)
        .ok_or(MeasureError::empty(edge_kind))
}

pub(crate) fn triangle_sets(
    first: &FaceFeature,
    first_kind: FeatureKind,
    second: &FaceFeature,
    second_kind: FeatureKind,
) -> MeasureResult<Measurement> {
    non_empty(&first.triangles, first_kind)?;
    non_empty(&second.triangles, second_kind)?;
    closest_points_triangle_sets(&first.triangles, &second.triangles)
        .map(from_pair)
        .ok_or(MeasureError::empty(first_kind))
}

/// Two straight edges: a distance when parallel, otherwise an angle.
pub(crate) fn edge_edge(
    a: &EdgeFeature,
    a_hit: &Point3<f64>,
    b: &EdgeFeature,
    b_hit: &Point3<f64>,
) -> MeasureResult<Measurement> {
    let (a0, a1) = a.endpoints().ok_or(MeasureError::empty(FeatureKind::Edge))?;
    let (b0, b1) = b.endpoints().ok_or(MeasureError::empty(FeatureKind::Edge))?;
    let (da, db) = (a1 - a0, b1 - b0);

    if unit(&da).is_none() {
        return point_edge(&a0, b, FeatureKind::Edge);
    }
    if unit(&db).is_none() {
        return Ok(point_edge(&b0, a, FeatureKind::Edge)?.reversed());
    }

    if directions_parallel(&da, &db) {
        let start = nearer(a_hit, a0, a1);
        let foot = closest_point_on_line(&start, &b0, &b1);
        return Ok(measure_distance(start, foot)
            .with_extension(line_extension(&foot, &b0, &b1))
            .into());
    }

    // Apex at the closest pair of end points, arms running to the far ends.
    let ((a_near, a_far), (b_near, b_far)) = [(a0, a1), (a1, a0)]
        .into_iter()
        .flat_map(|ea| [(b0, b1), (b1, b0)].map(move |eb| (ea, eb)))
        .min_by(|(x1, y1), (x2, y2)| {
            (x1.0 - y1.0)
                .norm_squared()
                .total_cmp(&(x2.0 - y2.0).norm_squared())
        })
        .unwrap_or(((a0, a1), (b0, b1)));
    let (va, vb) = (a_far - a_near, b_far - b_near);
    let degrees = angle_between(&va, &vb);

    let apex = a_near;
    let arm_a = clipped_arm(&closest_point_on_line(a_hit, &a0, &a1), &a_near, &a_far) - a_near;
    let arm_b = clipped_arm(&closest_point_on_line(b_hit, &b0, &b1), &b_near, &b_far) - b_near;
    let annotation = unit(&va.cross(&vb)).map(|normal| AngleAnnotation {
        apex,
        arm_start: apex + arm_a,
        arm_end: apex + arm_b,
        normal,
    });

    Ok(AngleMeasurement {
        degrees,
        annotation,
    }
    .into())
}

/// A straight edge and a planar face: a distance when the edge runs
/// parallel to the plane, otherwise the angle between edge and plane.
pub(crate) fn edge_face(
    edge: &EdgeFeature,
    edge_hit: &Point3<f64>,
    face: &FaceFeature,
    face_hit: &Point3<f64>,
) -> MeasureResult<Measurement> {
    let (e0, e1) = edge.endpoints().ok_or(MeasureError::empty(FeatureKind::Edge))?;
    let direction = e1 - e0;
    let (Some(d), Some(n)) = (unit(&direction), unit(&face.normal)) else {
        return Ok(point_face(&e0, face, face_hit));
    };

    if d.dot(&n).abs() <= SNAP_EPSILON {
        let start = nearer(face_hit, e0, e1);
        return Ok(point_face(&start, face, face_hit));
    }

    let degrees = angle_line_plane(&direction, &n);
    let apex = intersect_line_plane(face_hit, &n, &e0, &e1).unwrap_or_else(|| nearer(face_hit, e0, e1));

    let mut arm_start = closest_point_on_line(edge_hit, &e0, &e1);
    if points_equal(&arm_start, &apex) {
        arm_start = farther(&apex, e0, e1);
    }
    let mut arm_end = closest_point_on_plane(&arm_start, face_hit, &n);
    if points_equal(&arm_end, &apex) {
        arm_end = *face_hit;
    }
    let annotation =
        unit(&(arm_start - apex).cross(&(arm_end - apex))).map(|normal| AngleAnnotation {
            apex,
            arm_start,
            arm_end,
            normal,
        });

    Ok(AngleMeasurement {
        degrees,
        annotation,
    }
    .into())
}

/// Two planar faces: a distance between parallel planes, otherwise the
/// angle between the faces across their line of intersection.
pub(crate) fn face_face(
    a: &FaceFeature,
    a_hit: &Point3<f64>,
    b: &FaceFeature,
    b_hit: &Point3<f64>,
) -> MeasureResult<Measurement> {
    let (Some(n1), Some(n2)) = (unit(&a.normal), unit(&b.normal)) else {
        return triangle_sets(a, FeatureKind::Face, b, FeatureKind::Face);
    };

    let crossing = if directions_parallel(&n1, &n2) {
        None
    } else {
        intersect_plane_plane(a_hit, &n1, b_hit, &n2)
    };
    let Some(line) = crossing else {
        let foot = closest_point_on_plane(b_hit, a_hit, &n1);
        return Ok(measure_distance(foot, *b_hit)
            .hide_axis_deltas()
            .with_extension(plane_extension(&foot, a))
            .into());
    };

    let va = a_hit - line.foot1;
    let vb = b_hit - line.foot2;
    let measurement = match (unit(&va), unit(&vb)) {
        (Some(_), Some(_)) => AngleMeasurement {
            degrees: angle_between(&va, &vb),
            annotation: unit(&line.direction).map(|normal| AngleAnnotation {
                apex: line.foot1,
                arm_start: *a_hit,
                arm_end: line.foot1 + vb,
                normal,
            }),
        },
        // A hit on the intersection line gives no arm; use the dihedral.
        _ => AngleMeasurement {
            degrees: 180.0 - angle_between(&n1, &n2),
            annotation: None,
        },
    };
    Ok(measurement.into())
}

/// Two arcs measure center to center. Concentric arcs measure from the
/// shared center to the second arc's sample nearest its pick point, which
/// needs both radii.
pub(crate) fn arc_arc(
    a: &ArcFeature,
    b: &ArcFeature,
    b_hit: &Point3<f64>,
) -> MeasureResult<Measurement> {
    if !points_equal(&a.center, &b.center) {
        return Ok(point_point(a.center, b.center));
    }
    if a.radius.is_none() || b.radius.is_none() {
        return Err(MeasureError::UndefinedArcRadius);
    }
    let boundary = b
        .edge
        .nearest_vertex(b_hit)
        .ok_or(MeasureError::empty(FeatureKind::CircularArc))?;
    Ok(point_point(a.center, boundary))
}

fn from_pair(pair: ClosestPair) -> Measurement {
    measure_distance(pair.a, pair.b).into()
}

fn non_empty<T>(items: &[T], kind: FeatureKind) -> MeasureResult<()> {
    if items.is_empty() {
        Err(MeasureError::empty(kind))
    } else {
        Ok(())
    }
}

fn nearer(target: &Point3<f64>, a: Point3<f64>, b: Point3<f64>) -> Point3<f64> {
    if (a - target).norm() <= (b - target).norm() {
        a
    } else {
        b
    }
}

fn farther(target: &Point3<f64>, a: Point3<f64>, b: Point3<f64>) -> Point3<f64> {
    if (a - target).norm() > (b - target).norm() {
        a
    } else {
        b
    }
}

/// The pick foot on an edge, or the far end when the foot sits on the apex.
fn clipped_arm(foot: &Point3<f64>, near: &Point3<f64>, far: &Point3<f64>) -> Point3<f64> {
    if points_equal(foot, near) { *far } else { *foot }
}

fn line_extension(foot: &Point3<f64>, a: &Point3<f64>, b: &Point3<f64>) -> Option<Extension> {
    if point_on_segment(foot, &Segment::new(*a, *b)) {
        return None;
    }
    Some(Extension::Line {
        start: nearer(foot, *a, *b),
        end: *foot,
    })
}

fn plane_extension(foot: &Point3<f64>, face: &FaceFeature) -> Option<Extension> {
    let gap = closest_point_on_triangles(foot, &face.triangles)?.distance();
    (gap > SNAP_EPSILON).then(|| Extension::Plane {
        origin: *foot,
        normal: unit(&face.normal).unwrap_or(face.normal),
        half_size: gap,
    })
}
