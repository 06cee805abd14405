//! Classification of hits on flattened 2D drawing content.
//!
//! The host streams the line segments, circular arcs and elliptical arcs
//! near the cursor. Candidates live in the drawing plane and are lifted to
//! 3D at the hit's depth. Angles are in radians, counterclockwise from +x.

use std::f64::consts::TAU;

use mesh_proximity::distance_point_segment;
use mesh_types::{ArcFeature, EdgeFeature, Feature, Point3, Segment};
use nalgebra::{Point2, Vector2};
use tracing::debug;

use crate::{Snap, SnapContext, SnapResult};

const CIRCLE_SEGMENTS: u32 = 100;
const ELLIPSE_SEGMENTS: u32 = 50;

/// One drawing primitive near the hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurveCandidate {
    /// Straight segment.
    Line {
        /// Start point.
        start: Point2<f64>,
        /// End point.
        end: Point2<f64>,
    },
    /// Arc of a circle, swept counterclockwise from `start_angle` to
    /// `end_angle`. A sweep of a full turn or more is a whole circle.
    CircularArc {
        /// Circle center.
        center: Point2<f64>,
        /// Circle radius.
        radius: f64,
        /// Start angle.
        start_angle: f64,
        /// End angle.
        end_angle: f64,
    },
    /// Arc of an ellipse. Angles are parametric angles in the ellipse's
    /// own frame, which is rotated by `tilt` from the drawing axes.
    EllipticalArc {
        /// Ellipse center.
        center: Point2<f64>,
        /// Semi-axis along the ellipse's local x.
        major_radius: f64,
        /// Semi-axis along the ellipse's local y.
        minor_radius: f64,
        /// Start parameter.
        start_angle: f64,
        /// End parameter.
        end_angle: f64,
        /// Rotation of the ellipse frame.
        tilt: f64,
    },
}

impl CurveCandidate {
    /// Distance from `point` to the primitive, or `None` when the point's
    /// angle falls outside an arc's sweep.
    #[must_use]
    pub fn distance(&self, point: &Point2<f64>) -> Option<f64> {
        match *self {
            Self::Line { start, end } => Some(distance_point_segment(
                &lift(&point.coords, 0.0),
                &Segment::new(lift(&start.coords, 0.0), lift(&end.coords, 0.0)),
            )),
            Self::CircularArc {
                center,
                radius,
                start_angle,
                end_angle,
            } => {
                let q = point - center;
                let angle = q.y.atan2(q.x);
                in_sweep(angle, start_angle, end_angle).then(|| (q.norm() - radius).abs())
            }
            Self::EllipticalArc {
                center,
                major_radius,
                minor_radius,
                start_angle,
                end_angle,
                tilt,
            } => {
                let q = rotate(&(point - center), -tilt);
                let t = (q.y * major_radius).atan2(q.x * minor_radius);
                let on_curve = Vector2::new(major_radius * t.cos(), minor_radius * t.sin());
                in_sweep(t, start_angle, end_angle).then(|| (q - on_curve).norm())
            }
        }
    }

    /// Sample the primitive as a polyline lifted to depth `z`.
    ///
    /// Lines give their two end points, circular arcs 100 segments and
    /// elliptical arcs 50 segments.
    #[must_use]
    pub fn tessellate(&self, z: f64) -> Vec<Point3<f64>> {
        match *self {
            Self::Line { start, end } => vec![lift(&start.coords, z), lift(&end.coords, z)],
            Self::CircularArc {
                center,
                radius,
                start_angle,
                end_angle,
            } => sample(start_angle, end_angle, CIRCLE_SEGMENTS, |t| {
                lift(&(center.coords + Vector2::new(t.cos(), t.sin()) * radius), z)
            }),
            Self::EllipticalArc {
                center,
                major_radius,
                minor_radius,
                start_angle,
                end_angle,
                tilt,
            } => sample(start_angle, end_angle, ELLIPSE_SEGMENTS, |t| {
                let local = Vector2::new(major_radius * t.cos(), minor_radius * t.sin());
                lift(&(center.coords + rotate(&local, tilt)), z)
            }),
        }
    }

    /// Selection priority among equally near candidates, lowest first.
    const fn priority(&self) -> u8 {
        match self {
            Self::CircularArc { .. } => 0,
            Self::EllipticalArc { .. } => 1,
            Self::Line { .. } => 2,
        }
    }

    fn into_feature(self, points: &[Point3<f64>], z: f64) -> Feature {
        let edge = EdgeFeature::from_strip(points);
        match self {
            Self::Line { .. } => Feature::Edge(edge),
            Self::CircularArc { center, radius, .. } => Feature::CircularArc(ArcFeature {
                edge,
                center: lift(&center.coords, z),
                radius: Some(radius),
            }),
            Self::EllipticalArc { center, .. } => Feature::CircularArc(ArcFeature {
                edge,
                center: lift(&center.coords, z),
                radius: None,
            }),
        }
    }
}

/// A drawing primitive tagged with the viewport it was drawn in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarCandidate {
    /// The primitive.
    pub curve: CurveCandidate,
    /// Viewport index, for sheets with several viewports.
    pub viewport_index: Option<u32>,
}

/// A hit on 2D content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarHit {
    /// World-space intersection point. Its `x` and `y` are drawing
    /// coordinates.
    pub point: Point3<f64>,
    /// Node owning the drawing.
    pub node_id: u64,
}

/// Classify a hit on 2D content.
///
/// Candidates outside `viewport_lock` (when set) are discarded. The
/// nearest remaining primitive within the snap radius wins, ties going to
/// circular arcs, then elliptical arcs, then lines. A hit within the snap
/// radius of the winner's first or last point becomes a
/// [`Feature::Vertex`]. Elliptical arcs are reported as
/// [`Feature::CircularArc`] without a radius.
///
/// # Errors
///
/// Returns an error when the camera and viewport cannot produce a radius.
///
/// # Example
///
/// ```
/// use mesh_snap::{
///     CameraState, CurveCandidate, PlanarCandidate, PlanarHit, SnapContext, Viewport,
///     classify_planar,
/// };
/// use mesh_types::FeatureKind;
/// use nalgebra::{Point2, Point3};
///
/// let ctx = SnapContext::new(
///     CameraState::perspective(Point3::new(0.0, 0.0, 10.0), Point3::origin(), 90.0),
///     Viewport::new(1000.0, 1000.0),
/// );
/// let line = PlanarCandidate {
///     curve: CurveCandidate::Line {
///         start: Point2::new(-5.0, 0.0),
///         end: Point2::new(5.0, 0.0),
///     },
///     viewport_index: Some(0),
/// };
/// let hit = PlanarHit { point: Point3::new(1.0, 0.1, 0.0), node_id: 1 };
///
/// let snap = classify_planar(&hit, &[line], &ctx, None).unwrap().unwrap();
/// assert_eq!(snap.kind(), FeatureKind::Edge);
/// assert_eq!(snap.viewport_index, Some(0));
/// ```
pub fn classify_planar(
    hit: &PlanarHit,
    candidates: &[PlanarCandidate],
    ctx: &SnapContext,
    viewport_lock: Option<u32>,
) -> SnapResult<Option<Snap>> {
    let radius = ctx.radius_at(&hit.point)?;
    let cursor = Point2::new(hit.point.x, hit.point.y);

    let best = candidates
        .iter()
        .filter(|c| viewport_lock.is_none_or(|lock| c.viewport_index == Some(lock)))
        .filter_map(|c| {
            c.curve
                .distance(&cursor)
                .filter(|d| *d < radius.snap)
                .map(|d| (d, c))
        })
        .min_by(|(da, a), (db, b)| {
            da.total_cmp(db)
                .then_with(|| a.curve.priority().cmp(&b.curve.priority()))
        });

    let Some((distance, winner)) = best else {
        debug!(candidates = candidates.len(), "no 2D primitive within radius");
        return Ok(None);
    };

    let points = winner.curve.tessellate(hit.point.z);
    let near_end = [points.first(), points.last()]
        .into_iter()
        .flatten()
        .map(|p| (p, (p - hit.point).norm()))
        .filter(|(_, d)| *d < radius.snap)
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(p, _)| *p);

    let feature = match near_end {
        Some(vertex) => Feature::Vertex(vertex),
        None => winner.curve.into_feature(&points, hit.point.z),
    };
    debug!(kind = %feature.kind(), distance, radius = radius.snap, "classified 2D hit");

    Ok(Some(Snap {
        feature,
        intersect_point: hit.point,
        face_normal: None,
        node_id: hit.node_id,
        fragment_id: None,
        viewport_index: winner.viewport_index,
        radius,
    }))
}

/// Whether `angle` lies in the counterclockwise sweep `[start, end)`.
fn in_sweep(angle: f64, start: f64, end: f64) -> bool {
    let sweep = end - start;
    if sweep.abs() >= TAU {
        return true;
    }
    let span = sweep.rem_euclid(TAU);
    span > 0.0 && (angle - start).rem_euclid(TAU) < span
}

fn sample(
    start: f64,
    end: f64,
    segments: u32,
    at: impl Fn(f64) -> Point3<f64>,
) -> Vec<Point3<f64>> {
    let sweep = end - start;
    let span = if sweep.abs() >= TAU {
        TAU
    } else {
        sweep.rem_euclid(TAU)
    };
    (0..=segments)
        .map(|i| at(start + span * f64::from(i) / f64::from(segments)))
        .collect()
}

fn rotate(v: &Vector2<f64>, angle: f64) -> Vector2<f64> {
    let (sin, cos) = angle.sin_cos();
    Vector2::new(cos * v.x - sin * v.y, sin * v.x + cos * v.y)
}

fn lift(v: &Vector2<f64>, z: f64) -> Point3<f64> {
    Point3::new(v.x, v.y, z)
}
