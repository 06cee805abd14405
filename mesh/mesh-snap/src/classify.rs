//! 3D hit classification.

use mesh_types::{
    ArcFeature, EdgeFeature, FaceFeature, Feature, FeatureKind, MeshTopology, Point3, Vector3,
};
use tracing::debug;

use crate::curve::{edge_is_curved, fit_circle};
use crate::edge::{nearest_boundary_edge, nearest_topology_edge};
use crate::face::{face_is_curved, grow_coplanar_face, topology_face};
use crate::{CameraState, DetectionRadius, Fragment, SnapError, SnapParams, SnapResult, Viewport};

/// Everything classification reads from the host besides geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapContext {
    /// Camera at the time of the hit.
    pub camera: CameraState,
    /// Viewport at the time of the hit.
    pub viewport: Viewport,
    /// Pixel tunables.
    pub params: SnapParams,
}

impl SnapContext {
    /// Bundle a camera and viewport with default parameters.
    #[must_use]
    pub fn new(camera: CameraState, viewport: Viewport) -> Self {
        Self {
            camera,
            viewport,
            params: SnapParams::default(),
        }
    }

    /// Replace the parameters.
    #[must_use]
    pub const fn with_params(mut self, params: SnapParams) -> Self {
        self.params = params;
        self
    }

    /// Detection radii at `point`.
    ///
    /// # Errors
    ///
    /// See [`DetectionRadius::at`].
    pub fn radius_at(&self, point: &Point3<f64>) -> SnapResult<DetectionRadius> {
        DetectionRadius::at(point, &self.camera, &self.viewport, &self.params)
    }
}

/// A ray hit on a triangle mesh, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshHit {
    /// World-space intersection point.
    pub intersect_point: Point3<f64>,
    /// Index of the hit triangle in its fragment.
    pub face_index: u32,
    /// Fragment owning the hit triangle.
    pub fragment_id: u32,
    /// Node owning the fragment.
    pub node_id: u64,
    /// Viewport the hit happened in, for multi-viewport content.
    pub viewport_index: Option<u32>,
}

/// A classified hit: the feature plus the context it was picked in.
#[derive(Debug, Clone, PartialEq)]
pub struct Snap {
    /// The recognized feature.
    pub feature: Feature,
    /// World-space intersection point of the hit.
    pub intersect_point: Point3<f64>,
    /// Unit normal of the hit triangle, for mesh hits.
    pub face_normal: Option<Vector3<f64>>,
    /// Node owning the hit geometry.
    pub node_id: u64,
    /// Fragment owning the hit triangle, for mesh hits.
    pub fragment_id: Option<u32>,
    /// Viewport the hit happened in.
    pub viewport_index: Option<u32>,
    /// Detection radii used for this classification.
    pub radius: DetectionRadius,
}

impl Snap {
    /// Kind of the recognized feature.
    #[must_use]
    pub const fn kind(&self) -> FeatureKind {
        self.feature.kind()
    }
}

/// Classify a mesh hit as a vertex, edge or face feature.
///
/// `fragments` are the fragments of the hit node; one of them must carry
/// `hit.fragment_id`. The face around the hit triangle is recovered first,
/// then its nearest straight edge and that edge's nearer end:
///
/// 1. Within the snap radius of the vertex: [`Feature::Vertex`].
/// 2. Within the snap radius of the edge: [`Feature::Edge`], refined to
///    [`Feature::CircularArc`] or [`Feature::CurvedEdge`].
/// 3. Otherwise [`Feature::Face`], or [`Feature::CurvedFace`] when the
///    face's triangles do not share one plane.
///
/// Returns `Ok(None)` when the hit triangle is degenerate.
///
/// # Errors
///
/// Returns an error when the fragment is missing, the face index is out
/// of range, or the camera and viewport cannot produce a radius.
pub fn classify_hit(
    hit: &MeshHit,
    fragments: &[Fragment],
    ctx: &SnapContext,
) -> SnapResult<Option<Snap>> {
    let fragment = fragments
        .iter()
        .find(|f| f.id() == hit.fragment_id)
        .ok_or(SnapError::UnknownFragment(hit.fragment_id))?;
    let mesh = fragment.mesh();
    let hit_triangle = mesh
        .triangle(hit.face_index as usize)
        .ok_or(SnapError::FaceIndexOutOfRange {
            index: hit.face_index as usize,
            face_count: mesh.face_count(),
        })?;
    let Some(face_normal) = hit_triangle.normal() else {
        debug!(
            fragment = hit.fragment_id,
            face = hit.face_index,
            "hit triangle is degenerate"
        );
        return Ok(None);
    };

    let radius = ctx.radius_at(&hit.intersect_point)?;
    let point = hit.intersect_point;

    let face = match topology_face(fragment, hit.face_index) {
        Some(face) => face,
        None => match grow_coplanar_face(fragment, hit.face_index)? {
            Some(region) => FaceFeature::new(region.triangles, region.normal),
            None => return Ok(None),
        },
    };

    let edge = fragments
        .iter()
        .any(|f| f.topology().is_some_and(|t| !t.edges.is_empty()))
        .then(|| nearest_topology_edge(fragments, &point))
        .flatten()
        .or_else(|| nearest_boundary_edge(&face.triangles, &point));

    let snap = |feature: Feature| Snap {
        feature,
        intersect_point: point,
        face_normal: Some(face_normal),
        node_id: hit.node_id,
        fragment_id: Some(hit.fragment_id),
        viewport_index: hit.viewport_index,
        radius,
    };

    if let Some(candidate) = edge {
        let vertex_distance = (candidate.vertex - point).norm();
        let edge_distance = candidate.distance_to(&point);
        debug!(
            vertex_distance,
            edge_distance,
            radius = radius.snap,
            "hit distances"
        );

        if vertex_distance < radius.snap {
            debug!(kind = %FeatureKind::Vertex, "classified hit");
            return Ok(Some(snap(Feature::Vertex(candidate.vertex))));
        }
        if edge_distance < radius.snap {
            let feature = refine_edge(candidate.edge, &ctx.params);
            debug!(kind = %feature.kind(), "classified hit");
            return Ok(Some(snap(feature)));
        }
    }

    let feature = if face_is_curved(&face.triangles) {
        Feature::CurvedFace(face)
    } else {
        Feature::Face(face)
    };
    debug!(kind = %feature.kind(), "classified hit");
    Ok(Some(snap(feature)))
}

/// Decide whether an edge is straight, circular or curved.
#[must_use]
pub fn refine_edge(edge: EdgeFeature, params: &SnapParams) -> Feature {
    if let Some((center, radius)) = fit_circle(&edge, params.circle_min_samples) {
        return Feature::CircularArc(ArcFeature {
            edge,
            center,
            radius: Some(radius),
        });
    }
    if edge_is_curved(&edge) {
        Feature::CurvedEdge(edge)
    } else {
        Feature::Edge(edge)
    }
}
