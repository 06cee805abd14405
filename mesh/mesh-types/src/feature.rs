//! Snap feature model: what a pick resolved to on the mesh.

use std::fmt;

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::segment::{Segment, segments_from_strip};
use crate::tolerance::points_equal;
use crate::Triangle;

/// The six kinds of feature a pick can snap to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FeatureKind {
    /// A single point.
    Vertex,
    /// A straight edge, possibly made of several collinear pieces.
    Edge,
    /// A planar region of coplanar triangles.
    Face,
    /// A closed or open edge whose samples lie on a circle.
    CircularArc,
    /// A non-straight edge that is not a circle.
    CurvedEdge,
    /// A non-planar face region.
    CurvedFace,
}

impl FeatureKind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Vertex,
        Self::Edge,
        Self::Face,
        Self::CircularArc,
        Self::CurvedEdge,
        Self::CurvedFace,
    ];

    /// Display name used in measurement reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vertex => "Vertex",
            Self::Edge => "Edge",
            Self::Face => "Face",
            Self::CircularArc => "Circular Arc",
            Self::CurvedEdge => "Curved Edge",
            Self::CurvedFace => "Curved Face",
        }
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Edge geometry as a list of straight pieces.
///
/// Pieces are not required to be ordered or consistently oriented. The
/// extreme endpoints are the piece endpoints used exactly once.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EdgeFeature {
    /// Straight pieces of the edge.
    pub pieces: Vec<Segment>,
    /// Render fragment the edge came from, when known.
    pub fragment_id: Option<u32>,
}

impl EdgeFeature {
    /// Edge from explicit pieces.
    #[must_use]
    pub const fn new(pieces: Vec<Segment>) -> Self {
        Self {
            pieces,
            fragment_id: None,
        }
    }

    /// Edge from an ordered line strip.
    #[must_use]
    pub fn from_strip(points: &[Point3<f64>]) -> Self {
        Self::new(segments_from_strip(points))
    }

    /// Single straight segment.
    #[must_use]
    pub fn segment(start: Point3<f64>, end: Point3<f64>) -> Self {
        Self::new(vec![Segment::new(start, end)])
    }

    /// Tag the edge with its owning fragment.
    #[must_use]
    pub fn with_fragment(mut self, fragment_id: u32) -> Self {
        self.fragment_id = Some(fragment_id);
        self
    }

    /// Every piece endpoint, two per piece, in piece order.
    pub fn vertices(&self) -> impl Iterator<Item = Point3<f64>> + '_ {
        self.pieces.iter().flat_map(|s| [s.start, s.end])
    }

    /// The two extreme endpoints of the edge.
    ///
    /// Endpoints are the piece endpoints not shared with any other piece.
    /// A closed loop has none, in which case the first piece's start and
    /// the last piece's end are returned. `None` for an edge with no pieces.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{EdgeFeature, Point3, Segment};
    ///
    /// // Pieces out of order and with mixed orientation.
    /// let edge = EdgeFeature::new(vec![
    ///     Segment::new(Point3::new(2.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)),
    ///     Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)),
    /// ]);
    /// let (a, b) = edge.endpoints().unwrap();
    /// assert_eq!(a, Point3::new(2.0, 0.0, 0.0));
    /// assert_eq!(b, Point3::new(0.0, 0.0, 0.0));
    /// ```
    #[must_use]
    pub fn endpoints(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        let first = self.pieces.first()?;
        let last = self.pieces.last()?;

        let vertices: Vec<Point3<f64>> = self.vertices().collect();
        let mut lonely = vertices.iter().enumerate().filter(|(i, v)| {
            !vertices
                .iter()
                .enumerate()
                .any(|(j, w)| j != *i && points_equal(v, w))
        });

        match (lonely.next(), lonely.next()) {
            (Some((_, a)), Some((_, b))) => Some((*a, *b)),
            _ => Some((first.start, last.end)),
        }
    }

    /// True when the pieces form a loop.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        match (self.pieces.first(), self.pieces.last()) {
            (Some(first), Some(last)) => {
                self.pieces.len() > 1 && points_equal(&first.start, &last.end)
            }
            _ => false,
        }
    }

    /// Total length of all pieces.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.pieces.iter().map(Segment::length).sum()
    }

    /// Piece endpoint nearest to `point`.
    #[must_use]
    pub fn nearest_vertex(&self, point: &Point3<f64>) -> Option<Point3<f64>> {
        self.vertices().min_by(|a, b| {
            (a - point)
                .norm_squared()
                .total_cmp(&(b - point).norm_squared())
        })
    }
}

/// An edge recognized as a circle or circular arc.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArcFeature {
    /// Sampled arc geometry.
    pub edge: EdgeFeature,
    /// Circle center.
    pub center: Point3<f64>,
    /// Circle radius. `None` for shapes without a single radius, such as
    /// elliptical arcs from 2D drawings.
    pub radius: Option<f64>,
}

/// How two faces are recognized as the same face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FaceIdentity {
    /// Face taken from host topology data.
    Topology {
        /// Owning render fragment.
        fragment_id: u32,
        /// Face id within the fragment's topology.
        face_id: u32,
    },
    /// Face grown from raw triangles, identified by its vertices.
    Vertices,
}

/// A face region: one or more triangles.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FaceFeature {
    /// Triangles of the region.
    pub triangles: Vec<Triangle>,
    /// Unit normal. For curved faces this is the normal of the hit triangle.
    pub normal: Vector3<f64>,
    /// Identity used to detect re-picking the same face.
    pub identity: FaceIdentity,
}

impl FaceFeature {
    /// Face region identified by geometry.
    #[must_use]
    pub const fn new(triangles: Vec<Triangle>, normal: Vector3<f64>) -> Self {
        Self {
            triangles,
            normal,
            identity: FaceIdentity::Vertices,
        }
    }

    /// Attach a topology identity.
    #[must_use]
    pub fn with_identity(mut self, identity: FaceIdentity) -> Self {
        self.identity = identity;
        self
    }

    /// Total area of the region.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.triangles.iter().map(Triangle::area).sum()
    }

    /// Every triangle corner, three per triangle.
    pub fn vertices(&self) -> impl Iterator<Item = Point3<f64>> + '_ {
        self.triangles.iter().flat_map(Triangle::vertices)
    }
}

/// A classified snap target.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Feature {
    /// A single point.
    Vertex(Point3<f64>),
    /// A straight edge.
    Edge(EdgeFeature),
    /// A planar face region.
    Face(FaceFeature),
    /// A circle or circular arc.
    CircularArc(ArcFeature),
    /// A non-straight, non-circular edge.
    CurvedEdge(EdgeFeature),
    /// A non-planar face region.
    CurvedFace(FaceFeature),
}

impl Feature {
    /// The kind of this feature.
    #[must_use]
    pub const fn kind(&self) -> FeatureKind {
        match self {
            Self::Vertex(_) => FeatureKind::Vertex,
            Self::Edge(_) => FeatureKind::Edge,
            Self::Face(_) => FeatureKind::Face,
            Self::CircularArc(_) => FeatureKind::CircularArc,
            Self::CurvedEdge(_) => FeatureKind::CurvedEdge,
            Self::CurvedFace(_) => FeatureKind::CurvedFace,
        }
    }

    /// Edge geometry for edge-like features.
    #[must_use]
    pub const fn edge(&self) -> Option<&EdgeFeature> {
        match self {
            Self::Edge(e) | Self::CurvedEdge(e) => Some(e),
            Self::CircularArc(arc) => Some(&arc.edge),
            _ => None,
        }
    }

    /// Face geometry for face-like features.
    #[must_use]
    pub const fn face(&self) -> Option<&FaceFeature> {
        match self {
            Self::Face(f) | Self::CurvedFace(f) => Some(f),
            _ => None,
        }
    }

    /// Extreme endpoints of an edge-like feature.
    ///
    /// See [`EdgeFeature::endpoints`].
    #[must_use]
    pub fn endpoints(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        self.edge().and_then(EdgeFeature::endpoints)
    }

    /// Length of an edge, curved edge or arc.
    #[must_use]
    pub fn length(&self) -> Option<f64> {
        self.edge().map(EdgeFeature::length)
    }

    /// Area of a face or curved face.
    #[must_use]
    pub fn area(&self) -> Option<f64> {
        self.face().map(FaceFeature::area)
    }

    /// Radius of a circular arc, when it has one.
    #[must_use]
    pub const fn radius(&self) -> Option<f64> {
        match self {
            Self::CircularArc(arc) => arc.radius,
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn strip_endpoints_are_first_and_last() {
        let edge = EdgeFeature::from_strip(&[
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(3.0, 0.0, 0.0),
        ]);
        let (a, b) = edge.endpoints().unwrap();
        assert_eq!(a, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(b, Point3::new(3.0, 0.0, 0.0));
        assert!((edge.length() - 3.0).abs() < 1e-10);
        assert!(!edge.is_closed());
    }

    #[test]
    fn closed_loop_falls_back_to_strip_ends() {
        let square = EdgeFeature::from_strip(&[
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
        ]);
        assert!(square.is_closed());
        let (a, b) = square.endpoints().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_edge_has_no_endpoints() {
        assert!(EdgeFeature::new(Vec::new()).endpoints().is_none());
    }

    #[test]
    fn nearest_vertex_picks_closest_piece_end() {
        let edge = EdgeFeature::segment(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 0.0, 0.0));
        let v = edge.nearest_vertex(&Point3::new(8.0, 1.0, 0.0)).unwrap();
        assert_eq!(v, Point3::new(10.0, 0.0, 0.0));
    }

    #[test]
    fn selection_info_per_kind() {
        let tri = Triangle::from_arrays([0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 2.0, 0.0]);
        let face = Feature::Face(FaceFeature::new(vec![tri], Vector3::z()));
        assert_eq!(face.kind(), FeatureKind::Face);
        assert!((face.area().unwrap() - 2.0).abs() < 1e-10);
        assert!(face.length().is_none());

        let arc = Feature::CircularArc(ArcFeature {
            edge: EdgeFeature::segment(Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0)),
            center: Point3::origin(),
            radius: Some(1.0),
        });
        assert_eq!(arc.radius(), Some(1.0));
        assert!(arc.length().is_some());
        assert_eq!(Feature::Vertex(Point3::origin()).radius(), None);
    }

    #[test]
    fn kind_names() {
        assert_eq!(FeatureKind::CircularArc.to_string(), "Circular Arc");
        assert_eq!(FeatureKind::ALL.len(), 6);
    }
}
