//! A committed or candidate pick and what the panel shows for it.

use mesh_measure::Target;
use mesh_snap::Snap;
use mesh_types::{Feature, FeatureKind};
use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One pick: a classified feature and where it was hit.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pick {
    /// The feature the hit snapped to.
    pub feature: Feature,
    /// World-space intersection point.
    pub intersect_point: Point3<f64>,
    /// Normal of the hit triangle, for mesh hits.
    pub face_normal: Option<Vector3<f64>>,
    /// Node owning the hit geometry.
    pub node_id: u64,
    /// Viewport the hit happened in.
    pub viewport_index: Option<u32>,
}

impl Pick {
    /// Pick a raw point, as used for the rubber band to the cursor.
    #[must_use]
    pub const fn cursor(point: Point3<f64>) -> Self {
        Self {
            feature: Feature::Vertex(point),
            intersect_point: point,
            face_normal: None,
            node_id: 0,
            viewport_index: None,
        }
    }

    /// Kind of the picked feature.
    #[must_use]
    pub const fn kind(&self) -> FeatureKind {
        self.feature.kind()
    }

    /// View this pick as a measurement target.
    #[must_use]
    pub const fn target(&self) -> Target<'_> {
        Target::new(&self.feature, self.intersect_point)
    }

    /// Panel summary of the picked feature.
    #[must_use]
    pub fn info(&self) -> SelectionInfo {
        SelectionInfo {
            kind: self.kind(),
            name: self.kind().name(),
            position: match self.feature {
                Feature::Vertex(p) => Some(p),
                _ => None,
            },
            length: self.feature.length(),
            area: self.feature.area(),
            radius: self.feature.radius(),
        }
    }
}

impl From<Snap> for Pick {
    fn from(snap: Snap) -> Self {
        Self {
            feature: snap.feature,
            intersect_point: snap.intersect_point,
            face_normal: snap.face_normal,
            node_id: snap.node_id,
            viewport_index: snap.viewport_index,
        }
    }
}

/// What the selection panel shows for one pick.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SelectionInfo {
    /// Feature kind.
    pub kind: FeatureKind,
    /// Human-readable kind name.
    pub name: &'static str,
    /// Position, for vertices.
    pub position: Option<Point3<f64>>,
    /// Total length, for edges, arcs and curved edges.
    pub length: Option<f64>,
    /// Total area, for faces and curved faces.
    pub area: Option<f64>,
    /// Radius, for circular arcs that have one.
    pub radius: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_types::{ArcFeature, EdgeFeature};

    #[test]
    fn vertex_info_has_position_only() {
        let info = Pick::cursor(Point3::new(1.0, 2.0, 3.0)).info();
        assert_eq!(info.kind, FeatureKind::Vertex);
        assert_eq!(info.name, "Vertex");
        assert_eq!(info.position, Some(Point3::new(1.0, 2.0, 3.0)));
        assert!(info.length.is_none() && info.area.is_none() && info.radius.is_none());
    }

    #[test]
    fn arc_info_reports_length_and_radius() {
        let edge = EdgeFeature::from_strip(&[
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ]);
        let pick = Pick {
            feature: Feature::CircularArc(ArcFeature {
                edge,
                center: Point3::origin(),
                radius: None,
            }),
            ..Pick::cursor(Point3::origin())
        };
        let info = pick.info();
        assert_eq!(info.name, "Circular Arc");
        assert!((info.length.unwrap_or_default() - 2.0_f64.sqrt()).abs() < 1e-12);
        assert!(info.radius.is_none());
    }
}
