//! Edge extraction: face boundaries and topology edge strips.

use hashbrown::HashMap;
use mesh_proximity::distance_point_segment;
use mesh_types::{
    EdgeFeature, Point3, PointWelder, Segment, Triangle, directions_parallel, points_equal,
};
use tracing::warn;

use crate::Fragment;

/// An edge together with the vertex chosen for it.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeCandidate {
    /// The edge geometry.
    pub edge: EdgeFeature,
    /// The edge end nearest the query point.
    pub vertex: Point3<f64>,
}

impl EdgeCandidate {
    /// Distance from `point` to the nearest piece of the edge.
    #[must_use]
    pub fn distance_to(&self, point: &Point3<f64>) -> f64 {
        self.edge
            .pieces
            .iter()
            .map(|s| distance_point_segment(point, s))
            .fold(f64::INFINITY, f64::min)
    }
}

/// Triangle edges that no other triangle of the set shares.
///
/// Corners are welded with [`PointWelder`] and edges matched as unordered
/// pairs of welded ids, so triangles from a non-indexed mesh still pair up.
#[must_use]
pub fn boundary_segments(triangles: &[Triangle]) -> Vec<Segment> {
    let mut welder = PointWelder::new();
    let keyed: Vec<((u32, u32), Segment)> = triangles
        .iter()
        .flat_map(Triangle::edges)
        .map(|(a, b)| {
            let (ia, ib) = (welder.weld(&a), welder.weld(&b));
            ((ia.min(ib), ia.max(ib)), Segment::new(a, b))
        })
        .collect();

    let mut counts: HashMap<(u32, u32), usize> = HashMap::new();
    for (key, _) in &keyed {
        *counts.entry(*key).or_insert(0) += 1;
    }

    keyed
        .into_iter()
        .filter(|(key, _)| counts.get(key) == Some(&1))
        .map(|(_, segment)| segment)
        .collect()
}

/// The straight boundary edge of a face nearest to `point`.
///
/// The nearest boundary segment is extended by absorbing boundary
/// segments that touch it end to end and run in the same or opposite
/// direction, until none is left to absorb.
#[must_use]
pub fn nearest_boundary_edge(triangles: &[Triangle], point: &Point3<f64>) -> Option<EdgeCandidate> {
    let mut remaining = boundary_segments(triangles);
    let seed_index = remaining
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            distance_point_segment(point, a).total_cmp(&distance_point_segment(point, b))
        })
        .map(|(i, _)| i)?;
    let seed = remaining.swap_remove(seed_index);
    let direction = seed.direction();
    let mut pieces = vec![seed];

    loop {
        let touching = remaining.iter().position(|candidate| {
            directions_parallel(&candidate.direction(), &direction)
                && pieces.iter().any(|piece| shares_endpoint(piece, candidate))
        });
        match touching {
            Some(i) => pieces.push(remaining.swap_remove(i)),
            None => break,
        }
    }

    let edge = EdgeFeature::new(pieces);
    let vertex = nearer_end(&edge, point)?;
    Some(EdgeCandidate { edge, vertex })
}

/// The topology edge strip nearest to `point` across all fragments.
///
/// Edges of attached geometry may live on a different fragment than the
/// hit triangle, so every fragment carrying topology is searched. The
/// vertex is the nearer of the strip's first and last point.
#[must_use]
pub fn nearest_topology_edge(fragments: &[Fragment], point: &Point3<f64>) -> Option<EdgeCandidate> {
    let mut best: Option<(f64, u32, Vec<Point3<f64>>)> = None;

    for fragment in fragments {
        let Some(topology) = fragment.topology() else {
            continue;
        };
        for group in &topology.edges {
            let points = fragment.strip_points(&group.indices);
            if points.len() < group.indices.len() {
                warn!(
                    fragment = fragment.id(),
                    edge_id = group.id,
                    skipped = group.indices.len() - points.len(),
                    "topology edge group refers to missing vertices"
                );
            }
            let distance = points
                .windows(2)
                .map(|w| distance_point_segment(point, &Segment::new(w[0], w[1])))
                .fold(f64::INFINITY, f64::min);
            if best.as_ref().is_none_or(|(d, _, _)| distance < *d) {
                best = Some((distance, fragment.id(), points));
            }
        }
    }

    let (distance, fragment_id, points) = best?;
    if !distance.is_finite() {
        return None;
    }
    let (first, last) = (points.first()?, points.last()?);
    let vertex = if (first - point).norm() <= (last - point).norm() {
        *first
    } else {
        *last
    };
    Some(EdgeCandidate {
        edge: EdgeFeature::from_strip(&points).with_fragment(fragment_id),
        vertex,
    })
}

fn shares_endpoint(a: &Segment, b: &Segment) -> bool {
    [a.start, a.end]
        .iter()
        .any(|p| points_equal(p, &b.start) || points_equal(p, &b.end))
}

fn nearer_end(edge: &EdgeFeature, point: &Point3<f64>) -> Option<Point3<f64>> {
    let (a, b) = edge.endpoints()?;
    Some(if (a - point).norm() <= (b - point).norm() {
        a
    } else {
        b
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::{FragmentTopology, TopologyEdge};
    use mesh_types::TriangleMesh;

    /// 2 x 1 rectangle split into four triangles along x = 1.
    fn strip_face() -> Vec<Triangle> {
        vec![
            Triangle::from_arrays([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0]),
            Triangle::from_arrays([0.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]),
            Triangle::from_arrays([1.0, 0.0, 0.0], [2.0, 0.0, 0.0], [2.0, 1.0, 0.0]),
            Triangle::from_arrays([1.0, 0.0, 0.0], [2.0, 1.0, 0.0], [1.0, 1.0, 0.0]),
        ]
    }

    #[test]
    fn interior_edges_are_not_boundary() {
        let boundary = boundary_segments(&strip_face());
        assert_eq!(boundary.len(), 6);
        let total: f64 = boundary.iter().map(Segment::length).sum();
        assert!((total - 6.0).abs() < 1e-10);
    }

    #[test]
    fn shared_edge_with_corners_in_adjacent_cells_is_interior() {
        let tris = [
            Triangle::from_arrays([0.0, 0.000_999_9, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0]),
            Triangle::from_arrays([0.0, 0.001_000_1, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]),
        ];
        let boundary = boundary_segments(&tris);
        assert_eq!(boundary.len(), 4);
    }

    #[test]
    fn collinear_pieces_are_merged() {
        let hit = Point3::new(0.3, 0.05, 0.0);
        let candidate = nearest_boundary_edge(&strip_face(), &hit).unwrap();
        assert_eq!(candidate.edge.pieces.len(), 2);
        assert!((candidate.edge.length() - 2.0).abs() < 1e-10);
        assert!(points_equal(&candidate.vertex, &Point3::new(0.0, 0.0, 0.0)));
        assert!((candidate.distance_to(&hit) - 0.05).abs() < 1e-10);
    }

    #[test]
    fn perpendicular_neighbours_are_not_absorbed() {
        let hit = Point3::new(0.02, 0.5, 0.0);
        let candidate = nearest_boundary_edge(&strip_face(), &hit).unwrap();
        assert_eq!(candidate.edge.pieces.len(), 1);
        assert!((candidate.edge.length() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn empty_face_has_no_edge() {
        assert!(nearest_boundary_edge(&[], &Point3::origin()).is_none());
    }

    #[test]
    fn topology_edges_are_searched_across_fragments() {
        let square = TriangleMesh::from_raw(
            &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0],
            &[0, 1, 2, 0, 2, 3],
        );
        let lifted = TriangleMesh::from_raw(
            &[0.0, 0.0, 5.0, 1.0, 0.0, 5.0, 1.0, 1.0, 5.0, 0.0, 1.0, 5.0],
            &[0, 1, 2, 0, 2, 3],
        );
        let bottom = Fragment::new(1, square).unwrap().with_topology(FragmentTopology {
            faces: Vec::new(),
            edges: vec![TopologyEdge {
                id: 0,
                indices: vec![0, 1, 2],
            }],
        });
        let top = Fragment::new(2, lifted).unwrap().with_topology(FragmentTopology {
            faces: Vec::new(),
            edges: vec![TopologyEdge {
                id: 0,
                indices: vec![3, 0],
            }],
        });

        let candidate =
            nearest_topology_edge(&[bottom, top], &Point3::new(0.0, 0.6, 4.9)).unwrap();
        assert_eq!(candidate.edge.fragment_id, Some(2));
        assert!(points_equal(&candidate.vertex, &Point3::new(0.0, 1.0, 5.0)));
    }
}
