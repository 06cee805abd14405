//! Edge-to-face adjacency for indexed meshes.

use hashbrown::HashMap;

use crate::tolerance::PointWelder;
use crate::TriangleMesh;

/// Map from each mesh edge to the faces that share it.
///
/// Vertices are welded with [`PointWelder`] before edges are keyed, so
/// meshes that duplicate corners per face (split normals, non-indexed
/// buffers) still report their neighbours. Build it once per mesh and reuse it for every
/// query against that mesh.
///
/// # Example
///
/// ```
/// use mesh_types::{EdgeMap, TriangleMesh};
///
/// let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0];
/// let mesh = TriangleMesh::from_raw(&positions, &[0, 1, 2, 0, 2, 3]);
/// let edges = EdgeMap::build(&mesh);
///
/// assert_eq!(edges.neighbors(0).collect::<Vec<_>>(), vec![1]);
/// assert_eq!(edges.neighbors(1).collect::<Vec<_>>(), vec![0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EdgeMap {
    faces: Vec<[u32; 3]>,
    edge_to_faces: HashMap<(u32, u32), Vec<u32>>,
}

impl EdgeMap {
    /// Build the adjacency for `mesh`.
    #[must_use]
    pub fn build(mesh: &TriangleMesh) -> Self {
        let mut welder = PointWelder::new();
        let canonical: Vec<u32> = mesh.positions.iter().map(|p| welder.weld(p)).collect();

        // Out-of-range corners share one id past every welded vertex.
        let faces: Vec<[u32; 3]> = mesh
            .faces
            .iter()
            .map(|face| face.map(|v| canonical.get(v as usize).copied().unwrap_or(u32::MAX)))
            .collect();

        let mut edge_to_faces: HashMap<(u32, u32), Vec<u32>> = HashMap::new();
        for (face_idx, face) in faces.iter().enumerate() {
            let face_idx = u32::try_from(face_idx).unwrap_or(u32::MAX);
            for edge in face_edges(face) {
                let bucket = edge_to_faces.entry(edge).or_default();
                if !bucket.contains(&face_idx) {
                    bucket.push(face_idx);
                }
            }
        }

        Self {
            faces,
            edge_to_faces,
        }
    }

    /// Faces that share at least one edge with `face`.
    pub fn neighbors(&self, face: u32) -> impl Iterator<Item = u32> + '_ {
        let edges = self.faces.get(face as usize).map(face_edges);
        edges
            .into_iter()
            .flatten()
            .filter_map(|edge| self.edge_to_faces.get(&edge))
            .flatten()
            .copied()
            .filter(move |&other| other != face)
    }
}

/// The three welded edges of a face, each normalized.
fn face_edges(face: &[u32; 3]) -> [(u32, u32); 3] {
    [
        normalize_edge(face[0], face[1]),
        normalize_edge(face[1], face[2]),
        normalize_edge(face[2], face[0]),
    ]
}

/// Normalize an edge so the smaller vertex index comes first.
const fn normalize_edge(v0: u32, v1: u32) -> (u32, u32) {
    if v0 < v1 { (v0, v1) } else { (v1, v0) }
}
