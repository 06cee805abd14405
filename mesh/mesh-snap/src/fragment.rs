//! Host geometry prepared for repeated snapping queries.

use mesh_types::{EdgeMap, MeshTopology, Triangle, TriangleMesh};
use nalgebra::Point3;

use crate::SnapResult;

/// A face group from precomputed topology: the triangles of one model face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologyFace {
    /// Face id, unique within the fragment.
    pub id: u32,
    /// Triangle vertex indices, three per triangle.
    pub indices: Vec<u32>,
}

/// An edge group from precomputed topology: one model edge as a line strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologyEdge {
    /// Edge id, unique within the fragment.
    pub id: u32,
    /// Line strip vertex indices.
    pub indices: Vec<u32>,
}

/// Precomputed face and edge groups for one fragment.
///
/// Indices refer to the fragment's own vertex buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentTopology {
    /// Face groups.
    pub faces: Vec<TopologyFace>,
    /// Edge groups.
    pub edges: Vec<TopologyEdge>,
}

/// One render fragment of a node: geometry plus lookup structures.
///
/// Building a fragment welds vertices and builds the shared-edge map once,
/// so every later hit on it is answered without rescanning the mesh.
///
/// # Example
///
/// ```
/// use mesh_snap::Fragment;
/// use mesh_types::TriangleMesh;
///
/// let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0];
/// let mesh = TriangleMesh::from_raw(&positions, &[0, 1, 2, 0, 2, 3]);
/// let fragment = Fragment::new(7, mesh).unwrap();
///
/// assert_eq!(fragment.id(), 7);
/// assert!(fragment.topology().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Fragment {
    id: u32,
    mesh: TriangleMesh,
    edges: EdgeMap,
    topology: Option<FragmentTopology>,
}

impl Fragment {
    /// Prepare a fragment for snapping.
    ///
    /// # Errors
    ///
    /// Returns [`SnapError::InvalidMesh`](crate::SnapError::InvalidMesh)
    /// when a face refers to a missing vertex.
    pub fn new(id: u32, mesh: TriangleMesh) -> SnapResult<Self> {
        mesh.validate()?;
        let edges = EdgeMap::build(&mesh);
        Ok(Self {
            id,
            mesh,
            edges,
            topology: None,
        })
    }

    /// Attach precomputed topology.
    #[must_use]
    pub fn with_topology(mut self, topology: FragmentTopology) -> Self {
        self.topology = Some(topology);
        self
    }

    /// Fragment id.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Fragment geometry.
    #[must_use]
    pub const fn mesh(&self) -> &TriangleMesh {
        &self.mesh
    }

    /// Shared-edge adjacency of the geometry.
    #[must_use]
    pub const fn edge_map(&self) -> &EdgeMap {
        &self.edges
    }

    /// Precomputed topology, when the host supplied it.
    #[must_use]
    pub const fn topology(&self) -> Option<&FragmentTopology> {
        self.topology.as_ref()
    }

    /// Resolve triangle vertex indices into triangles, skipping any that
    /// refer to missing vertices. Returns the triangles and the skip count.
    pub(crate) fn triangles_from_indices(&self, indices: &[u32]) -> (Vec<Triangle>, usize) {
        let mut skipped = 0;
        let triangles = indices
            .chunks_exact(3)
            .filter_map(|corner| {
                let tri = self
                    .points([corner[0], corner[1], corner[2]])
                    .map(|[a, b, c]| Triangle::new(a, b, c));
                if tri.is_none() {
                    skipped += 1;
                }
                tri
            })
            .collect();
        (triangles, skipped)
    }

    /// Resolve a line strip, dropping indices that refer to missing vertices.
    pub(crate) fn strip_points(&self, indices: &[u32]) -> Vec<Point3<f64>> {
        indices
            .iter()
            .filter_map(|&i| self.mesh.vertex(i as usize).copied())
            .collect()
    }

    fn points<const N: usize>(&self, indices: [u32; N]) -> Option<[Point3<f64>; N]> {
        let mut out = [Point3::origin(); N];
        for (slot, index) in out.iter_mut().zip(indices) {
            *slot = *self.mesh.vertex(index as usize)?;
        }
        Some(out)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::SnapError;

    fn square() -> TriangleMesh {
        let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0];
        TriangleMesh::from_raw(&positions, &[0, 1, 2, 0, 2, 3])
    }

    #[test]
    fn invalid_mesh_is_rejected() {
        let mut mesh = square();
        mesh.faces.push([0, 1, 42]);
        assert!(matches!(Fragment::new(0, mesh), Err(SnapError::InvalidMesh(_))));
    }

    #[test]
    fn out_of_range_topology_indices_are_skipped() {
        let fragment = Fragment::new(0, square()).unwrap();
        let (tris, skipped) = fragment.triangles_from_indices(&[0, 1, 2, 0, 2, 99]);
        assert_eq!(tris.len(), 1);
        assert_eq!(skipped, 1);
        assert_eq!(fragment.strip_points(&[0, 1, 99, 2]).len(), 3);
    }
}
