//! Traits for mesh types.

use crate::Triangle;
use nalgebra::Point3;

/// Read access to an indexed triangle mesh.
///
/// Snapping only needs positions, face indices and resolved triangles, so
/// any host mesh representation can be queried through this trait.
pub trait MeshTopology {
    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Number of faces (triangles).
    fn face_count(&self) -> usize;

    /// True when the mesh has no vertices or no faces.
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0 || self.face_count() == 0
    }

    /// Vertex position by index.
    fn vertex(&self, index: usize) -> Option<&Point3<f64>>;

    /// Face vertex indices by face index.
    fn face(&self, index: usize) -> Option<[u32; 3]>;

    /// Triangle by face index with resolved positions.
    ///
    /// Returns `None` if the face or one of its vertices is out of range.
    fn triangle(&self, face_index: usize) -> Option<Triangle>;

    /// Iterate over all faces that resolve to triangles.
    fn triangles(&self) -> impl Iterator<Item = Triangle>;
}
