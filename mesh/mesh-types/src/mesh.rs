//! Indexed triangle mesh as handed over by the host.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{MeshTopology, Triangle, TypesError, TypesResult};

/// An indexed triangle mesh in world coordinates.
///
/// This is the geometry of one render fragment. The host is responsible for
/// applying any instance transform before handing positions over.
///
/// # Example
///
/// ```
/// use mesh_types::{TriangleMesh, MeshTopology};
///
/// let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
/// let mesh = TriangleMesh::from_raw(&positions, &[0, 1, 2]);
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
/// assert!(mesh.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TriangleMesh {
    /// Vertex positions.
    pub positions: Vec<Point3<f64>>,

    /// Triangle faces as indices into `positions`, counter-clockwise.
    pub faces: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            positions: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh from positions and faces.
    #[inline]
    #[must_use]
    pub const fn from_parts(positions: Vec<Point3<f64>>, faces: Vec<[u32; 3]>) -> Self {
        Self { positions, faces }
    }

    /// Create a mesh from flat position and index buffers.
    ///
    /// Returns an empty mesh when either buffer's length is not a multiple
    /// of three.
    #[must_use]
    pub fn from_raw(positions: &[f64], indices: &[u32]) -> Self {
        if positions.len() % 3 != 0 || indices.len() % 3 != 0 {
            return Self::new();
        }

        let positions = positions
            .chunks_exact(3)
            .map(|c| Point3::new(c[0], c[1], c[2]))
            .collect();
        let faces = indices.chunks_exact(3).map(|c| [c[0], c[1], c[2]]).collect();

        Self { positions, faces }
    }

    /// Create a non-indexed mesh where every three points form a face.
    ///
    /// Trailing points that do not complete a triangle are dropped.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_triangles(triangles: &[Triangle]) -> Self {
        let positions: Vec<_> = triangles.iter().flat_map(Triangle::vertices).collect();
        let faces = (0..triangles.len() as u32)
            .map(|i| [3 * i, 3 * i + 1, 3 * i + 2])
            .collect();
        Self { positions, faces }
    }

    /// Check that every face index refers to an existing vertex.
    ///
    /// # Errors
    ///
    /// Returns [`TypesError::IndexOutOfRange`] for the first bad index.
    pub fn validate(&self) -> TypesResult<()> {
        let vertex_count = self.positions.len();
        for (face, indices) in self.faces.iter().enumerate() {
            if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(TypesError::IndexOutOfRange {
                    face,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(())
    }
}

impl MeshTopology for TriangleMesh {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    fn face_count(&self) -> usize {
        self.faces.len()
    }

    #[inline]
    fn vertex(&self, index: usize) -> Option<&Point3<f64>> {
        self.positions.get(index)
    }

    #[inline]
    fn face(&self, index: usize) -> Option<[u32; 3]> {
        self.faces.get(index).copied()
    }

    fn triangle(&self, face_index: usize) -> Option<Triangle> {
        let [i0, i1, i2] = self.face(face_index)?;
        Some(Triangle::new(
            *self.vertex(i0 as usize)?,
            *self.vertex(i1 as usize)?,
            *self.vertex(i2 as usize)?,
        ))
    }

    fn triangles(&self) -> impl Iterator<Item = Triangle> {
        (0..self.faces.len()).filter_map(|i| self.triangle(i))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn quad() -> TriangleMesh {
        let positions = [
            0.0, 0.0, 0.0, //
            2.0, 0.0, 0.0, //
            2.0, 2.0, 0.0, //
            0.0, 2.0, 0.0,
        ];
        TriangleMesh::from_raw(&positions, &[0, 1, 2, 0, 2, 3])
    }

    #[test]
    fn from_raw_rejects_ragged_buffers() {
        let mesh = TriangleMesh::from_raw(&[0.0, 1.0], &[0, 1, 2]);
        assert!(mesh.is_empty());
    }

    #[test]
    fn triangle_resolves_positions() {
        let mesh = quad();
        let tri = mesh.triangle(1).unwrap();
        assert_eq!(tri.v2, Point3::new(0.0, 2.0, 0.0));
        assert!(mesh.triangle(2).is_none());
    }

    #[test]
    fn validate_reports_bad_index() {
        let mut mesh = quad();
        mesh.faces.push([0, 1, 9]);
        let err = mesh.validate().unwrap_err();
        assert!(matches!(err, TypesError::IndexOutOfRange { face: 2, index: 9, .. }));
    }

    #[test]
    fn from_triangles_builds_unshared_vertices() {
        let tris = [
            Triangle::from_arrays([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            Triangle::from_arrays([1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]),
        ];
        let mesh = TriangleMesh::from_triangles(&tris);
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.faces[1], [3, 4, 5]);
        assert_eq!(mesh.triangle(1).unwrap(), tris[1]);
    }
}
