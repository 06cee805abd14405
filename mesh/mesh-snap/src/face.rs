//! Face recovery around a hit triangle.

use std::collections::VecDeque;

use hashbrown::HashSet;
use mesh_types::{
    FaceFeature, FaceIdentity, MeshTopology, Triangle, approx_eq, vectors_equal,
};
use nalgebra::Vector3;
use tracing::warn;

use crate::{Fragment, SnapError, SnapResult};

/// A connected set of coplanar triangles grown from a seed triangle.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceRegion {
    /// Face indices in the fragment, ascending.
    pub faces: Vec<u32>,
    /// The resolved triangles, in the same order as `faces`.
    pub triangles: Vec<Triangle>,
    /// Unit normal of the seed triangle.
    pub normal: Vector3<f64>,
}

/// Grow the planar face containing `seed` by breadth-first search over
/// shared edges.
///
/// A neighbour joins when its normal and plane offset both match the seed
/// triangle's within [`SNAP_EPSILON`](mesh_types::SNAP_EPSILON). The
/// region comes back in ascending face order, so any seed on the same
/// face yields the same triangle list. Returns `Ok(None)` when the seed
/// triangle is degenerate.
///
/// # Errors
///
/// Returns [`SnapError::FaceIndexOutOfRange`] if `seed` is not a face of
/// the fragment.
pub fn grow_coplanar_face(fragment: &Fragment, seed: u32) -> SnapResult<Option<FaceRegion>> {
    let mesh = fragment.mesh();
    let seed_tri = mesh
        .triangle(seed as usize)
        .ok_or(SnapError::FaceIndexOutOfRange {
            index: seed as usize,
            face_count: mesh.face_count(),
        })?;
    let Some(normal) = seed_tri.normal() else {
        return Ok(None);
    };

    let mut selected: HashSet<u32> = HashSet::new();
    let mut queue: VecDeque<u32> = VecDeque::new();
    let mut faces = Vec::new();

    selected.insert(seed);
    queue.push_back(seed);

    while let Some(current) = queue.pop_front() {
        faces.push(current);

        for neighbor in fragment.edge_map().neighbors(current) {
            if selected.contains(&neighbor) {
                continue;
            }
            let Some(candidate) = mesh.triangle(neighbor as usize) else {
                continue;
            };
            if seed_tri.is_coplanar_with(&candidate) {
                selected.insert(neighbor);
                queue.push_back(neighbor);
            }
        }
    }

    faces.sort_unstable();
    let (faces, triangles) = faces
        .into_iter()
        .filter_map(|f| mesh.triangle(f as usize).map(|tri| (f, tri)))
        .unzip();

    Ok(Some(FaceRegion {
        faces,
        triangles,
        normal,
    }))
}

/// Look up the topology face group containing face `face_index`.
///
/// Returns `None` when the fragment has no topology, the triangle is not
/// in any group, or the group resolves to no triangles.
#[must_use]
pub fn topology_face(fragment: &Fragment, face_index: u32) -> Option<FaceFeature> {
    let topology = fragment.topology()?;
    let hit = fragment.mesh().face(face_index as usize)?;
    let normal = fragment.mesh().triangle(face_index as usize)?.normal()?;
    let key = sorted(hit);

    let Some(group) = topology.faces.iter().find(|group| {
        group
            .indices
            .chunks_exact(3)
            .any(|c| sorted([c[0], c[1], c[2]]) == key)
    }) else {
        warn!(
            fragment = fragment.id(),
            face = face_index,
            "hit triangle is not in any topology face group"
        );
        return None;
    };

    let (triangles, skipped) = fragment.triangles_from_indices(&group.indices);
    if skipped > 0 {
        warn!(
            fragment = fragment.id(),
            face_id = group.id,
            skipped,
            "topology face group refers to missing vertices"
        );
    }
    if triangles.is_empty() {
        return None;
    }

    Some(
        FaceFeature::new(triangles, normal).with_identity(FaceIdentity::Topology {
            fragment_id: fragment.id(),
            face_id: group.id,
        }),
    )
}

/// True when the triangles do not all share the first triangle's plane.
///
/// Degenerate triangles carry no plane and are ignored.
#[must_use]
pub fn face_is_curved(triangles: &[Triangle]) -> bool {
    let mut planes = triangles
        .iter()
        .filter_map(|t| t.normal().map(|n| (n, t.plane_offset(&n))));
    let Some((n0, d0)) = planes.next() else {
        return false;
    };
    planes.any(|(n, d)| !vectors_equal(&n, &n0) || !approx_eq(d, d0))
}

fn sorted(mut indices: [u32; 3]) -> [u32; 3] {
    indices.sort_unstable();
    indices
}
