//! Shared snapping tolerance and the comparisons built on it.
//!
//! Every feature test in the snapping and measurement crates uses the one
//! absolute tolerance defined here. Comparisons are component-wise.

use hashbrown::HashMap;
use nalgebra::{Point3, Vector3};

/// Absolute tolerance for every feature comparison.
///
/// Applies to point and vector equality, collinearity and coplanarity
/// tests, circle fitting, and plane and segment degeneracy checks.
pub const SNAP_EPSILON: f64 = 1e-3;

/// Scalars equal within [`SNAP_EPSILON`].
#[inline]
#[must_use]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= SNAP_EPSILON
}

/// Points equal component-wise within [`SNAP_EPSILON`].
///
/// # Example
///
/// ```
/// use mesh_types::{points_equal, Point3};
///
/// assert!(points_equal(&Point3::new(1.0, 2.0, 3.0), &Point3::new(1.0005, 2.0, 3.0)));
/// assert!(!points_equal(&Point3::new(1.0, 2.0, 3.0), &Point3::new(1.01, 2.0, 3.0)));
/// ```
#[inline]
#[must_use]
pub fn points_equal(a: &Point3<f64>, b: &Point3<f64>) -> bool {
    vectors_equal(&a.coords, &b.coords)
}

/// Vectors equal component-wise within [`SNAP_EPSILON`].
#[inline]
#[must_use]
pub fn vectors_equal(a: &Vector3<f64>, b: &Vector3<f64>) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}

/// Vectors that point the same way or exactly opposite ways.
///
/// Both vectors are normalized before comparing. Zero-length input is never
/// parallel to anything.
#[must_use]
pub fn directions_parallel(a: &Vector3<f64>, b: &Vector3<f64>) -> bool {
    let (Some(a), Some(b)) = (unit(a), unit(b)) else {
        return false;
    };
    vectors_equal(&a, &b) || vectors_equal(&a, &-b)
}

/// Normalize `v`, or `None` when it is shorter than [`SNAP_EPSILON`] squared.
#[inline]
#[must_use]
pub fn unit(v: &Vector3<f64>) -> Option<Vector3<f64>> {
    v.try_normalize(SNAP_EPSILON * SNAP_EPSILON)
}

/// Hashable grid cell of a point, one [`SNAP_EPSILON`] per cell.
///
/// Points equal under [`points_equal`] land in the same or an adjacent
/// cell on every axis. [`PointWelder`] relies on that to find them.
#[allow(clippy::cast_possible_truncation)]
fn point_key(p: &Point3<f64>) -> [i64; 3] {
    [
        (p.x / SNAP_EPSILON).floor() as i64,
        (p.y / SNAP_EPSILON).floor() as i64,
        (p.z / SNAP_EPSILON).floor() as i64,
    ]
}

/// Gives every group of points equal under [`points_equal`] one id.
///
/// Ids are handed out in insertion order. A point takes the smallest id
/// among the already welded points it equals, so the result does not
/// depend on which side of a grid cell boundary a point falls.
///
/// # Example
///
/// ```
/// use mesh_types::{PointWelder, Point3};
///
/// let mut welder = PointWelder::new();
/// let a = welder.weld(&Point3::new(0.000_99, 0.0, 0.0));
/// let b = welder.weld(&Point3::new(0.001_01, 0.0, 0.0));
/// let c = welder.weld(&Point3::new(0.5, 0.0, 0.0));
///
/// assert_eq!(a, b);
/// assert_ne!(a, c);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PointWelder {
    cells: HashMap<[i64; 3], Vec<u32>>,
    points: Vec<Point3<f64>>,
}

impl PointWelder {
    /// An empty welder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the welded point equal to `p`, inserting `p` when there is none.
    pub fn weld(&mut self, p: &Point3<f64>) -> u32 {
        if let Some(id) = self.find(p) {
            return id;
        }
        let id = u32::try_from(self.points.len()).unwrap_or(u32::MAX);
        self.points.push(*p);
        self.cells.entry(point_key(p)).or_default().push(id);
        id
    }

    /// Id of the welded point equal to `p`, if any.
    #[must_use]
    pub fn find(&self, p: &Point3<f64>) -> Option<u32> {
        let [x, y, z] = point_key(p);
        (-1..=1)
            .flat_map(|dx| {
                (-1..=1).flat_map(move |dy| (-1..=1).map(move |dz| [x + dx, y + dy, z + dz]))
            })
            .filter_map(|key| self.cells.get(&key))
            .flatten()
            .copied()
            .filter(|&id| self.points.get(id as usize).is_some_and(|q| points_equal(q, p)))
            .min()
    }

    /// Number of distinct ids handed out.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when nothing has been welded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
