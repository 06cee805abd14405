//! Closest points between polylines and triangle sets.
//!
//! Curved edges and curved faces are measured by exhaustive minimum over
//! their pieces. Triangle-set pairs can be large, so they are pruned with
//! bounding spheres before any exact triangle test runs.

use mesh_types::{BoundingSphere, Segment, Triangle};
use nalgebra::Point3;
use tracing::debug;

use crate::pair::nearest;
use crate::point::closest_point_on_segment;
use crate::segment::closest_points_segment_segment;
use crate::triangle::{
    closest_point_on_triangle, closest_points_segment_triangle, closest_points_triangle_triangle,
};
use crate::ClosestPair;

/// Closest point on a polyline to `point`. `a` is `point` itself.
///
/// Returns `None` for an empty polyline.
#[must_use]
pub fn closest_point_on_polyline(point: &Point3<f64>, pieces: &[Segment]) -> Option<ClosestPair> {
    nearest(
        pieces
            .iter()
            .map(|s| ClosestPair::new(*point, closest_point_on_segment(point, s))),
    )
}

/// Closest point on a set of triangles to `point`. `a` is `point` itself.
///
/// Returns `None` for an empty set.
#[must_use]
pub fn closest_point_on_triangles(
    point: &Point3<f64>,
    triangles: &[Triangle],
) -> Option<ClosestPair> {
    nearest(
        triangles
            .iter()
            .map(|t| ClosestPair::new(*point, closest_point_on_triangle(point, t))),
    )
}

/// Closest points between two polylines.
#[must_use]
pub fn closest_points_polylines(first: &[Segment], second: &[Segment]) -> Option<ClosestPair> {
    nearest(first.iter().flat_map(|s1| {
        second
            .iter()
            .map(move |s2| closest_points_segment_segment(s1, s2))
    }))
}

/// Closest points between a polyline and a triangle set.
#[must_use]
pub fn closest_points_polyline_triangles(
    pieces: &[Segment],
    triangles: &[Triangle],
) -> Option<ClosestPair> {
    nearest(pieces.iter().flat_map(|s| {
        triangles
            .iter()
            .map(move |t| closest_points_segment_triangle(s, t))
    }))
}

/// Closest points between two triangle sets, testing every pair.
///
/// Quadratic in the set sizes. [`closest_points_triangle_sets`] returns the
/// same distance while skipping most pairs.
#[must_use]
pub fn closest_points_triangle_sets_exhaustive(
    first: &[Triangle],
    second: &[Triangle],
) -> Option<ClosestPair> {
    nearest(first.iter().flat_map(|t1| {
        second
            .iter()
            .map(move |t2| closest_points_triangle_triangle(t1, t2))
    }))
}

/// Closest points between two triangle sets with bounding-sphere pruning.
///
/// 1. Each triangle gets a bounding sphere and each set gets one overall.
/// 2. Triangles whose sphere cannot come closer to the other set's sphere
///    than the best guaranteed upper bound are dropped from each side.
/// 3. Surviving pairs are ordered by their sphere lower bound and tested
///    exactly until the lower bound exceeds the best distance found.
///
/// # Example
///
/// ```
/// use mesh_proximity::closest_points_triangle_sets;
/// use mesh_types::Triangle;
///
/// let floor = [Triangle::from_arrays([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0])];
/// let roof = [
///     Triangle::from_arrays([0.0, 0.0, 2.0], [1.0, 0.0, 2.0], [0.0, 1.0, 2.0]),
///     Triangle::from_arrays([0.0, 0.0, 9.0], [1.0, 0.0, 9.0], [0.0, 1.0, 9.0]),
/// ];
///
/// let pair = closest_points_triangle_sets(&floor, &roof).unwrap();
/// assert!((pair.distance() - 2.0).abs() < 1e-10);
/// ```
#[must_use]
pub fn closest_points_triangle_sets(
    first: &[Triangle],
    second: &[Triangle],
) -> Option<ClosestPair> {
    if first.is_empty() || second.is_empty() {
        return None;
    }

    let spheres1: Vec<BoundingSphere> = first.iter().map(Triangle::bounding_sphere).collect();
    let spheres2: Vec<BoundingSphere> = second.iter().map(Triangle::bounding_sphere).collect();
    let whole1 = set_sphere(first);
    let whole2 = set_sphere(second);

    let kept1 = prune_against(&spheres1, &whole2);
    let kept2 = prune_against(&spheres2, &whole1);

    let mut candidates: Vec<(f64, usize, usize)> = Vec::with_capacity(kept1.len() * kept2.len());
    let mut upper = f64::INFINITY;
    for &i in &kept1 {
        for &j in &kept2 {
            upper = upper.min(spheres1[i].max_distance(&spheres2[j]));
            candidates.push((spheres1[i].min_distance(&spheres2[j]), i, j));
        }
    }
    candidates.retain(|(lower, _, _)| *lower <= upper);
    candidates.sort_by(|x, y| x.0.total_cmp(&y.0));

    let mut best: Option<ClosestPair> = None;
    let mut tested = 0_usize;
    for (lower, i, j) in candidates {
        if best.is_some_and(|b| lower > b.distance()) {
            break;
        }
        tested += 1;
        let pair = closest_points_triangle_triangle(&first[i], &second[j]);
        best = Some(best.map_or(pair, |b| b.nearer(pair)));
    }

    debug!(
        pairs = first.len() * second.len(),
        tested, "closest points between triangle sets"
    );
    best
}

fn set_sphere(triangles: &[Triangle]) -> BoundingSphere {
    let points: Vec<Point3<f64>> = triangles.iter().flat_map(Triangle::vertices).collect();
    BoundingSphere::from_points(points.iter())
}

/// Indices of spheres that may still hold the closest point to `target`.
fn prune_against(spheres: &[BoundingSphere], target: &BoundingSphere) -> Vec<usize> {
    let bound = spheres
        .iter()
        .map(|s| s.max_distance(target))
        .fold(f64::INFINITY, f64::min);
    spheres
        .iter()
        .enumerate()
        .filter(|(_, s)| s.min_distance(target) <= bound)
        .map(|(i, _)| i)
        .collect()
}
