//! Property-based tests for feature measurement.
//!
//! Run with: cargo test -p mesh-measure -- proptest

use approx::assert_relative_eq;
use mesh_measure::{MeasureError, Measurement, Target, measure};
use mesh_types::{EdgeFeature, FaceFeature, Feature, Triangle};
use nalgebra::{Point3, Vector3};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn arb_point() -> impl Strategy<Value = Point3<f64>> {
    prop::array::uniform3(-50.0..50.0f64).prop_map(|[x, y, z]| Point3::new(x, y, z))
}

/// Unit square in the plane z = `z`, two triangles.
fn square_at(z: f64) -> Feature {
    Feature::Face(FaceFeature::new(
        vec![
            Triangle::from_arrays([0.0, 0.0, z], [1.0, 0.0, z], [1.0, 1.0, z]),
            Triangle::from_arrays([0.0, 0.0, z], [1.0, 1.0, z], [0.0, 1.0, z]),
        ],
        Vector3::z(),
    ))
}

// =============================================================================
// Distance properties
// =============================================================================

proptest! {
    #[test]
    fn proptest_vertex_distance_matches_deltas(p in arb_point(), q in arb_point()) {
        prop_assume!((p - q).norm() > 1e-2);
        let (a, b) = (Feature::Vertex(p), Feature::Vertex(q));
        let Measurement::Distance(d) = measure(&Target::new(&a, p), &Target::new(&b, q)).unwrap()
        else {
            panic!("vertices always measure a distance");
        };
        assert_relative_eq!(
            d.distance,
            (d.dx * d.dx + d.dy * d.dy + d.dz * d.dz).sqrt(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn proptest_parallel_edges_measure_gap_anywhere(
        gap in 0.1..40.0f64,
        len in 1.0..30.0f64,
        shift in -10.0..10.0f64,
        t1 in 0.0..1.0f64,
        t2 in 0.0..1.0f64,
    ) {
        let a = Feature::Edge(EdgeFeature::segment(Point3::origin(), Point3::new(0.0, 0.0, len)));
        let b = Feature::Edge(EdgeFeature::segment(
            Point3::new(gap, 0.0, shift),
            Point3::new(gap, 0.0, shift + len),
        ));
        let m = measure(
            &Target::new(&a, Point3::new(0.0, 0.0, t1 * len)),
            &Target::new(&b, Point3::new(gap, 0.0, shift + t2 * len)),
        )
        .unwrap();
        prop_assert!(m.angle().is_none());
        assert_relative_eq!(m.distance().unwrap(), gap, epsilon = 1e-9);
    }

    #[test]
    fn proptest_parallel_faces_measure_offset(
        offset in 0.01..100.0f64,
        x in 0.0..1.0f64,
        y in 0.0..1.0f64,
    ) {
        let (a, b) = (square_at(0.0), square_at(offset));
        let m = measure(
            &Target::new(&a, Point3::new(0.5, 0.5, 0.0)),
            &Target::new(&b, Point3::new(x, y, offset)),
        )
        .unwrap();
        let Measurement::Distance(d) = m else {
            panic!("parallel faces measure a distance");
        };
        assert_relative_eq!(d.distance, offset, epsilon = 1e-9);
        prop_assert!(!d.show_axis_deltas);
    }
}

// =============================================================================
// Angle and identity properties
// =============================================================================

proptest! {
    #[test]
    fn proptest_tilted_faces_measure_dihedral(degrees in 5.0..175.0f64) {
        let tilt = degrees.to_radians();
        // Second face hinged on the x axis, rising at `degrees` from the first.
        let dir = Vector3::new(0.0, tilt.cos(), tilt.sin());
        let normal = Vector3::x().cross(&dir);
        let hinged = Feature::Face(FaceFeature::new(
            vec![Triangle::new(
                Point3::origin(),
                Point3::new(1.0, 0.0, 0.0),
                Point3::origin() + dir,
            )],
            normal,
        ));
        let flat = square_at(0.0);
        let m = measure(
            &Target::new(&flat, Point3::new(0.3, 0.6, 0.0)),
            &Target::new(&hinged, Point3::new(0.3, 0.0, 0.0) + dir * 0.5),
        )
        .unwrap();
        assert_relative_eq!(m.angle().unwrap(), degrees, epsilon = 1e-6);
    }

    #[test]
    fn proptest_identical_features_never_measure(p in arb_point(), q in arb_point()) {
        prop_assume!((p - q).norm() > 1e-2);
        for feature in [Feature::Vertex(p), Feature::Edge(EdgeFeature::segment(p, q))] {
            let target = Target::new(&feature, p);
            prop_assert_eq!(measure(&target, &target), Err(MeasureError::IdenticalFeatures));
        }
    }
}
