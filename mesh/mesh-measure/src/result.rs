//! Measurement results handed to rendering and formatting layers.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Construction geometry drawn alongside a distance.
///
/// Emitted when the measured foot point lies outside the feature it was
/// projected onto, so the drawing shows how the feature was extended.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Extension {
    /// Dashed line continuing an edge out to the foot point.
    Line {
        /// Edge end the extension starts from.
        start: Point3<f64>,
        /// Foot point on the extended line.
        end: Point3<f64>,
    },
    /// Plane patch continuing a face out to the foot point.
    Plane {
        /// Foot point on the extended plane.
        origin: Point3<f64>,
        /// Unit plane normal.
        normal: Vector3<f64>,
        /// Suggested half extent of the drawn patch.
        half_size: f64,
    },
}

/// Distance measurement result between two points.
///
/// # Example
///
/// ```
/// use mesh_measure::measure_distance;
/// use nalgebra::Point3;
///
/// let from = Point3::origin();
/// let to = Point3::new(3.0, 4.0, 0.0);
/// let result = measure_distance(from, to);
///
/// assert!((result.distance - 5.0).abs() < 1e-10); // 3-4-5 triangle
/// assert!((result.dx - 3.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DistanceMeasurement {
    /// Point on the first feature.
    pub from: Point3<f64>,
    /// Point on the second feature.
    pub to: Point3<f64>,
    /// Euclidean distance.
    pub distance: f64,
    /// Absolute distance along X axis.
    pub dx: f64,
    /// Absolute distance along Y axis.
    pub dy: f64,
    /// Absolute distance along Z axis.
    pub dz: f64,
    /// Whether the axis deltas are worth showing. Always computed.
    pub show_axis_deltas: bool,
    /// Construction geometry, when a feature had to be extended.
    pub extension: Option<Extension>,
}

impl DistanceMeasurement {
    /// Same measurement with `from` and `to` exchanged.
    #[must_use]
    pub fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            ..self
        }
    }

    /// Attach construction geometry.
    #[must_use]
    pub fn with_extension(mut self, extension: Option<Extension>) -> Self {
        self.extension = extension;
        self
    }

    /// Flag the axis deltas as not meaningful for display.
    #[must_use]
    pub fn hide_axis_deltas(mut self) -> Self {
        self.show_axis_deltas = false;
        self
    }
}

/// Measure distance between two points.
///
/// Axis deltas come straight from the coordinates of the two points.
///
/// # Example
///
/// ```
/// use mesh_measure::measure_distance;
/// use nalgebra::Point3;
///
/// let result = measure_distance(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(10.0, 0.0, 0.0)
/// );
///
/// assert!((result.distance - 10.0).abs() < 1e-10);
/// assert!((result.dx - 10.0).abs() < 1e-10);
/// assert!((result.dy).abs() < 1e-10);
/// assert!((result.dz).abs() < 1e-10);
/// assert!(result.show_axis_deltas);
/// ```
#[must_use]
pub fn measure_distance(from: Point3<f64>, to: Point3<f64>) -> DistanceMeasurement {
    let diff = to - from;
    DistanceMeasurement {
        from,
        to,
        distance: diff.norm(),
        dx: diff.x.abs(),
        dy: diff.y.abs(),
        dz: diff.z.abs(),
        show_axis_deltas: true,
        extension: None,
    }
}

/// Where to draw an angle arc.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AngleAnnotation {
    /// Arc center.
    pub apex: Point3<f64>,
    /// End of the arm on the first feature.
    pub arm_start: Point3<f64>,
    /// End of the arm on the second feature.
    pub arm_end: Point3<f64>,
    /// Unit normal of the plane the arc is drawn in.
    pub normal: Vector3<f64>,
}

/// Angle measurement result.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AngleMeasurement {
    /// Angle in degrees.
    pub degrees: f64,
    /// Drawing hints, when the arms are well defined.
    pub annotation: Option<AngleAnnotation>,
}

impl AngleMeasurement {
    /// Same angle seen from the other feature.
    #[must_use]
    pub fn reversed(self) -> Self {
        Self {
            annotation: self.annotation.map(|a| AngleAnnotation {
                arm_start: a.arm_end,
                arm_end: a.arm_start,
                normal: -a.normal,
                ..a
            }),
            ..self
        }
    }
}

/// Outcome of measuring one feature against another: a distance or an
/// angle, never both.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Measurement {
    /// Minimum distance between the features.
    Distance(DistanceMeasurement),
    /// Angle between the features.
    Angle(AngleMeasurement),
}

impl Measurement {
    /// The distance, for distance results.
    #[must_use]
    pub const fn distance(&self) -> Option<f64> {
        match self {
            Self::Distance(d) => Some(d.distance),
            Self::Angle(_) => None,
        }
    }

    /// The angle in degrees, for angle results.
    #[must_use]
    pub const fn angle(&self) -> Option<f64> {
        match self {
            Self::Distance(_) => None,
            Self::Angle(a) => Some(a.degrees),
        }
    }

    /// The measured segment, for distance results.
    #[must_use]
    pub const fn points(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        match self {
            Self::Distance(d) => Some((d.from, d.to)),
            Self::Angle(_) => None,
        }
    }

    /// Same measurement with the two features exchanged.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::Distance(d) => Self::Distance(d.reversed()),
            Self::Angle(a) => Self::Angle(a.reversed()),
        }
    }
}

impl From<DistanceMeasurement> for Measurement {
    fn from(d: DistanceMeasurement) -> Self {
        Self::Distance(d)
    }
}

impl From<AngleMeasurement> for Measurement {
    fn from(a: AngleMeasurement) -> Self {
        Self::Angle(a)
    }
}
