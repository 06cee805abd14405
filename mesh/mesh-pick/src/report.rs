//! Flat measurement summary for panels and exports.

use mesh_measure::Measurement;
use mesh_types::FeatureKind;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A committed measurement, flattened for display.
///
/// Distance results fill `distance` and the axis deltas; angle results
/// fill `angle` only. Values are in model units and degrees; unit
/// conversion and formatting belong to the host.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeasurementReport {
    /// Kind of the first pick.
    pub from: FeatureKind,
    /// Kind of the second pick.
    pub to: FeatureKind,
    /// Minimum distance.
    pub distance: Option<f64>,
    /// Absolute delta along X.
    pub delta_x: Option<f64>,
    /// Absolute delta along Y.
    pub delta_y: Option<f64>,
    /// Absolute delta along Z.
    pub delta_z: Option<f64>,
    /// Angle in degrees.
    pub angle: Option<f64>,
    /// Whether the axis deltas are worth showing.
    pub show_axis_deltas: bool,
}

impl MeasurementReport {
    /// Summarize a measurement between picks of the given kinds.
    #[must_use]
    pub const fn new(from: FeatureKind, to: FeatureKind, measurement: &Measurement) -> Self {
        match measurement {
            Measurement::Distance(d) => Self {
                from,
                to,
                distance: Some(d.distance),
                delta_x: Some(d.dx),
                delta_y: Some(d.dy),
                delta_z: Some(d.dz),
                angle: None,
                show_axis_deltas: d.show_axis_deltas,
            },
            Measurement::Angle(a) => Self {
                from,
                to,
                distance: None,
                delta_x: None,
                delta_y: None,
                delta_z: None,
                angle: Some(a.degrees),
                show_axis_deltas: false,
            },
        }
    }
}
