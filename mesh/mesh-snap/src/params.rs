//! Parameters for snap classification.

/// Screen-space tunables for snapping.
///
/// Pixel sizes are converted to world lengths at the hit point, so feature
/// discrimination feels the same at every zoom level. The comparison
/// tolerance itself is fixed at [`SNAP_EPSILON`](mesh_types::SNAP_EPSILON).
///
/// # Example
///
/// ```
/// use mesh_snap::SnapParams;
///
/// let params = SnapParams::default();
/// assert!((params.snap_pixel_size - 10.0).abs() < 1e-10);
///
/// let hidpi = params.device_pixel_ratio(2.0);
/// assert!((hidpi.device_pixel_ratio - 2.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapParams {
    /// Pixel size of drawn vertex and edge markers.
    pub vertex_pixel_size: f64,

    /// Pixel distance within which a hit snaps to a vertex, edge or curve.
    pub snap_pixel_size: f64,

    /// Physical pixels per CSS pixel of the host canvas.
    pub device_pixel_ratio: f64,

    /// Minimum number of pieces a closed edge needs to be tested as a circle.
    pub circle_min_samples: usize,
}

impl Default for SnapParams {
    fn default() -> Self {
        Self {
            vertex_pixel_size: 5.0,
            snap_pixel_size: 10.0,
            device_pixel_ratio: 1.0,
            circle_min_samples: 8,
        }
    }
}

impl SnapParams {
    /// Set the snap tolerance in pixels.
    #[must_use]
    pub const fn snap_pixel_size(mut self, pixels: f64) -> Self {
        self.snap_pixel_size = pixels;
        self
    }

    /// Set the marker size in pixels.
    #[must_use]
    pub const fn vertex_pixel_size(mut self, pixels: f64) -> Self {
        self.vertex_pixel_size = pixels;
        self
    }

    /// Set the device pixel ratio.
    #[must_use]
    pub const fn device_pixel_ratio(mut self, ratio: f64) -> Self {
        self.device_pixel_ratio = ratio;
        self
    }

    /// Set the minimum piece count for circle detection.
    #[must_use]
    pub const fn circle_min_samples(mut self, samples: usize) -> Self {
        self.circle_min_samples = samples;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = SnapParams::default();
        assert!((params.vertex_pixel_size - 5.0).abs() < f64::EPSILON);
        assert!((params.device_pixel_ratio - 1.0).abs() < f64::EPSILON);
        assert_eq!(params.circle_min_samples, 8);
    }

    #[test]
    fn test_builder_pattern() {
        let params = SnapParams::default()
            .snap_pixel_size(12.0)
            .vertex_pixel_size(6.0)
            .circle_min_samples(12);
        assert!((params.snap_pixel_size - 12.0).abs() < f64::EPSILON);
        assert!((params.vertex_pixel_size - 6.0).abs() < f64::EPSILON);
        assert_eq!(params.circle_min_samples, 12);
    }
}
