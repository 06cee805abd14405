//! Screen-space snap tolerance converted to world units.

use nalgebra::{Point3, Vector3};

use crate::{SnapError, SnapParams, SnapResult};

/// Camera snapshot taken for one classification call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Perspective (`true`) or orthographic (`false`) projection.
    pub perspective: bool,
    /// Vertical field of view in degrees.
    pub fov_degrees: f64,
    /// Eye position.
    pub position: Point3<f64>,
    /// Eye vector, from the eye to the orbit target. Its length is the
    /// viewing distance used by orthographic cameras.
    pub eye_vector: Vector3<f64>,
}

impl CameraState {
    /// Perspective camera looking from `position` toward `target`.
    #[must_use]
    pub fn perspective(position: Point3<f64>, target: Point3<f64>, fov_degrees: f64) -> Self {
        Self {
            perspective: true,
            fov_degrees,
            position,
            eye_vector: target - position,
        }
    }

    /// Orthographic camera looking from `position` toward `target`.
    #[must_use]
    pub fn orthographic(position: Point3<f64>, target: Point3<f64>, fov_degrees: f64) -> Self {
        Self {
            perspective: false,
            ..Self::perspective(position, target, fov_degrees)
        }
    }
}

/// Viewport size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Create a viewport.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// World-space lengths of the configured pixel sizes at one hit point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionRadius {
    /// Snap tolerance: hits closer than this to a vertex or edge snap to it.
    pub snap: f64,
    /// Marker size for drawing picked vertices and edges.
    pub marker: f64,
}

impl DetectionRadius {
    /// Compute both radii at `point`.
    ///
    /// # Errors
    ///
    /// Returns an error for a non-positive viewport height or device pixel
    /// ratio, a field of view outside `(0, 180)` degrees, a zero eye
    /// vector, or a perspective camera with `point` behind it.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_snap::{CameraState, DetectionRadius, SnapParams, Viewport};
    /// use nalgebra::Point3;
    ///
    /// let camera = CameraState::perspective(
    ///     Point3::new(0.0, 0.0, 10.0),
    ///     Point3::origin(),
    ///     90.0,
    /// );
    /// let viewport = Viewport::new(800.0, 1000.0);
    ///
    /// // 10 units away with a 90° fov: the view is 20 units tall.
    /// let radius = DetectionRadius::at(&Point3::origin(), &camera, &viewport, &SnapParams::default())
    ///     .unwrap();
    /// assert!((radius.snap - 0.2).abs() < 1e-10);
    /// assert!((radius.marker - 0.1).abs() < 1e-10);
    /// ```
    pub fn at(
        point: &Point3<f64>,
        camera: &CameraState,
        viewport: &Viewport,
        params: &SnapParams,
    ) -> SnapResult<Self> {
        let world_per_pixel = world_per_pixel(point, camera, viewport, params.device_pixel_ratio)?;
        Ok(Self {
            snap: params.snap_pixel_size * world_per_pixel,
            marker: params.vertex_pixel_size * world_per_pixel,
        })
    }
}

/// World length covered by one device pixel at `point`.
fn world_per_pixel(
    point: &Point3<f64>,
    camera: &CameraState,
    viewport: &Viewport,
    device_pixel_ratio: f64,
) -> SnapResult<f64> {
    if !(viewport.height.is_finite() && viewport.height > 0.0) {
        return Err(SnapError::InvalidViewport(viewport.height));
    }
    if !(device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0) {
        return Err(SnapError::invalid_params(format!(
            "device pixel ratio must be positive, got {device_pixel_ratio}"
        )));
    }
    if !(camera.fov_degrees.is_finite() && camera.fov_degrees > 0.0 && camera.fov_degrees < 180.0)
    {
        return Err(SnapError::invalid_camera(format!(
            "field of view must lie in (0, 180) degrees, got {}",
            camera.fov_degrees
        )));
    }
    let Some(view_dir) = camera.eye_vector.try_normalize(f64::EPSILON) else {
        return Err(SnapError::invalid_camera("eye vector has zero length"));
    };

    let distance = if camera.perspective {
        let depth = (point - camera.position).dot(&view_dir);
        if depth < 0.0 {
            return Err(SnapError::invalid_camera(format!(
                "point lies {} behind the camera",
                -depth
            )));
        }
        depth
    } else {
        camera.eye_vector.norm()
    };

    let world_height = 2.0 * distance * (camera.fov_degrees.to_radians() / 2.0).tan();
    Ok(world_height / (viewport.height * device_pixel_ratio))
}
