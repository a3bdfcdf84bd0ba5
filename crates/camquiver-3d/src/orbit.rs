use std::f64::consts::PI;

use crate::linalg;
use crate::sample::{CameraSample, CameraSamples};

/// Up axis of the world the orbit camera moves in.
pub const WORLD_UP: [f64; 3] = [0.0, 0.0, 1.0];

/// Smallest radius the camera can zoom in to.
pub const MIN_RADIUS: f64 = 0.001;

/// Radius change of a single zoom step.
pub const ZOOM_STEP: f64 = 0.075;

/// Default drag sensitivity of the orbit camera.
pub const DEFAULT_SENSITIVITY: f64 = 1.3;

/// A point in spherical coordinates.
///
/// `theta` is the polar angle measured from the +z axis and `phi` the
/// azimuth in the xy plane measured from the +x axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCoord {
    /// Distance to the origin.
    pub radius: f64,
    /// Polar angle in `[0, PI]`.
    pub theta: f64,
    /// Azimuth in `(-PI, PI]`.
    pub phi: f64,
}

impl SphericalCoord {
    /// Convert a cartesian point to spherical coordinates.
    ///
    /// The origin maps to a zero radius with both angles zero.
    pub fn from_cartesian(point: &[f64; 3]) -> Self {
        let [x, y, z] = *point;
        let radius = linalg::norm(point);
        if radius == 0.0 {
            return Self {
                radius,
                theta: 0.0,
                phi: 0.0,
            };
        }
        Self {
            radius,
            theta: (z / radius).clamp(-1.0, 1.0).acos(),
            phi: y.atan2(x),
        }
    }

    /// Convert back to a cartesian point.
    pub fn to_cartesian(self) -> [f64; 3] {
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        [
            self.radius * sin_theta * cos_phi,
            self.radius * sin_theta * sin_phi,
            self.radius * cos_theta,
        ]
    }
}

/// A camera orbiting the origin and always looking at it.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    position: [f64; 3],
    sensitivity: f64,
}

impl OrbitCamera {
    /// Create a camera at the given position with the default sensitivity.
    pub fn new(position: [f64; 3]) -> Self {
        Self {
            position,
            sensitivity: DEFAULT_SENSITIVITY,
        }
    }

    /// Set the drag sensitivity.
    pub fn with_sensitivity(mut self, sensitivity: f64) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    /// Get the camera position.
    pub fn position(&self) -> [f64; 3] {
        self.position
    }

    /// Get the unit viewing direction, towards the origin.
    ///
    /// A camera sitting on the origin has no direction and yields zeros.
    pub fn direction(&self) -> [f64; 3] {
        linalg::normalize(&self.position.map(|c| -c)).unwrap_or([0.0; 3])
    }

    /// Get the current pose as a camera sample.
    pub fn sample(&self) -> CameraSample {
        CameraSample::new(self.position, self.direction())
    }

    /// Move the camera one zoom step closer (`delta < 0`) or further away.
    pub fn zoom(&mut self, delta: f64) {
        let mut coord = SphericalCoord::from_cartesian(&self.position);
        let step = if delta < 0.0 { -ZOOM_STEP } else { ZOOM_STEP };
        coord.radius = (coord.radius + step).max(MIN_RADIUS);
        self.position = coord.to_cartesian();
    }

    /// Drag the camera over the sphere it sits on.
    ///
    /// `dx` and `dy` are drag offsets in normalized screen units, `[-1, 1]`
    /// across the view. The radius is kept, only the angles change.
    pub fn drag(&mut self, dx: f64, dy: f64) {
        let dir = self.direction();
        let right = linalg::normalize(&linalg::cross(&WORLD_UP, &dir)).unwrap_or([0.0; 3]);
        let up = linalg::normalize(&linalg::cross(&dir, &right)).unwrap_or([0.0; 3]);

        let moved = [0, 1, 2].map(|i| {
            self.position[i] + right[i] * dx * self.sensitivity - up[i] * dy * self.sensitivity
        });

        let mut coord = SphericalCoord::from_cartesian(&moved);
        coord.radius = linalg::norm(&self.position);
        self.position = coord.to_cartesian();
    }
}

/// Generate camera samples evenly spaced on a ring of the sphere.
///
/// Every camera looks at the origin.
///
/// # Arguments
///
/// * `radius` - Distance of the cameras to the origin.
/// * `theta` - Polar angle of the ring, `PI / 2` for the equator.
/// * `count` - Number of samples.
pub fn ring_samples(radius: f64, theta: f64, count: usize) -> CameraSamples {
    let samples = (0..count)
        .map(|i| {
            let phi = 2.0 * PI * i as f64 / count as f64;
            let position = SphericalCoord { radius, theta, phi }.to_cartesian();
            OrbitCamera::new(position).sample()
        })
        .collect();
    CameraSamples::new(samples)
}

/// Record the camera poses of a drag with constant steps.
///
/// The first sample is the starting pose, followed by one sample per step.
pub fn drag_samples(camera: &mut OrbitCamera, dx: f64, dy: f64, steps: usize) -> CameraSamples {
    let mut samples = Vec::with_capacity(steps + 1);
    samples.push(camera.sample());
    for _ in 0..steps {
        camera.drag(dx, dy);
        samples.push(camera.sample());
    }
    CameraSamples::new(samples)
}
