use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::math::DEGREES;

/// Viewing orientation as spherical angles, in radians.
///
/// `phi` is the polar angle measured from +Z, `theta` the azimuth around +Z
/// measured from +X.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraOrientation {
    pub phi: f32,
    pub theta: f32,
}

impl CameraOrientation {
    pub const fn new(phi: f32, theta: f32) -> Self {
        Self { phi, theta }
    }

    pub fn from_degrees(phi: f32, theta: f32) -> Self {
        Self::new(phi * DEGREES, theta * DEGREES)
    }

    pub fn phi_degrees(&self) -> f32 {
        self.phi / DEGREES
    }

    pub fn theta_degrees(&self) -> f32 {
        self.theta / DEGREES
    }

    /// Unit vector from the look-at point toward the camera
    pub fn direction(&self) -> Vec3 {
        Vec3::new(
            self.phi.sin() * self.theta.cos(),
            self.phi.sin() * self.theta.sin(),
            self.phi.cos(),
        )
    }
}

impl Default for CameraOrientation {
    fn default() -> Self {
        // Looking straight down the Z axis
        Self::new(0.0, -90.0 * DEGREES)
    }
}
