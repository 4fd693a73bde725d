use anyhow::Result;

use crate::animation::Animation;
use crate::camera::CameraOrientation;
use crate::geometry::{Mobject, ObjectId};

/// Engine-side surface a scene talks to
pub trait SceneBackend {
    /// Set the camera orientation immediately, without animating
    fn set_camera_orientation(&mut self, orientation: CameraOrientation) -> Result<()>;

    /// Register a drawable object and get its id back
    fn add(&mut self, mobject: Mobject) -> Result<ObjectId>;

    /// Play a single animation to completion
    fn play(&mut self, animation: &Animation) -> Result<()>;

    /// Hold the current frame; `None` means the engine's default length
    fn wait(&mut self, duration: Option<f32>) -> Result<()>;
}
