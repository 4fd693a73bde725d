use anyhow::Result;

use super::backend::SceneBackend;

/// Scene construction abstraction
pub trait Scene {
    /// Emit every object, camera change and animation into the backend
    fn construct(&self, backend: &mut dyn SceneBackend) -> Result<()>;

    /// Get scene name for debugging
    fn name(&self) -> &str {
        "Scene"
    }
}
