use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::SceneError;
use crate::geometry::{DEFAULT_CURVE_SAMPLES, DEFAULT_SURFACE_RESOLUTION};

/// Sampling and styling knobs for the cup scene.
///
/// Every field has a default, so a config file only needs the keys it
/// changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Quads along each parameter of the cup surface
    pub surface_resolution: u32,
    /// Segments along the handle curve
    pub curve_samples: u32,
    pub fill_opacity: f32,
    pub stroke_width: f32,
    pub show_axes: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            surface_resolution: DEFAULT_SURFACE_RESOLUTION,
            curve_samples: DEFAULT_CURVE_SAMPLES,
            fill_opacity: 0.75,
            stroke_width: 6.0,
            show_axes: true,
        }
    }
}

impl SceneConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        config.validate()?;
        log::info!("Loaded scene config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        if self.surface_resolution == 0 {
            return Err(SceneError::ZeroResolution { what: "surface" });
        }
        if self.curve_samples == 0 {
            return Err(SceneError::ZeroResolution { what: "curve" });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config: SceneConfig = serde_json::from_str(r#"{ "surface_resolution": 8 }"#).unwrap();
        assert_eq!(config.surface_resolution, 8);
        assert_eq!(config.curve_samples, DEFAULT_CURVE_SAMPLES);
        assert_eq!(config.fill_opacity, 0.75);
    }

    #[test]
    fn zero_resolution_fails_validation() {
        let config = SceneConfig {
            curve_samples: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SceneError::ZeroResolution { what: "curve" })
        ));
    }
}
