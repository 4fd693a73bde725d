use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::animation::Animation;
use crate::camera::CameraOrientation;
use crate::geometry::{Mesh, Mobject, ObjectId, Polyline};
use crate::math::Aabb;
use crate::traits::SceneBackend;

/// Sampled form of a registered object
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Geometry {
    Mesh(Mesh),
    Lines { lines: Vec<Polyline> },
}

impl Geometry {
    pub fn bounds(&self) -> Option<Aabb> {
        match self {
            Geometry::Mesh(mesh) => mesh.bounds(),
            Geometry::Lines { lines } => lines
                .iter()
                .filter_map(Polyline::bounds)
                .reduce(|a, b| a.union(&b)),
        }
    }

    fn rotate(&mut self, angle: f32, axis: glam::Vec3) {
        let Some(pivot) = self.bounds().map(|b| b.center()) else {
            return;
        };
        match self {
            Geometry::Mesh(mesh) => mesh.rotate_about(angle, axis, pivot),
            Geometry::Lines { lines } => {
                for line in lines {
                    line.rotate_about(angle, axis, pivot);
                }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportedObject {
    pub id: ObjectId,
    pub name: String,
    pub geometry: Geometry,
}

/// Everything the exporter knows once the scene has run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExportDocument {
    pub scene: String,
    pub generated_at: DateTime<Utc>,
    pub camera: CameraOrientation,
    pub bounds: Option<Aabb>,
    pub objects: Vec<ExportedObject>,
}

/// Backend that samples every object and applies animations to their end
/// state, so the exported geometry is what the last frame shows
#[derive(Debug, Default)]
pub struct Exporter {
    objects: Vec<ExportedObject>,
    camera: CameraOrientation,
    elapsed: f32,
}

impl Exporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn objects(&self) -> &[ExportedObject] {
        &self.objects
    }

    pub fn camera(&self) -> CameraOrientation {
        self.camera
    }

    /// Scene time consumed by played animations and explicit waits
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn bounds(&self) -> Option<Aabb> {
        self.objects
            .iter()
            .filter_map(|o| o.geometry.bounds())
            .reduce(|a, b| a.union(&b))
    }

    pub fn into_document(self, scene: &str) -> ExportDocument {
        ExportDocument {
            scene: scene.to_string(),
            generated_at: Utc::now(),
            camera: self.camera,
            bounds: self.bounds(),
            objects: self.objects,
        }
    }
}

impl SceneBackend for Exporter {
    fn set_camera_orientation(&mut self, orientation: CameraOrientation) -> Result<()> {
        self.camera = orientation;
        Ok(())
    }

    fn add(&mut self, mobject: Mobject) -> Result<ObjectId> {
        let id = ObjectId(self.objects.len());
        let geometry = match &mobject {
            Mobject::Axes(axes) => Geometry::Lines { lines: axes.sample() },
            Mobject::Surface(surface) => Geometry::Mesh(surface.sample()),
            Mobject::Curve(curve) => Geometry::Lines {
                lines: vec![curve.sample()],
            },
        };
        let name = format!("{}_{}", mobject.kind(), id.0);
        log::debug!("Exporter sampled {name}");

        self.objects.push(ExportedObject { id, name, geometry });
        Ok(id)
    }

    fn play(&mut self, animation: &Animation) -> Result<()> {
        match animation {
            Animation::Rotate {
                target,
                angle,
                axis,
                ..
            } => {
                let object = self
                    .objects
                    .get_mut(target.0)
                    .ok_or_else(|| anyhow!("rotate targets unknown object {target}"))?;
                object.geometry.rotate(*angle, *axis);
            }
            Animation::MoveCamera { to, .. } => self.camera = *to,
        }
        self.elapsed += animation.run_time();
        Ok(())
    }

    fn wait(&mut self, duration: Option<f32>) -> Result<()> {
        // Open-ended holds do not advance the exported end state
        if let Some(duration) = duration {
            self.elapsed += duration;
        }
        Ok(())
    }
}
