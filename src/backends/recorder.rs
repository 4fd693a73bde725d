use anyhow::{bail, Result};
use serde::Serialize;

use crate::animation::{Animation, DEFAULT_WAIT};
use crate::camera::CameraOrientation;
use crate::geometry::{Mobject, MobjectInfo, ObjectId};
use crate::traits::SceneBackend;

/// One call a scene made into its backend
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SceneEvent {
    SetCamera { orientation: CameraOrientation },
    Add { id: ObjectId, object: MobjectInfo },
    Play { animation: Animation },
    Wait { duration: Option<f32> },
}

/// Backend that only remembers what it was told, in order
#[derive(Debug, Default)]
pub struct Recorder {
    events: Vec<SceneEvent>,
    objects: Vec<Mobject>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[SceneEvent] {
        &self.events
    }

    pub fn objects(&self) -> &[Mobject] {
        &self.objects
    }

    pub fn object(&self, id: ObjectId) -> Option<&Mobject> {
        self.objects.get(id.0)
    }

    /// Scheduled runtime: animations plus waits, default-length holds included
    pub fn total_runtime(&self) -> f32 {
        self.events
            .iter()
            .map(|event| match event {
                SceneEvent::Play { animation } => animation.run_time(),
                SceneEvent::Wait { duration } => duration.unwrap_or(DEFAULT_WAIT),
                _ => 0.0,
            })
            .sum()
    }
}

impl SceneBackend for Recorder {
    fn set_camera_orientation(&mut self, orientation: CameraOrientation) -> Result<()> {
        self.events.push(SceneEvent::SetCamera { orientation });
        Ok(())
    }

    fn add(&mut self, mobject: Mobject) -> Result<ObjectId> {
        let id = ObjectId(self.objects.len());
        self.events.push(SceneEvent::Add {
            id,
            object: mobject.info(),
        });
        self.objects.push(mobject);
        Ok(id)
    }

    fn play(&mut self, animation: &Animation) -> Result<()> {
        if let Animation::Rotate { target, .. } = animation {
            if self.object(*target).is_none() {
                bail!("rotate targets unknown object {target}");
            }
        }
        self.events.push(SceneEvent::Play {
            animation: animation.clone(),
        });
        Ok(())
    }

    fn wait(&mut self, duration: Option<f32>) -> Result<()> {
        self.events.push(SceneEvent::Wait { duration });
        Ok(())
    }
}
