use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::CameraOrientation;
use crate::geometry::ObjectId;

/// Length the engine holds for a wait without an explicit duration
pub const DEFAULT_WAIT: f32 = 1.0;

/// A timed change the engine plays out
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Animation {
    /// Rotate `target` by `angle` radians about `axis`
    Rotate {
        target: ObjectId,
        angle: f32,
        axis: Vec3,
        run_time: f32,
    },
    /// Move the camera to a new orientation
    MoveCamera {
        to: CameraOrientation,
        run_time: f32,
    },
}

impl Animation {
    pub fn run_time(&self) -> f32 {
        match self {
            Animation::Rotate { run_time, .. } | Animation::MoveCamera { run_time, .. } => *run_time,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    Play(Animation),
    /// `None` holds for the engine's default length
    Wait { duration: Option<f32> },
}

impl Step {
    pub fn duration(&self) -> f32 {
        match self {
            Step::Play(animation) => animation.run_time(),
            Step::Wait { duration } => duration.unwrap_or(DEFAULT_WAIT),
        }
    }
}

/// Ordered list of steps, built front to back
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Sequence {
    steps: Vec<Step>,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn play(mut self, animation: Animation) -> Self {
        self.steps.push(Step::Play(animation));
        self
    }

    pub fn wait(mut self, duration: f32) -> Self {
        self.steps.push(Step::Wait {
            duration: Some(duration),
        });
        self
    }

    pub fn hold(mut self) -> Self {
        self.steps.push(Step::Wait { duration: None });
        self
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Only the animations, skipping waits
    pub fn animations(&self) -> impl Iterator<Item = &Animation> {
        self.steps.iter().filter_map(|step| match step {
            Step::Play(animation) => Some(animation),
            Step::Wait { .. } => None,
        })
    }

    pub fn total_duration(&self) -> f32 {
        self.steps.iter().map(Step::duration).sum()
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spin(run_time: f32) -> Animation {
        Animation::Rotate {
            target: ObjectId(0),
            angle: 1.0,
            axis: Vec3::Y,
            run_time,
        }
    }

    #[test]
    fn animations_skip_waits() {
        let seq = Sequence::new().play(spin(2.0)).wait(1.0).play(spin(3.0)).hold();
        let run_times: Vec<f32> = seq.animations().map(Animation::run_time).collect();

        assert_eq!(run_times, vec![2.0, 3.0]);
        assert_eq!(seq.steps().len(), 4);
    }

    #[test]
    fn hold_counts_default_wait() {
        let seq = Sequence::new().play(spin(2.0)).hold();
        assert_eq!(seq.total_duration(), 2.0 + DEFAULT_WAIT);
    }

    #[test]
    fn steps_serialize_tagged() {
        let json = serde_json::to_value(Step::Wait { duration: None }).unwrap();
        assert_eq!(json["step"], "wait");
        assert!(json["duration"].is_null());
    }
}
