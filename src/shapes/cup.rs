use std::f32::consts::{FRAC_PI_2, PI, TAU};

use anyhow::Result;
use glam::Vec3;

use crate::animation::{Animation, Sequence, Step};
use crate::camera::CameraOrientation;
use crate::config::SceneConfig;
use crate::geometry::{Axes, Mobject, ObjectId, ParametricCurve, Surface, SurfaceStyle};
use crate::math::{ParamRange, BLUE_D, BLUE_E, DEGREES, WHITE};
use crate::traits::{Scene, SceneBackend};

/// Height along the axis of revolution
pub const CUP_HEIGHT: ParamRange = ParamRange::new_unchecked(0.0, 3.0);
/// Angle of revolution
pub const CUP_ANGLE: ParamRange = ParamRange::new_unchecked(0.0, TAU);
pub const HANDLE_RANGE: ParamRange = ParamRange::new_unchecked(-FRAC_PI_2, FRAC_PI_2);

const RADIUS_AT_ANCHOR: f32 = 1.0;
const RADIUS_ANCHOR_HEIGHT: f32 = 1.0;
const RADIUS_SLOPE: f32 = 0.3;

const HANDLE_REACH: f32 = 1.5;
const HANDLE_OFFSET_X: f32 = 1.5;
const HANDLE_OFFSET_Y: f32 = 1.5;
const HANDLE_DEPTH: f32 = 0.7;

pub const INITIAL_CAMERA: CameraOrientation = CameraOrientation::new(70.0 * DEGREES, -45.0 * DEGREES);
pub const FINAL_CAMERA: CameraOrientation = CameraOrientation::new(PI / 2.0, PI / 3.0);

pub const ROTATE_RUN_TIME: f32 = 5.0;
pub const PAUSE_AFTER_ROTATE: f32 = 1.0;
pub const MOVE_CAMERA_RUN_TIME: f32 = 10.0;

/// Cross-section radius at height `u`, linear and equal to 1 at `u = 1`
pub fn cup_radius(u: f32) -> f32 {
    RADIUS_AT_ANCHOR + (u - RADIUS_ANCHOR_HEIGHT) * RADIUS_SLOPE
}

/// Cup body: circle of `cup_radius(u)` around the Y axis at height `u`
pub fn cup_profile(u: f32, v: f32) -> Vec3 {
    let radius = cup_radius(u);
    Vec3::new(radius * v.cos(), u, radius * v.sin())
}

/// Handle arc hanging off the cup wall
pub fn cup_handle(t: f32) -> Vec3 {
    Vec3::new(
        HANDLE_REACH * t.cos() + HANDLE_OFFSET_X,
        HANDLE_OFFSET_Y + t.sin(),
        HANDLE_DEPTH * t.sin(),
    )
}

pub fn cup_surface(config: &SceneConfig) -> Result<Surface> {
    let style = SurfaceStyle {
        fill_opacity: config.fill_opacity,
        checkerboard: [BLUE_E, BLUE_D],
    };
    let surface = Surface::new(cup_profile, CUP_HEIGHT, CUP_ANGLE)?
        .with_resolution(config.surface_resolution, config.surface_resolution)?
        .with_style(style);
    Ok(surface)
}

pub fn cup_handle_curve(config: &SceneConfig) -> Result<ParametricCurve> {
    let curve = ParametricCurve::new(cup_handle, HANDLE_RANGE)?
        .with_samples(config.curve_samples)?
        .with_stroke(WHITE, config.stroke_width);
    Ok(curve)
}

/// Half turn of the cup, a short pause, the camera sweep, then a hold
pub fn cup_sequence(surface: ObjectId) -> Sequence {
    Sequence::new()
        .play(Animation::Rotate {
            target: surface,
            angle: PI,
            axis: Vec3::Y,
            run_time: ROTATE_RUN_TIME,
        })
        .wait(PAUSE_AFTER_ROTATE)
        .play(Animation::MoveCamera {
            to: FINAL_CAMERA,
            run_time: MOVE_CAMERA_RUN_TIME,
        })
        .hold()
}

#[derive(Clone, Debug, Default)]
pub struct CupScene {
    config: SceneConfig,
}

impl CupScene {
    pub fn new(config: SceneConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }
}

impl Scene for CupScene {
    fn construct(&self, backend: &mut dyn SceneBackend) -> Result<()> {
        self.config.validate()?;

        backend.set_camera_orientation(INITIAL_CAMERA)?;

        if self.config.show_axes {
            backend.add(Mobject::Axes(Axes::default()))?;
        }
        let surface = backend.add(Mobject::Surface(cup_surface(&self.config)?))?;
        backend.add(Mobject::Curve(cup_handle_curve(&self.config)?))?;

        for step in &cup_sequence(surface) {
            match step {
                Step::Play(animation) => backend.play(animation)?,
                Step::Wait { duration } => backend.wait(*duration)?,
            }
        }

        log::debug!("Constructed {}", self.name());
        Ok(())
    }

    fn name(&self) -> &str {
        "Cup3DScene"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_close(a: Vec3, b: Vec3) {
        assert!(a.distance(b) < EPS, "{a:?} != {b:?}");
    }

    #[test]
    fn radius_is_affine_in_height() {
        assert!((cup_radius(1.0) - 1.0).abs() < EPS);
        assert!((cup_radius(0.0) - 0.7).abs() < EPS);
        assert!((cup_radius(3.0) - 1.6).abs() < EPS);
    }

    #[test]
    fn profile_points_lie_on_the_radius_circle() {
        for u in CUP_HEIGHT.linspace(12) {
            for v in CUP_ANGLE.linspace(24) {
                let p = cup_profile(u, v);
                let distance = (p.x * p.x + p.z * p.z).sqrt();
                assert!((distance - cup_radius(u)).abs() < EPS);
                assert_eq!(p.y, u);
            }
        }
    }

    #[test]
    fn profile_known_points() {
        assert_close(cup_profile(1.0, 0.0), Vec3::new(1.0, 1.0, 0.0));
        assert_close(cup_profile(1.0, FRAC_PI_2), Vec3::new(0.0, 1.0, 1.0));
    }

    #[test]
    fn profile_defined_on_domain_boundary() {
        for (u, v) in [(0.0, 0.0), (3.0, 0.0), (0.0, TAU), (3.0, TAU)] {
            assert!(cup_profile(u, v).is_finite());
        }
        // The seam closes
        assert_close(cup_profile(3.0, 0.0), cup_profile(3.0, TAU));
    }

    #[test]
    fn handle_known_points() {
        assert_close(cup_handle(0.0), Vec3::new(1.5, 1.5, 0.0));
        assert_close(cup_handle(FRAC_PI_2), Vec3::new(1.5, 2.5, 0.7));
        assert_close(cup_handle(-FRAC_PI_2), Vec3::new(1.5, 0.5, -0.7));
    }

    #[test]
    fn camera_configurations() {
        assert!((INITIAL_CAMERA.phi_degrees() - 70.0).abs() < 1e-4);
        assert!((INITIAL_CAMERA.theta_degrees() + 45.0).abs() < 1e-4);
        assert!((FINAL_CAMERA.phi_degrees() - 90.0).abs() < 1e-4);
        assert!((FINAL_CAMERA.theta_degrees() - 60.0).abs() < 1e-4);
    }

    #[test]
    fn sequence_has_two_animations_then_wait() {
        let seq = cup_sequence(ObjectId(1));
        let animations: Vec<&Animation> = seq.animations().collect();

        assert_eq!(animations.len(), 2);
        assert!(matches!(
            animations[0],
            Animation::Rotate { target: ObjectId(1), angle, axis, run_time }
                if *angle == PI && *axis == Vec3::Y && *run_time == 5.0
        ));
        assert!(matches!(
            animations[1],
            Animation::MoveCamera { to, run_time } if *to == FINAL_CAMERA && *run_time == 10.0
        ));
        assert!(matches!(seq.steps().last(), Some(Step::Wait { duration: None })));
    }
}
