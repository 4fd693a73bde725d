use std::fmt;
use std::sync::Arc;

use glam::Vec3;

use crate::error::SceneError;
use crate::geometry::Polyline;
use crate::math::{ParamRange, Rgb, WHITE};

pub type CurveFn = Arc<dyn Fn(f32) -> Vec3 + Send + Sync>;

pub const DEFAULT_CURVE_SAMPLES: u32 = 100;
pub const DEFAULT_STROKE_WIDTH: f32 = 4.0;

/// Parametric curve `t -> point` over a closed range
#[derive(Clone)]
pub struct ParametricCurve {
    func: CurveFn,
    pub t_range: ParamRange,
    pub samples: u32,
    pub color: Rgb,
    pub stroke_width: f32,
}

impl ParametricCurve {
    pub fn new<F>(func: F, t_range: ParamRange) -> Result<Self, SceneError>
    where
        F: Fn(f32) -> Vec3 + Send + Sync + 'static,
    {
        t_range.validate()?;
        Ok(Self {
            func: Arc::new(func),
            t_range,
            samples: DEFAULT_CURVE_SAMPLES,
            color: WHITE,
            stroke_width: DEFAULT_STROKE_WIDTH,
        })
    }

    pub fn with_samples(mut self, samples: u32) -> Result<Self, SceneError> {
        if samples == 0 {
            return Err(SceneError::ZeroResolution { what: "curve" });
        }
        self.samples = samples;
        Ok(self)
    }

    pub fn with_stroke(mut self, color: Rgb, stroke_width: f32) -> Self {
        self.color = color;
        self.stroke_width = stroke_width;
        self
    }

    pub fn point(&self, t: f32) -> Vec3 {
        (self.func)(t)
    }

    /// `samples + 1` points from the start of the range to its end
    pub fn sample(&self) -> Polyline {
        Polyline {
            points: self.t_range.linspace(self.samples).map(|t| self.point(t)).collect(),
            color: self.color,
            stroke_width: self.stroke_width,
        }
    }
}

impl fmt::Debug for ParametricCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParametricCurve")
            .field("t_range", &self.t_range)
            .field("samples", &self.samples)
            .field("color", &self.color)
            .field("stroke_width", &self.stroke_width)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_include_both_ends() {
        let curve = ParametricCurve::new(|t| Vec3::new(t, 2.0 * t, 0.0), ParamRange::new(-1.0, 1.0).unwrap())
            .unwrap()
            .with_samples(4)
            .unwrap();
        let line = curve.sample();

        assert_eq!(line.points.len(), 5);
        assert_eq!(line.points[0], Vec3::new(-1.0, -2.0, 0.0));
        assert_eq!(line.points[4], Vec3::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn zero_samples_rejected() {
        let curve = ParametricCurve::new(|_| Vec3::ZERO, ParamRange::new(0.0, 1.0).unwrap()).unwrap();
        assert!(curve.with_samples(0).is_err());
    }
}
