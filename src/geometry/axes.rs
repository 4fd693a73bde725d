use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::geometry::Polyline;
use crate::math::{ParamRange, Rgb, GREY};

const AXIS_STROKE_WIDTH: f32 = 2.0;

/// Three coordinate axes through the origin
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Axes {
    pub x_range: ParamRange,
    pub y_range: ParamRange,
    pub z_range: ParamRange,
    pub color: Rgb,
}

impl Default for Axes {
    fn default() -> Self {
        Self {
            x_range: ParamRange::new_unchecked(-6.0, 6.0),
            y_range: ParamRange::new_unchecked(-5.0, 5.0),
            z_range: ParamRange::new_unchecked(-4.0, 4.0),
            color: GREY,
        }
    }
}

impl Axes {
    /// One two-point segment per axis, in x, y, z order
    pub fn sample(&self) -> Vec<Polyline> {
        [
            (self.x_range, Vec3::X),
            (self.y_range, Vec3::Y),
            (self.z_range, Vec3::Z),
        ]
        .into_iter()
        .map(|(range, dir)| Polyline {
            points: vec![dir * range.start, dir * range.end],
            color: self.color,
            stroke_width: AXIS_STROKE_WIDTH,
        })
        .collect()
    }
}
