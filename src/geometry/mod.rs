mod axes;
mod curve;
mod mesh;
mod surface;

pub use axes::Axes;
pub use curve::{CurveFn, ParametricCurve, DEFAULT_CURVE_SAMPLES, DEFAULT_STROKE_WIDTH};
pub use mesh::{Mesh, Polyline};
pub use surface::{Surface, SurfaceFn, SurfaceStyle, DEFAULT_SURFACE_RESOLUTION};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::math::{ParamRange, Rgb};

/// Handle a backend hands out for every added object
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectId(pub usize);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Anything that can be registered with a scene
#[derive(Clone, Debug)]
pub enum Mobject {
    Axes(Axes),
    Surface(Surface),
    Curve(ParametricCurve),
}

impl Mobject {
    pub fn kind(&self) -> &'static str {
        match self {
            Mobject::Axes(_) => "axes",
            Mobject::Surface(_) => "surface",
            Mobject::Curve(_) => "curve",
        }
    }

    /// Serializable description, without the parametrization itself
    pub fn info(&self) -> MobjectInfo {
        match self {
            Mobject::Axes(axes) => MobjectInfo::Axes(*axes),
            Mobject::Surface(surface) => MobjectInfo::Surface {
                u_range: surface.u_range,
                v_range: surface.v_range,
                resolution: surface.resolution,
                style: surface.style,
            },
            Mobject::Curve(curve) => MobjectInfo::Curve {
                t_range: curve.t_range,
                samples: curve.samples,
                color: curve.color,
                stroke_width: curve.stroke_width,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MobjectInfo {
    Axes(Axes),
    Surface {
        u_range: ParamRange,
        v_range: ParamRange,
        resolution: (u32, u32),
        style: SurfaceStyle,
    },
    Curve {
        t_range: ParamRange,
        samples: u32,
        color: Rgb,
        stroke_width: f32,
    },
}
