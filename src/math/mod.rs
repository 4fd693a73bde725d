mod aabb;
mod color;
mod range;

pub use aabb::Aabb;
pub use color::{Rgb, BLUE_D, BLUE_E, GREY, WHITE};
pub use range::ParamRange;

/// Degrees to radians, the engine's `DEGREES` unit
pub const DEGREES: f32 = std::f32::consts::PI / 180.0;
