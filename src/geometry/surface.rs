use std::fmt;
use std::sync::Arc;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::SceneError;
use crate::geometry::Mesh;
use crate::math::{ParamRange, Rgb, BLUE_D, BLUE_E};

pub type SurfaceFn = Arc<dyn Fn(f32, f32) -> Vec3 + Send + Sync>;

pub const DEFAULT_SURFACE_RESOLUTION: u32 = 32;

/// Fill settings for a sampled surface
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurfaceStyle {
    pub fill_opacity: f32,
    pub checkerboard: [Rgb; 2],
}

impl Default for SurfaceStyle {
    fn default() -> Self {
        Self {
            fill_opacity: 1.0,
            checkerboard: [BLUE_D, BLUE_E],
        }
    }
}

/// Parametric surface `(u, v) -> point` over two closed ranges
#[derive(Clone)]
pub struct Surface {
    func: SurfaceFn,
    pub u_range: ParamRange,
    pub v_range: ParamRange,
    pub resolution: (u32, u32),
    pub style: SurfaceStyle,
}

impl Surface {
    pub fn new<F>(func: F, u_range: ParamRange, v_range: ParamRange) -> Result<Self, SceneError>
    where
        F: Fn(f32, f32) -> Vec3 + Send + Sync + 'static,
    {
        u_range.validate()?;
        v_range.validate()?;
        Ok(Self {
            func: Arc::new(func),
            u_range,
            v_range,
            resolution: (DEFAULT_SURFACE_RESOLUTION, DEFAULT_SURFACE_RESOLUTION),
            style: SurfaceStyle::default(),
        })
    }

    pub fn with_resolution(mut self, res_u: u32, res_v: u32) -> Result<Self, SceneError> {
        if res_u == 0 || res_v == 0 {
            return Err(SceneError::ZeroResolution { what: "surface" });
        }
        self.resolution = (res_u, res_v);
        Ok(self)
    }

    pub fn with_style(mut self, style: SurfaceStyle) -> Self {
        self.style = style;
        self
    }

    pub fn point(&self, u: f32, v: f32) -> Vec3 {
        (self.func)(u, v)
    }

    /// Evaluate on a `(res_u + 1) x (res_v + 1)` grid and triangulate.
    ///
    /// Vertex `(i, j)` sits at index `i * (res_v + 1) + j`; quad `(i, j)`
    /// takes checkerboard color `(i + j) % 2`.
    pub fn sample(&self) -> Mesh {
        let (res_u, res_v) = self.resolution;
        let stride = res_v + 1;

        let vertices: Vec<Vec3> = self
            .u_range
            .linspace(res_u)
            .flat_map(|u| self.v_range.linspace(res_v).map(move |v| (u, v)))
            .map(|(u, v)| self.point(u, v))
            .collect();

        let quad_count = (res_u * res_v) as usize;
        let mut triangles = Vec::with_capacity(quad_count * 2);
        let mut colors = Vec::with_capacity(quad_count * 2);

        for i in 0..res_u {
            for j in 0..res_v {
                let a = i * stride + j;
                let b = a + 1;
                let c = a + stride;
                let d = c + 1;
                let color = self.style.checkerboard[((i + j) % 2) as usize];

                triangles.push([a, c, b]);
                triangles.push([b, c, d]);
                colors.push(color);
                colors.push(color);
            }
        }

        log::debug!(
            "Sampled surface: {} vertices, {} triangles",
            vertices.len(),
            triangles.len()
        );

        Mesh {
            vertices,
            triangles,
            colors,
            opacity: self.style.fill_opacity,
        }
    }
}

impl fmt::Debug for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Surface")
            .field("u_range", &self.u_range)
            .field("v_range", &self.v_range)
            .field("resolution", &self.resolution)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}
