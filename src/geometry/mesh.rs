use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::math::{Aabb, Rgb};

/// Indexed triangle mesh with one color per triangle
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub vertices: Vec<Vec3>,
    pub triangles: Vec<[u32; 3]>,
    pub colors: Vec<Rgb>,
    pub opacity: f32,
}

impl Mesh {
    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(&self.vertices)
    }

    /// Rotate every vertex by `angle` radians about `axis` through `pivot`
    pub fn rotate_about(&mut self, angle: f32, axis: Vec3, pivot: Vec3) {
        rotate_points(&mut self.vertices, angle, axis, pivot);
    }
}

/// Open polyline drawn with a stroke
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub points: Vec<Vec3>,
    pub color: Rgb,
    pub stroke_width: f32,
}

impl Polyline {
    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(&self.points)
    }

    pub fn rotate_about(&mut self, angle: f32, axis: Vec3, pivot: Vec3) {
        rotate_points(&mut self.points, angle, axis, pivot);
    }

    /// Sum of segment lengths
    pub fn length(&self) -> f32 {
        self.points.windows(2).map(|w| w[0].distance(w[1])).sum()
    }
}

fn rotate_points(points: &mut [Vec3], angle: f32, axis: Vec3, pivot: Vec3) {
    let Some(axis) = axis.try_normalize() else {
        return;
    };
    let rotation = Quat::from_axis_angle(axis, angle);
    for p in points.iter_mut() {
        *p = pivot + rotation * (*p - pivot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn half_turn_about_y_mirrors_xz() {
        let mut line = Polyline {
            points: vec![Vec3::new(1.0, 2.0, 0.5)],
            color: Rgb([1.0, 1.0, 1.0]),
            stroke_width: 1.0,
        };
        line.rotate_about(PI, Vec3::Y, Vec3::ZERO);

        let p = line.points[0];
        assert!((p.x + 1.0).abs() < 1e-5);
        assert!((p.y - 2.0).abs() < 1e-5);
        assert!((p.z + 0.5).abs() < 1e-5);
    }

    #[test]
    fn zero_axis_leaves_points_alone() {
        let mut mesh = Mesh {
            vertices: vec![Vec3::X],
            ..Default::default()
        };
        mesh.rotate_about(PI, Vec3::ZERO, Vec3::ZERO);
        assert_eq!(mesh.vertices[0], Vec3::X);
    }

    #[test]
    fn polyline_length() {
        let line = Polyline {
            points: vec![Vec3::ZERO, Vec3::X, Vec3::new(1.0, 2.0, 0.0)],
            color: Rgb([1.0, 1.0, 1.0]),
            stroke_width: 1.0,
        };
        assert!((line.length() - 3.0).abs() < 1e-6);
    }
}
