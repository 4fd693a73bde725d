//! Wavefront OBJ export

use std::io::Write;

use crate::backends::{ExportDocument, Geometry};
use crate::error::SceneError;

/// Write every exported object as its own `o` group.
///
/// The OBJ format uses:
/// - `v x y z` for vertex positions
/// - `f i j k` for mesh triangles
/// - `l i j ...` for polylines
///
/// Indices are 1-based and global across the whole file.
pub fn write_obj<W: Write>(doc: &ExportDocument, out: &mut W) -> Result<(), SceneError> {
    writeln!(out, "# Wavefront OBJ exported by cup-scene")?;
    writeln!(out, "# Scene: {}", doc.scene)?;
    writeln!(
        out,
        "# Camera: phi={:.3} theta={:.3}",
        doc.camera.phi, doc.camera.theta
    )?;

    let mut offset: usize = 1;
    for object in &doc.objects {
        writeln!(out)?;
        writeln!(out, "o {}", object.name)?;

        match &object.geometry {
            Geometry::Mesh(mesh) => {
                for v in &mesh.vertices {
                    writeln!(out, "v {:.6} {:.6} {:.6}", v.x, v.y, v.z)?;
                }
                for [i, j, k] in &mesh.triangles {
                    writeln!(
                        out,
                        "f {} {} {}",
                        *i as usize + offset,
                        *j as usize + offset,
                        *k as usize + offset
                    )?;
                }
                offset += mesh.vertices.len();
            }
            Geometry::Lines { lines } => {
                for line in lines {
                    for p in &line.points {
                        writeln!(out, "v {:.6} {:.6} {:.6}", p.x, p.y, p.z)?;
                    }
                    let indices: Vec<String> = (offset..offset + line.points.len())
                        .map(|i| i.to_string())
                        .collect();
                    if indices.len() >= 2 {
                        writeln!(out, "l {}", indices.join(" "))?;
                    }
                    offset += line.points.len();
                }
            }
        }
    }

    Ok(())
}
