use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use cgmath::Vector3;

use crate::error::SphereError;
use crate::model::{FromUsize, MeshModel};

/// Writes positions and faces as Wavefront OBJ (1-based face indices).
pub fn write_obj<W, I>(out: &mut W, model: &MeshModel<Vector3<f32>, I>) -> Result<(), SphereError>
    where W: Write,
          I: FromUsize
    {
    writeln!(out, "# vertices={} triangles={}", model.vertices.len(), model.triangle_num())?;
    for v in &model.vertices {
        writeln!(out, "v {} {} {}", v.x, v.y, v.z)?;
    }
    for face in model.indices.chunks_exact(3) {
        writeln!(out, "f {} {} {}", face[0].to_usize() + 1, face[1].to_usize() + 1, face[2].to_usize() + 1)?;
    }
    Ok(())
}

pub fn save_obj<I: FromUsize>(path: &Path, model: &MeshModel<Vector3<f32>, I>) -> Result<(), SphereError> {
    let mut out = BufWriter::new(File::create(path)?);
    write_obj(&mut out, model)?;
    out.flush()?;
    log::debug!("OBJ written - path={:?}, vertices={:?}, triangles={:?}"
                , path, model.vertices.len(), model.triangle_num());
    Ok(())
}
