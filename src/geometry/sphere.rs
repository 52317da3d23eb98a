use num_traits::Float;
use num_traits::cast::NumCast;
use cgmath::Vector3;

use crate::model::{FromUsize, MeshModel, TriangleModel};

pub const DEFAULT_LATITUDES: u32 = 8;
pub const DEFAULT_LONGITUDES: u32 = 13;

fn cast<V: Float, N: NumCast>(n: N) -> V {
    V::from(n).unwrap_or_else(V::nan)
}

/// Fixed-topology UV sphere: every quad of the grid gets two triangles,
/// including the zero-area ones touching the poles.
pub fn gen_sphere<M, V, I>(model: &mut M, radius: V, latitudes: u32, longitudes: u32)
    where M: TriangleModel<Vector3<V>, I>,
          V: Float,
          I: FromUsize
    {
    let pi: V = cast(std::f64::consts::PI);
    let two: V = cast(2.0);
    let delta_latitude = pi / cast::<V, _>(latitudes);
    let delta_longitude = two * pi / cast::<V, _>(longitudes);

    for i in 0..=latitudes {
        let latitude = pi / two - cast::<V, _>(i) * delta_latitude;
        let xy = radius * latitude.cos();
        let z = radius * latitude.sin();

        for j in 0..=longitudes {
            let longitude = cast::<V, _>(j) * delta_longitude;
            model.push_vertex(Vector3::new(xy * longitude.cos(), xy * longitude.sin(), z));
        }
    }

    let row = longitudes as usize + 1;
    for i in 0..latitudes as usize {
        for j in 0..longitudes as usize {
            let first = i * row + j;
            let second = first + row;

            model.push_triangle_indexes(I::from_usize(first), I::from_usize(second), I::from_usize(first + 1));
            model.push_triangle_indexes(I::from_usize(first + 1), I::from_usize(second), I::from_usize(second + 1));
        }
    }
}

pub fn sphere_gen(radius: f32, latitudes: u32, longitudes: u32) -> MeshModel<Vector3<f32>, u32> {
    let vertices = (latitudes as usize + 1) * (longitudes as usize + 1);
    let indices = 6 * latitudes as usize * longitudes as usize;
    let mut model = MeshModel::with_capacity(vertices, indices);
    gen_sphere(&mut model, radius, latitudes, longitudes);
    model
}

pub fn sphere_gen_default() -> MeshModel<Vector3<f32>, u32> {
    sphere_gen(1.0, DEFAULT_LATITUDES, DEFAULT_LONGITUDES)
}
