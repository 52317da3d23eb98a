use std::vec::Vec;

use crate::model::{FromUsize, TriangleModel};
use crate::geometry::params::SphereParams;

/// Visits the triangles stitching adjacent rings of the grid produced by
/// `gen_base_points`, as grid indices.
///
/// Each quad between ring `i` and `i + 1` becomes two counter-clockwise
/// triangles (seen from outside), except on the pole rings where the half of
/// the quad touching the pole would have zero area and is left out.
pub fn for_each_sphere_triangle<F>(params: SphereParams, mut f: F)
    where F: FnMut(usize, usize, usize)
    {
    let row = params.sectors as usize + 1;
    for i in 0..params.stacks as usize {
        let mut k1 = i * row;
        let mut k2 = k1 + row;

        for _ in 0..params.sectors {
            if i != 0 {
                f(k1, k2, k1 + 1);
            }
            if i != params.stacks as usize - 1 {
                f(k1 + 1, k2, k2 + 1);
            }
            k1 += 1;
            k2 += 1;
        }
    }
}

/// Appends the sphere's triangles to `model`.
///
/// Indices reach `params.vertex_count() - 1`, so a `u16` index type only
/// holds grids of up to 65536 vertices; larger grids trip the range check
/// of `FromUsize` in debug builds.
pub fn push_sphere_indices<M, V, I>(model: &mut M, params: SphereParams)
    where M: TriangleModel<V, I>,
          I: FromUsize
    {
    for_each_sphere_triangle(params, |a, b, c| {
        model.push_triangle_indexes(I::from_usize(a), I::from_usize(b), I::from_usize(c));
    });
}

pub fn gen_sphere_indices(params: SphereParams) -> Vec<u32> {
    let mut indices = Vec::with_capacity(params.index_count());
    for_each_sphere_triangle(params, |a, b, c| {
        indices.extend([a, b, c].map(u32::from_usize));
    });
    indices
}
