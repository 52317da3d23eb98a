use std::f32::consts::{FRAC_PI_2, PI};
use std::vec::Vec;

use cgmath::Vector3;

use crate::geometry::params::SphereParams;

/// Radius-independent sample of the unit sphere grid.
///
/// `theta` is the ring's elevation: +pi/2 on the north pole row, -pi/2 on the
/// south pole row. `phi` runs from 0 to 2pi inclusive along the ring, so the
/// first and last column of every row share a position (the seam).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpherePoint {
    pub theta: f32,
    pub phi: f32,
    pub sin_theta: f32,
    pub cos_theta: f32,
}

impl SpherePoint {
    pub fn position(&self, radius: f32) -> Vector3<f32> {
        let xy = radius * self.cos_theta;
        Vector3::new(xy * self.phi.cos(), xy * self.phi.sin(), radius * self.sin_theta)
    }
}

/// Row-major grid of `(stacks + 1) * (sectors + 1)` points, north pole row first.
pub fn gen_base_points(params: SphereParams) -> Vec<SpherePoint> {
    let sector_step = 2.0 * PI / params.sectors as f32;
    let stack_step = PI / params.stacks as f32;

    let mut points = Vec::with_capacity(params.vertex_count());
    for i in 0..=params.stacks {
        let theta = FRAC_PI_2 - i as f32 * stack_step;
        let (sin_theta, cos_theta) = theta.sin_cos();

        for j in 0..=params.sectors {
            let phi = j as f32 * sector_step;
            points.push(SpherePoint{theta, phi, sin_theta, cos_theta});
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn point_count() {
        for (sectors, stacks) in [(4, 2), (4, 3), (13, 8), (128, 64)] {
            let points = gen_base_points(SphereParams{sectors, stacks});
            assert_eq!(points.len(), ((sectors + 1) * (stacks + 1)) as usize);
        }
    }

    #[test]
    fn poles_on_first_and_last_row() {
        let params = SphereParams{sectors: 6, stacks: 4};
        let points = gen_base_points(params);
        let row = params.sectors as usize + 1;

        for p in &points[..row] {
            assert!((p.theta - FRAC_PI_2).abs() < EPS);
        }
        for p in &points[points.len() - row..] {
            assert!((p.theta + FRAC_PI_2).abs() < EPS);
        }
    }

    #[test]
    fn rows_share_trig_and_close_the_seam() {
        let params = SphereParams{sectors: 5, stacks: 3};
        let points = gen_base_points(params);
        for row in points.chunks(params.sectors as usize + 1) {
            let first = row[0];
            let last = row[row.len() - 1];
            assert_eq!(first.phi, 0.0);
            assert!((last.phi - 2.0 * PI).abs() < EPS);
            for p in row {
                assert_eq!(p.theta, first.theta);
                assert_eq!(p.sin_theta, first.sin_theta);
                assert_eq!(p.cos_theta, first.cos_theta);
            }
            let a = first.position(1.0);
            let b = last.position(1.0);
            assert!((a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS && (a.z - b.z).abs() < EPS);
        }
    }

    #[test]
    fn positions_lie_on_sphere() {
        let points = gen_base_points(SphereParams{sectors: 9, stacks: 7});
        for p in points {
            let v = p.position(2.5);
            let len = (v.x * v.x + v.y * v.y + v.z * v.z).sqrt();
            assert!((len - 2.5).abs() < 1e-4);
        }
    }

    #[test]
    fn north_pole_position() {
        let p = gen_base_points(SphereParams{sectors: 4, stacks: 3})[0];
        let v = p.position(1.0);
        assert!(v.x.abs() < EPS && v.y.abs() < EPS && (v.z - 1.0).abs() < EPS);
    }
}
