use cgmath::Vector3;

use crate::default_model::SphereModel;
use crate::model::{MeshModel, VertexModel};
use crate::geometry::params::{SphereParams, find_parameters};
use crate::geometry::base_points::{SpherePoint, gen_base_points};
use crate::geometry::indices::push_sphere_indices;

/// Radius changes smaller than this keep the current vertices.
pub const RADIUS_EPSILON: f32 = 1e-6;

/// UV sphere with a fixed topology and a mutable radius.
///
/// Base points and indices are built once; [`SphereMesh::change_radius`] only
/// rescales the cached base points into `vertices`. The slices handed out by
/// the accessors borrow the mesh, so they cannot observe a half-updated state.
#[derive(Debug, Clone)]
pub struct SphereMesh {
    params: SphereParams,
    base_points: Vec<SpherePoint>,
    model: SphereModel,
    radius: f32,
}

impl SphereMesh {
    /// Searches for a topology close to `target_vertices` points.
    pub fn new(target_vertices: u32, radius: f32) -> Self {
        Self::with_params(find_parameters(target_vertices), radius)
    }

    pub fn with_params(params: SphereParams, radius: f32) -> Self {
        let base_points = gen_base_points(params);
        let mut model: SphereModel = MeshModel::with_capacity(base_points.len(), params.index_count());
        push_sphere_indices(&mut model, params);

        let mut mesh = Self{params, base_points, model, radius};
        mesh.update_vertices();
        mesh
    }

    /// Returns `true` if the vertices were recomputed.
    pub fn change_radius(&mut self, new_radius: f32) -> bool {
        if (self.radius - new_radius).abs() < RADIUS_EPSILON {
            log::trace!("Sphere radius unchanged - radius={:?}, requested={:?}", self.radius, new_radius);
            return false;
        }
        self.radius = new_radius;
        self.update_vertices();
        true
    }

    fn update_vertices(&mut self) {
        self.model.clear_vertices();
        for point in &self.base_points {
            self.model.push_vertex(point.position(self.radius));
        }
        log::debug!("Sphere vertices rebuilt - radius={:?}, vertices={:?}"
                    , self.radius, self.model.vertices.len());
    }

    pub fn vertices(&self) -> &[Vector3<f32>] {
        &self.model.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.model.indices
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn params(&self) -> SphereParams {
        self.params
    }

    pub fn base_points(&self) -> &[SpherePoint] {
        &self.base_points
    }

    pub fn model(&self) -> &SphereModel {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_scaled(base: &[Vector3<f32>], scaled: &[Vector3<f32>], k: f32) {
        assert_eq!(base.len(), scaled.len());
        for (a, b) in base.iter().zip(scaled) {
            for (x, y) in [(a.x, b.x), (a.y, b.y), (a.z, b.z)] {
                let expected = x * k;
                assert!((expected - y).abs() <= 1e-4 * expected.abs().max(1e-3), "{} * {} != {}", x, k, y);
            }
        }
    }

    #[test]
    fn construction_populates_vertices() {
        let mesh = SphereMesh::new(100, 1.0);
        let params = mesh.params();
        assert_eq!(mesh.vertices().len(), params.vertex_count());
        assert_eq!(mesh.indices().len(), params.index_count());
        assert_eq!(mesh.base_points().len(), params.vertex_count());
        assert_eq!(mesh.radius(), 1.0);
    }

    #[test]
    fn smallest_target_scenario() {
        let mesh = SphereMesh::new(12, 1.0);
        let params = mesh.params();
        assert_eq!(params, SphereParams{sectors: 4, stacks: 3});
        assert_eq!(mesh.vertices().len(), ((params.sectors + 1) * (params.stacks + 1)) as usize);

        let top = mesh.vertices().iter()
            .copied()
            .fold(Vector3::new(0.0f32, 0.0, f32::MIN), |best, v| if v.z > best.z { v } else { best });
        assert!(top.x.abs() < 1e-5);
        assert!(top.y.abs() < 1e-5);
        assert!((top.z - 1.0).abs() < 1e-5);
    }

    #[test]
    fn change_radius_is_idempotent() {
        let mut once = SphereMesh::new(200, 1.0);
        assert!(once.change_radius(3.0));

        let mut twice = SphereMesh::new(200, 1.0);
        assert!(twice.change_radius(3.0));
        assert!(!twice.change_radius(3.0));

        assert_eq!(once.vertices(), twice.vertices());
        assert_eq!(twice.radius(), 3.0);
    }

    #[test]
    fn vertices_scale_with_radius() {
        let mut mesh = SphereMesh::new(300, 1.5);
        let base = mesh.vertices().to_vec();
        mesh.change_radius(3.75);
        assert_scaled(&base, mesh.vertices(), 2.5);
        mesh.change_radius(0.15);
        assert_scaled(&base, mesh.vertices(), 0.1);
    }

    #[test]
    fn tiny_change_is_ignored() {
        let mut mesh = SphereMesh::new(64, 0.5);
        let before = mesh.vertices().to_vec();
        assert!(!mesh.change_radius(0.5 + 1e-7));
        assert_eq!(mesh.radius(), 0.5);
        for (a, b) in before.iter().zip(mesh.vertices()) {
            assert_eq!(a.x.to_bits(), b.x.to_bits());
            assert_eq!(a.y.to_bits(), b.y.to_bits());
            assert_eq!(a.z.to_bits(), b.z.to_bits());
        }
    }

    #[test]
    fn topology_survives_radius_changes() {
        let mut mesh = SphereMesh::new(500, 1.0);
        let indices = mesh.indices().to_vec();
        let points = mesh.base_points().to_vec();
        mesh.change_radius(7.0);
        mesh.change_radius(-2.0);
        assert_eq!(mesh.indices(), indices.as_slice());
        assert_eq!(mesh.base_points(), points.as_slice());
    }

    #[test]
    fn negative_radius_mirrors() {
        let mut mesh = SphereMesh::with_params(SphereParams{sectors: 8, stacks: 6}, 1.0);
        let base = mesh.vertices().to_vec();
        assert!(mesh.change_radius(-1.0));
        assert_scaled(&base, mesh.vertices(), -1.0);
    }

    #[test]
    fn nan_radius_propagates() {
        let mut mesh = SphereMesh::with_params(SphereParams::MINIMAL, 1.0);
        assert!(mesh.change_radius(f32::NAN));
        assert!(mesh.vertices().iter().all(|v| v.z.is_nan()));
    }
}
