pub mod model;
pub mod default_model;
pub mod error;
pub mod geometry {
    pub mod params;
    pub mod base_points;
    pub mod indices;
    pub mod sphere;
}
pub mod sphere_mesh;
pub mod export;
