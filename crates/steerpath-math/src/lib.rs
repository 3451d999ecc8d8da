pub mod aabb;
pub mod vector;

pub use glam::{DVec2, DVec3};
pub use aabb::Bounds;
pub use vector::VectorSpace;

pub type Point3 = DVec3;
