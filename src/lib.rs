//! Ray-triangle intersection (Möller-Trumbore) over a small 3D vector type.

pub mod hit;
pub mod ray;
pub mod triangle;
pub mod vector;

pub use hit::{Hit, Record};
pub use ray::Ray;
pub use triangle::{ray_triangle_intersection, Triangle, EPSILON};
pub use vector::{ParseVectorError, Vector3d};
