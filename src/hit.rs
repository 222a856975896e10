use crate::{Ray, Vector3d};

pub trait Hit {
    fn hit(&self, ray: Ray) -> Option<Record>;
}

/// Where a ray met a surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Record {
    pub point: Vector3d,
    pub t: f64,
    /// Barycentric weight of the second vertex.
    pub u: f64,
    /// Barycentric weight of the third vertex.
    pub v: f64,
    /// The ray arrived against the surface normal.
    pub front: bool,
}
