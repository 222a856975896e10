use core::cmp::Ordering;

use crate::{
    hit::{Hit, Record},
    Ray, Vector3d,
};

/// Determinants below this magnitude are treated as a ray parallel to the
/// triangle's plane, and hits closer than this to the origin are dropped.
pub const EPSILON: f64 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub v1: Vector3d,
    pub v2: Vector3d,
    pub v3: Vector3d,
}

impl Triangle {
    pub fn new(v1: Vector3d, v2: Vector3d, v3: Vector3d) -> Self {
        Self { v1, v2, v3 }
    }

    /// Unnormalized normal, counter-clockwise winding. Zero for degenerate
    /// triangles.
    pub fn normal(&self) -> Vector3d {
        (self.v2 - self.v1).cross(&(self.v3 - self.v1))
    }
}

/// Möller-Trumbore, without back-face culling. Points on an edge or vertex
/// count as hits.
impl Hit for Triangle {
    fn hit(&self, ray: Ray) -> Option<Record> {
        let e1 = self.v2 - self.v1;
        let e2 = self.v3 - self.v1;

        let p = ray.direction.cross(&e2);
        let det = e1.dot(&p);

        // parallel to the plane, or zero area
        if det.abs() < EPSILON {
            return None;
        }
        let inv_det = 1.0 / det;

        let s = ray.origin - self.v1;
        let u = s.dot(&p) * inv_det;
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(&e1);
        let v = ray.direction.dot(&q) * inv_det;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = e2.dot(&q) * inv_det;
        // also rejects a NaN t from overflowing inputs
        if t.partial_cmp(&EPSILON) != Some(Ordering::Greater) {
            return None;
        }

        Some(Record {
            point: ray.at(t),
            t,
            u,
            v,
            front: det > 0.0,
        })
    }
}

/// Intersection point of the ray `origin + t * direction` (`t > EPSILON`)
/// with triangle `v1 v2 v3`, if any.
pub fn ray_triangle_intersection(
    v1: Vector3d,
    v2: Vector3d,
    v3: Vector3d,
    origin: Vector3d,
    direction: Vector3d,
) -> Option<Vector3d> {
    Triangle::new(v1, v2, v3)
        .hit(Ray::new(origin, direction))
        .map(|record| record.point)
}
