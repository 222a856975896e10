use crate::Vector3d;

/// A half-line starting at `origin`. `direction` need not be normalized, so
/// ray parameters are measured in multiples of its length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vector3d,
    pub direction: Vector3d,
}

impl Ray {
    pub fn new(origin: Vector3d, direction: Vector3d) -> Self {
        Self { origin, direction }
    }

    /// Ray from `origin` passing through `target` at `t = 1`.
    pub fn through(origin: Vector3d, target: Vector3d) -> Self {
        Self::new(origin, target - origin)
    }

    pub fn at(&self, t: f64) -> Vector3d {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vector3d::new(1.0, 0.0, 0.0), Vector3d::new(0.0, 2.0, 0.0));
        assert_eq!(ray.at(0.0), ray.origin);
        assert_eq!(ray.at(2.5), Vector3d::new(1.0, 5.0, 0.0));
        assert_eq!(ray.at(-1.0), Vector3d::new(1.0, -2.0, 0.0));
    }

    #[test]
    fn test_ray_through() {
        let origin = Vector3d::new(5.0, 10.0, -10.0);
        let target = Vector3d::new(10.0, 10.0, 10.0);
        let ray = Ray::through(origin, target);
        assert_eq!(ray.direction, Vector3d::new(5.0, 0.0, 20.0));
        assert_eq!(ray.at(1.0), target);
    }
}
