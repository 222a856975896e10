use core::{
    fmt,
    ops::{Add, Mul, Neg, Sub},
    str::FromStr,
};

use nalgebra::Vector3;

/// A point or direction in 3D space.
///
/// Every operation returns a new value; operands are never modified.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3d(Vector3<f64>);

impl Vector3d {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(Vector3::new(x, y, z))
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    pub fn z(&self) -> f64 {
        self.0.z
    }

    pub fn scale(&self, c: f64) -> Self {
        Self(self.0 * c)
    }

    pub fn dot(&self, other: &Self) -> f64 {
        self.0.dot(&other.0)
    }

    /// Right-handed cross product.
    pub fn cross(&self, other: &Self) -> Self {
        Self(self.0.cross(&other.0))
    }
}

impl Add for Vector3d {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Vector3d {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul<f64> for Vector3d {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl Mul<Vector3d> for f64 {
    type Output = Vector3d;

    fn mul(self, rhs: Vector3d) -> Vector3d {
        rhs.scale(self)
    }
}

impl Neg for Vector3d {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl From<Vector3<f64>> for Vector3d {
    fn from(v: Vector3<f64>) -> Self {
        Self(v)
    }
}

impl From<Vector3d> for Vector3<f64> {
    fn from(v: Vector3d) -> Self {
        v.0
    }
}

impl fmt::Display for Vector3d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.x(), self.y(), self.z())
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ParseVectorError {
    #[error("expected 3 comma separated components, found {0}")]
    Components(usize),
    #[error("invalid component {0:?}: {1}")]
    Number(String, core::num::ParseFloatError),
}

/// Parses `x,y,z`. Whitespace around each component is ignored.
impl FromStr for Vector3d {
    type Err = ParseVectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s.split(',').map(str::trim).collect::<Vec<_>>();
        let [x, y, z] = parts[..] else {
            return Err(ParseVectorError::Components(parts.len()));
        };
        let parse = |c: &str| {
            c.parse::<f64>()
                .map_err(|e| ParseVectorError::Number(c.to_string(), e))
        };
        Ok(Self::new(parse(x)?, parse(y)?, parse(z)?))
    }
}
