use super::frame::BasisMatrix;
use crate::engine::error::NerfError;
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A point or displacement in three-dimensional space.
///
/// `Vector` is an immutable value type: every operation returns a new value and
/// leaves its inputs untouched. Serialized as a three-element array `[x, y, z]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector(Vector3<f64>);

impl Vector {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(Vector3::new(x, y, z))
    }

    pub fn zero() -> Self {
        Self(Vector3::zeros())
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.0.z
    }

    /// Returns `self - other`.
    pub fn subtract(self, other: Vector) -> Vector {
        Self(self.0 - other.0)
    }

    pub fn scale(self, factor: f64) -> Vector {
        Self(self.0 * factor)
    }

    pub fn dot(self, other: Vector) -> f64 {
        self.0.dot(&other.0)
    }

    pub fn cross(self, other: Vector) -> Vector {
        Self(self.0.cross(&other.0))
    }

    /// Euclidean length.
    pub fn norm(self) -> f64 {
        self.0.norm()
    }

    /// Scales the vector to unit length.
    ///
    /// # Errors
    ///
    /// Returns [`NerfError::DegenerateVector`] if the vector has zero (or non-finite)
    /// length and therefore no well-defined direction.
    pub fn normalize(self) -> Result<Vector, NerfError> {
        let norm = self.norm();
        if norm == 0.0 || !norm.is_finite() {
            return Err(NerfError::DegenerateVector);
        }
        Ok(Self(self.0 / norm))
    }

    /// Treats the vector as a row vector and right-multiplies it by the basis matrix.
    ///
    /// The result is `x * row0 + y * row1 + z * row2`, i.e. local frame coordinates
    /// expressed in world space.
    pub fn transform(self, basis: &BasisMatrix) -> Vector {
        Self(basis.as_matrix().transpose() * self.0)
    }

    pub fn as_vector3(&self) -> &Vector3<f64> {
        &self.0
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.0.x, self.0.y, self.0.z]
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        self.subtract(rhs)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        self.scale(rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Self(-self.0)
    }
}

impl From<Vector3<f64>> for Vector {
    fn from(v: Vector3<f64>) -> Self {
        Self(v)
    }
}

impl From<Point3<f64>> for Vector {
    fn from(p: Point3<f64>) -> Self {
        Self(p.coords)
    }
}

impl From<[f64; 3]> for Vector {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector> for Vector3<f64> {
    fn from(v: Vector) -> Self {
        v.0
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(
                f,
                "({:.*}, {:.*}, {:.*})",
                p, self.0.x, p, self.0.y, p, self.0.z
            ),
            None => write!(f, "({}, {}, {})", self.0.x, self.0.y, self.0.z),
        }
    }
}
