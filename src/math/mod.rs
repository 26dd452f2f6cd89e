use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use nalgebra::RealField;

use crate::error::{CurveError, Result};

/// Scalar type accepted by every curve in the crate.
///
/// Any `nalgebra` real field that is also `Copy` qualifies, so both `f32`
/// and `f64` work.
pub trait Real: RealField + Copy {}

impl<T: RealField + Copy> Real for T {}

/// Tolerance used when deciding that a vector has zero length.
pub const TOLERANCE: f64 = 1e-10;

/// Converts an `f64` constant into the scalar type `T`.
#[must_use]
pub fn real<T: Real>(value: f64) -> T {
    nalgebra::convert(value)
}

/// Converts a scalar to `f64`, or NaN if `T` has no `f64` representation.
#[must_use]
pub fn to_f64<T: Real>(value: T) -> f64 {
    nalgebra::try_convert(value).unwrap_or(f64::NAN)
}

/// An immutable triple of scalars, used both as a point and as a direction.
///
/// Two vectors with equal components are interchangeable. The `Display`
/// impl renders `{x,y,z}` with two decimal places.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector3<T: Real> {
    inner: nalgebra::Vector3<T>,
}

impl<T: Real> Vector3<T> {
    /// Creates a vector from its three components.
    #[must_use]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self {
            inner: nalgebra::Vector3::new(x, y, z),
        }
    }

    /// The zero vector (the origin, when used as a point).
    #[must_use]
    pub fn zeros() -> Self {
        Self {
            inner: nalgebra::Vector3::zeros(),
        }
    }

    #[must_use]
    pub fn x(&self) -> T {
        self.inner.x
    }

    #[must_use]
    pub fn y(&self) -> T {
        self.inner.y
    }

    #[must_use]
    pub fn z(&self) -> T {
        self.inner.z
    }

    /// Euclidean length.
    #[must_use]
    pub fn norm(&self) -> T {
        self.inner.norm()
    }

    #[must_use]
    pub fn dot(&self, other: &Self) -> T {
        self.inner.dot(&other.inner)
    }

    /// Returns the unit vector pointing the same way.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::ZeroVector`] if the length is below [`TOLERANCE`].
    pub fn normalize(&self) -> Result<Self> {
        let len = self.norm();
        if len < real(TOLERANCE) {
            return Err(CurveError::ZeroVector);
        }
        Ok(*self / len)
    }
}

impl<T: Real> From<nalgebra::Vector3<T>> for Vector3<T> {
    fn from(inner: nalgebra::Vector3<T>) -> Self {
        Self { inner }
    }
}

impl<T: Real> Add for Vector3<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from(self.inner + rhs.inner)
    }
}

impl<T: Real> Sub for Vector3<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from(self.inner - rhs.inner)
    }
}

impl<T: Real> Neg for Vector3<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from(-self.inner)
    }
}

impl<T: Real> Mul<T> for Vector3<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self::from(self.inner * rhs)
    }
}

impl<T: Real> Div<T> for Vector3<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        Self::from(self.inner / rhs)
    }
}

impl<T: Real> fmt::Display for Vector3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{:.2},{:.2},{:.2}}}", self.x(), self.y(), self.z())
    }
}
