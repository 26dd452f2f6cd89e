use crate::math::{Real, Vector3};

use super::{CurveDomain, ParametricCurve};

/// An axis-aligned ellipse in the plane `z = position.z`.
///
/// `P(t) = position + (a * cos(t), b * sin(t), 0)`
///
/// `a` is the x-radius and `b` the y-radius. Either may be zero (the trace
/// collapses to a segment or a point) or negative (the trace is mirrored
/// across the corresponding axis); neither case is rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse<T: Real> {
    position: Vector3<T>,
    a: T,
    b: T,
}

impl<T: Real> Ellipse<T> {
    /// Creates a new ellipse centered at `position` with semi-axes `a` and `b`.
    #[must_use]
    pub fn new(position: Vector3<T>, a: T, b: T) -> Self {
        Self { position, a, b }
    }

    /// Returns the x semi-axis.
    #[must_use]
    pub fn a(&self) -> T {
        self.a
    }

    /// Returns the y semi-axis.
    #[must_use]
    pub fn b(&self) -> T {
        self.b
    }

    /// Offset of the point at `t` from the center.
    pub(super) fn planar_offset(&self, t: T) -> Vector3<T> {
        Vector3::new(self.a * t.cos(), self.b * t.sin(), T::zero())
    }

    /// Derivative of [`Self::planar_offset`].
    pub(super) fn planar_derivative(&self, t: T) -> Vector3<T> {
        Vector3::new(-self.a * t.sin(), self.b * t.cos(), T::zero())
    }
}

impl<T: Real> ParametricCurve<T> for Ellipse<T> {
    fn position(&self) -> Vector3<T> {
        self.position
    }

    fn calculate(&self, t: T) -> Vector3<T> {
        self.position + self.planar_offset(t)
    }

    fn derivative(&self, t: T) -> Vector3<T> {
        self.planar_derivative(t)
    }

    fn domain(&self) -> CurveDomain<T> {
        CurveDomain::full_turn()
    }

    fn is_closed(&self) -> bool {
        true
    }
}
