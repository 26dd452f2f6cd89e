use crate::math::{Real, Vector3};

use super::{CurveDomain, Ellipse, ParametricCurve};

/// A helix around the vertical axis through `position`.
///
/// The planar part traces the ellipse with semi-axes `a`, `b`; the height
/// advances by `step` per full turn:
///
/// `P(t) = position + (a * cos(t), b * sin(t), (angle_start + t) / (2*pi) * step)`
///
/// `angle_start` shifts only the height, never the planar position, so the
/// vertical rate `step / (2*pi)` is the same at every `t`.
#[derive(Debug, Clone, PartialEq)]
pub struct Helix<T: Real> {
    base: Ellipse<T>,
    step: T,
    angle_start: T,
}

impl<T: Real> Helix<T> {
    /// Creates a new helix.
    ///
    /// # Arguments
    ///
    /// * `position` - Center of the starting plane
    /// * `a` - x semi-axis of the planar trace
    /// * `b` - y semi-axis of the planar trace
    /// * `step` - Height gained per full `2*pi` turn (the pitch)
    /// * `angle_start` - Phase in radians added to `t` for the height only
    #[must_use]
    pub fn new(position: Vector3<T>, a: T, b: T, step: T, angle_start: T) -> Self {
        Self {
            base: Ellipse::new(position, a, b),
            step,
            angle_start,
        }
    }

    /// Creates a circular helix of `radius` with no phase offset.
    #[must_use]
    pub fn circular(position: Vector3<T>, radius: T, step: T) -> Self {
        Self::new(position, radius, radius, step, T::zero())
    }

    /// Returns the x semi-axis.
    #[must_use]
    pub fn a(&self) -> T {
        self.base.a()
    }

    /// Returns the y semi-axis.
    #[must_use]
    pub fn b(&self) -> T {
        self.base.b()
    }

    /// Returns the pitch.
    #[must_use]
    pub fn step(&self) -> T {
        self.step
    }

    /// Returns the phase offset of the height.
    #[must_use]
    pub fn angle_start(&self) -> T {
        self.angle_start
    }

    /// Height gained per radian of `t`.
    #[must_use]
    pub fn rise_per_radian(&self) -> T {
        self.step / T::two_pi()
    }
}

impl<T: Real> ParametricCurve<T> for Helix<T> {
    fn position(&self) -> Vector3<T> {
        self.base.position()
    }

    fn calculate(&self, t: T) -> Vector3<T> {
        let rise = (self.angle_start + t) * self.rise_per_radian();
        self.base.calculate(t) + Vector3::new(T::zero(), T::zero(), rise)
    }

    fn derivative(&self, t: T) -> Vector3<T> {
        self.base.planar_derivative(t) + Vector3::new(T::zero(), T::zero(), self.rise_per_radian())
    }

    fn domain(&self) -> CurveDomain<T> {
        CurveDomain::unbounded()
    }

    fn is_closed(&self) -> bool {
        self.step == T::zero()
    }
}
