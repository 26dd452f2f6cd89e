mod circle;
mod ellipse;
mod helix;

use std::fmt;

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use helix::Helix;

use crate::error::Result;
use crate::math::{real, Real, Vector3};

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain<T: Real> {
    /// Start of the parameter range.
    pub t_min: T,
    /// End of the parameter range.
    pub t_max: T,
}

impl<T: Real> CurveDomain<T> {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: T, t_max: T) -> Self {
        Self { t_min, t_max }
    }

    /// One full turn, `[0, 2*pi]`.
    #[must_use]
    pub fn full_turn() -> Self {
        Self::new(T::zero(), T::two_pi())
    }

    /// The whole real line.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::new(real(f64::NEG_INFINITY), real(f64::INFINITY))
    }

    /// Whether both ends are finite.
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.t_min.is_finite() && self.t_max.is_finite()
    }
}

/// Capability shared by all parametric curves in 3D space.
///
/// Every implementation must keep `derivative` equal to the exact first
/// derivative of `calculate` with respect to the angle. Evaluation is pure
/// and never fails; non-finite angles propagate through the float math.
pub trait ParametricCurve<T: Real>: Send + Sync {
    /// The fixed reference origin of the curve.
    fn position(&self) -> Vector3<T>;

    /// Evaluates the curve at `angle` (radians).
    fn calculate(&self, angle: T) -> Vector3<T>;

    /// Evaluates `d calculate / d angle` at `angle`.
    fn derivative(&self, angle: T) -> Vector3<T>;

    /// Unit tangent at `angle`.
    ///
    /// # Errors
    ///
    /// Returns an error if the derivative vanishes at `angle`.
    fn tangent(&self, angle: T) -> Result<Vector3<T>> {
        self.derivative(angle).normalize()
    }

    /// Returns the natural parameter domain of the curve.
    fn domain(&self) -> CurveDomain<T>;

    /// Returns whether the curve is closed.
    fn is_closed(&self) -> bool;
}

/// Discriminant of [`Curve`], for reporting and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveKind {
    Ellipse,
    Circle,
    Helix,
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ellipse => "ellipse",
            Self::Circle => "circle",
            Self::Helix => "helix",
        };
        f.write_str(name)
    }
}

/// Any curve the crate knows about.
///
/// Mixed collections are plain `Vec<Curve<T>>`; each element is owned once
/// by the collection.
#[derive(Debug, Clone, PartialEq)]
pub enum Curve<T: Real> {
    /// An axis-aligned ellipse.
    Ellipse(Ellipse<T>),
    /// A circle (an ellipse with a single radius).
    Circle(Circle<T>),
    /// A helix rising along +Z.
    Helix(Helix<T>),
}

impl<T: Real> Curve<T> {
    /// Returns which variant this is.
    #[must_use]
    pub fn kind(&self) -> CurveKind {
        match self {
            Self::Ellipse(_) => CurveKind::Ellipse,
            Self::Circle(_) => CurveKind::Circle,
            Self::Helix(_) => CurveKind::Helix,
        }
    }

    /// Returns the circle payload if this is a circle.
    #[must_use]
    pub fn as_circle(&self) -> Option<&Circle<T>> {
        match self {
            Self::Circle(circle) => Some(circle),
            Self::Ellipse(_) | Self::Helix(_) => None,
        }
    }

    /// Returns the radius if this is a circle.
    #[must_use]
    pub fn circle_radius(&self) -> Option<T> {
        self.as_circle().map(Circle::radius)
    }
}

impl<T: Real> ParametricCurve<T> for Curve<T> {
    fn position(&self) -> Vector3<T> {
        match self {
            Self::Ellipse(c) => c.position(),
            Self::Circle(c) => c.position(),
            Self::Helix(c) => c.position(),
        }
    }

    fn calculate(&self, angle: T) -> Vector3<T> {
        match self {
            Self::Ellipse(c) => c.calculate(angle),
            Self::Circle(c) => c.calculate(angle),
            Self::Helix(c) => c.calculate(angle),
        }
    }

    fn derivative(&self, angle: T) -> Vector3<T> {
        match self {
            Self::Ellipse(c) => c.derivative(angle),
            Self::Circle(c) => c.derivative(angle),
            Self::Helix(c) => c.derivative(angle),
        }
    }

    fn domain(&self) -> CurveDomain<T> {
        match self {
            Self::Ellipse(c) => c.domain(),
            Self::Circle(c) => c.domain(),
            Self::Helix(c) => c.domain(),
        }
    }

    fn is_closed(&self) -> bool {
        match self {
            Self::Ellipse(c) => c.is_closed(),
            Self::Circle(c) => c.is_closed(),
            Self::Helix(c) => c.is_closed(),
        }
    }
}

impl<T: Real> From<Ellipse<T>> for Curve<T> {
    fn from(ellipse: Ellipse<T>) -> Self {
        Self::Ellipse(ellipse)
    }
}

impl<T: Real> From<Circle<T>> for Curve<T> {
    fn from(circle: Circle<T>) -> Self {
        Self::Circle(circle)
    }
}

impl<T: Real> From<Helix<T>> for Curve<T> {
    fn from(helix: Helix<T>) -> Self {
        Self::Helix(helix)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_4, TAU};

    fn mixed() -> Vec<Curve<f64>> {
        vec![
            Ellipse::new(Vector3::zeros(), 2.0, 3.0).into(),
            Circle::new(Vector3::new(1.0, 1.0, 0.0), 5.0).into(),
            Helix::circular(Vector3::zeros(), 1.0, TAU).into(),
        ]
    }

    #[test]
    fn kinds() {
        let kinds: Vec<_> = mixed().iter().map(Curve::kind).collect();
        assert_eq!(
            kinds,
            vec![CurveKind::Ellipse, CurveKind::Circle, CurveKind::Helix]
        );
        assert_eq!(CurveKind::Helix.to_string(), "helix");
    }

    #[test]
    fn only_circles_report_radius() {
        let radii: Vec<_> = mixed().iter().map(Curve::circle_radius).collect();
        assert_eq!(radii, vec![None, Some(5.0), None]);
    }

    #[test]
    fn dispatch_matches_variant() {
        let circle = Circle::new(Vector3::new(1.0, 1.0, 0.0), 5.0);
        let curve = Curve::from(circle.clone());
        assert_eq!(curve.calculate(FRAC_PI_4), circle.calculate(FRAC_PI_4));
        assert_eq!(curve.derivative(FRAC_PI_4), circle.derivative(FRAC_PI_4));
        assert_eq!(curve.position(), circle.position());
        assert_eq!(curve.domain(), circle.domain());
    }

    #[test]
    fn tangent_is_unit() {
        for curve in mixed() {
            let t = curve.tangent(0.3).unwrap();
            assert_relative_eq!(t.norm(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn closedness() {
        let closed: Vec<_> = mixed().iter().map(Curve::is_closed).collect();
        assert_eq!(closed, vec![true, true, false]);
    }

    #[test]
    fn domain_bounds() {
        assert!(CurveDomain::<f64>::full_turn().is_bounded());
        assert!(!CurveDomain::<f64>::unbounded().is_bounded());
    }
}
