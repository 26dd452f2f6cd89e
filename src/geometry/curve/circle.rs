use crate::error::{CurveError, Result};
use crate::math::{to_f64, Real, Vector3};

use super::{CurveDomain, Ellipse, ParametricCurve};

/// A circle in the plane `z = position.z`: an ellipse whose two semi-axes
/// are the same `radius`.
///
/// Only one radius is stored, so `a == b` holds for every instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle<T: Real> {
    position: Vector3<T>,
    radius: T,
}

impl<T: Real> Circle<T> {
    /// Creates a new circle centered at `position`.
    #[must_use]
    pub fn new(position: Vector3<T>, radius: T) -> Self {
        Self { position, radius }
    }

    /// Returns the radius.
    #[must_use]
    pub fn radius(&self) -> T {
        self.radius
    }

    /// The x semi-axis of the equivalent ellipse (always the radius).
    #[must_use]
    pub fn a(&self) -> T {
        self.radius
    }

    /// The y semi-axis of the equivalent ellipse (always the radius).
    #[must_use]
    pub fn b(&self) -> T {
        self.radius
    }

    /// Returns the ellipse this circle is evaluated as.
    #[must_use]
    pub fn as_ellipse(&self) -> Ellipse<T> {
        Ellipse::new(self.position, self.radius, self.radius)
    }
}

impl<T: Real> TryFrom<Ellipse<T>> for Circle<T> {
    type Error = CurveError;

    fn try_from(ellipse: Ellipse<T>) -> Result<Self> {
        if ellipse.a() != ellipse.b() {
            return Err(CurveError::UnequalRadii {
                a: to_f64(ellipse.a()),
                b: to_f64(ellipse.b()),
            });
        }
        Ok(Self::new(ellipse.position(), ellipse.a()))
    }
}

impl<T: Real> ParametricCurve<T> for Circle<T> {
    fn position(&self) -> Vector3<T> {
        self.position
    }

    fn calculate(&self, t: T) -> Vector3<T> {
        self.as_ellipse().calculate(t)
    }

    fn derivative(&self, t: T) -> Vector3<T> {
        self.as_ellipse().derivative(t)
    }

    fn domain(&self) -> CurveDomain<T> {
        CurveDomain::full_turn()
    }

    fn is_closed(&self) -> bool {
        true
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn evaluate_at_pi_over_2() {
        let c = Circle::new(Vector3::zeros(), 5.0);
        let p = c.calculate(FRAC_PI_2);
        assert!((p - Vector3::new(0.0, 5.0, 0.0)).norm() < 1e-9);
        let d = c.derivative(FRAC_PI_2);
        assert!((d - Vector3::new(-5.0, 0.0, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn points_on_circle() {
        let c = Circle::new(Vector3::zeros(), 1.0);
        for i in 0..8 {
            let t = f64::from(i) * PI / 4.0;
            let p = c.calculate(t);
            assert_relative_eq!(p.norm(), 1.0, epsilon = 1e-10);
            assert!(p.z().abs() < 1e-10, "Point not in XY plane");
        }
    }

    #[test]
    fn tangent_perpendicular_to_radius() {
        let c = Circle::new(Vector3::zeros(), 2.0);
        for i in 0..8 {
            let t = f64::from(i) * PI / 4.0;
            let dot = c.calculate(t).dot(&c.derivative(t));
            assert!(dot.abs() < 1e-10, "Tangent not perpendicular at t={t}: dot={dot}");
        }
    }

    #[test]
    fn offset_center() {
        let c = Circle::new(Vector3::new(1.0, 2.0, 3.0), 1.0);
        let p = c.calculate(0.0);
        assert!((p - Vector3::new(2.0, 2.0, 3.0)).norm() < 1e-12);
    }

    #[test]
    fn radii_are_equal() {
        let c = Circle::new(Vector3::zeros(), -4.5);
        assert_eq!(c.a(), c.b());
        assert_eq!(c.as_ellipse().a(), c.as_ellipse().b());
    }

    #[test]
    fn matches_equivalent_ellipse() {
        let c = Circle::new(Vector3::new(-1.0, 0.5, 2.0), 3.0);
        let e = Ellipse::new(Vector3::new(-1.0, 0.5, 2.0), 3.0, 3.0);
        for t in [-7.0, -1.0, 0.0, 0.3, 2.0, 13.0] {
            assert_eq!(c.calculate(t), e.calculate(t));
            assert_eq!(c.derivative(t), e.derivative(t));
        }
    }

    #[test]
    fn from_round_ellipse() {
        let e = Ellipse::new(Vector3::new(1.0, 1.0, 1.0), 2.0, 2.0);
        let c = Circle::try_from(e).unwrap();
        assert_eq!(c.radius(), 2.0);
        assert_eq!(c.position(), Vector3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn from_oval_ellipse_fails() {
        let e = Ellipse::new(Vector3::zeros(), 2.0, 3.0);
        let err = Circle::try_from(e).unwrap_err();
        assert!(matches!(err, CurveError::UnequalRadii { a, b } if a == 2.0 && b == 3.0));
        assert_eq!(err.to_string(), "circle requires equal radii, got a = 2, b = 3");
    }

    #[test]
    fn from_oval_f32_ellipse_reports_radii() {
        let e = Ellipse::new(Vector3::<f32>::zeros(), 1.5, -0.5);
        match Circle::try_from(e) {
            Err(CurveError::UnequalRadii { a, b }) => {
                assert_relative_eq!(a, 1.5);
                assert_relative_eq!(b, -0.5);
            }
            other => panic!("expected UnequalRadii, got {other:?}"),
        }
    }

    #[test]
    fn zero_radius_has_no_tangent() {
        let c = Circle::new(Vector3::zeros(), 0.0);
        assert!(c.tangent(0.5).is_err());
    }
}
