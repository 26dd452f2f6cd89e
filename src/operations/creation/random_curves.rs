use rand::Rng;
use tracing::debug;

use crate::error::{CurveError, Result};
use crate::geometry::{Circle, Curve, Ellipse, Helix};
use crate::math::Vector3;

/// Inclusive integer range that every random curve parameter is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorParams {
    /// Smallest value a parameter can take.
    pub min: i32,
    /// Largest value a parameter can take.
    pub max: i32,
}

impl GeneratorParams {
    /// Checks that the range is not empty.
    ///
    /// # Errors
    ///
    /// Returns an error if `min > max`.
    pub fn validate(&self) -> Result<()> {
        if self.min > self.max {
            return Err(CurveError::InvalidInput(format!(
                "generator range is empty: min {} > max {}",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self { min: 1, max: 100 }
    }
}

/// Builds a mixed collection of randomly parameterized curves.
///
/// Curves cycle ellipse, circle, helix by index. Ellipses and circles sit in
/// the `z = 0` plane; helices are circular with no phase offset.
pub struct RandomCurves {
    params: GeneratorParams,
}

impl RandomCurves {
    /// Creates a new `RandomCurves` operation.
    #[must_use]
    pub fn new(params: GeneratorParams) -> Self {
        Self { params }
    }

    /// Executes the operation, returning `count` curves.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter range is invalid.
    pub fn execute<R: Rng>(&self, rng: &mut R, count: usize) -> Result<Vec<Curve<f64>>> {
        self.params.validate()?;
        let curves: Vec<_> = (0..count).map(|i| self.make(rng, i)).collect();
        debug!(count, min = self.params.min, max = self.params.max, "generated curves");
        Ok(curves)
    }

    fn make<R: Rng>(&self, rng: &mut R, index: usize) -> Curve<f64> {
        let mut draw = || f64::from(rng.gen_range(self.params.min..=self.params.max));
        match index % 3 {
            0 => {
                let (x, y, a, b) = (draw(), draw(), draw(), draw());
                Ellipse::new(Vector3::new(x, y, 0.0), a, b).into()
            }
            1 => {
                let (x, y, r) = (draw(), draw(), draw());
                Circle::new(Vector3::new(x, y, 0.0), r).into()
            }
            _ => {
                let (x, y, z, r, step) = (draw(), draw(), draw(), draw(), draw());
                Helix::circular(Vector3::new(x, y, z), r, step).into()
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{CurveKind, ParametricCurve};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn cycles_kinds() {
        let mut rng = StdRng::seed_from_u64(7);
        let curves = RandomCurves::new(GeneratorParams::default())
            .execute(&mut rng, 7)
            .unwrap();
        let kinds: Vec<_> = curves.iter().map(Curve::kind).collect();
        assert_eq!(
            kinds,
            vec![
                CurveKind::Ellipse,
                CurveKind::Circle,
                CurveKind::Helix,
                CurveKind::Ellipse,
                CurveKind::Circle,
                CurveKind::Helix,
                CurveKind::Ellipse,
            ]
        );
    }

    #[test]
    fn parameters_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        let params = GeneratorParams { min: 3, max: 9 };
        let curves = RandomCurves::new(params).execute(&mut rng, 60).unwrap();
        let in_range = |v: f64| (3.0..=9.0).contains(&v);
        for curve in &curves {
            let p = curve.position();
            assert!(in_range(p.x()) && in_range(p.y()));
            match curve {
                Curve::Ellipse(e) => {
                    assert_eq!(p.z(), 0.0);
                    assert!(in_range(e.a()) && in_range(e.b()));
                }
                Curve::Circle(c) => {
                    assert_eq!(p.z(), 0.0);
                    assert!(in_range(c.radius()));
                }
                Curve::Helix(h) => {
                    assert!(in_range(p.z()) && in_range(h.step()));
                    assert_eq!(h.a(), h.b());
                    assert_eq!(h.angle_start(), 0.0);
                }
            }
        }
    }

    #[test]
    fn same_seed_same_curves() {
        let op = RandomCurves::new(GeneratorParams::default());
        let a = op.execute(&mut StdRng::seed_from_u64(42), 30).unwrap();
        let b = op.execute(&mut StdRng::seed_from_u64(42), 30).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn single_value_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let curves = RandomCurves::new(GeneratorParams { min: 4, max: 4 })
            .execute(&mut rng, 2)
            .unwrap();
        assert_eq!(curves[1].circle_radius(), Some(4.0));
    }

    #[test]
    fn empty_range_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = RandomCurves::new(GeneratorParams { min: 5, max: 1 })
            .execute(&mut rng, 3)
            .unwrap_err();
        assert!(matches!(err, CurveError::InvalidInput(_)));
    }

    #[test]
    fn zero_count_is_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        let curves = RandomCurves::new(GeneratorParams::default())
            .execute(&mut rng, 0)
            .unwrap();
        assert!(curves.is_empty());
    }
}
