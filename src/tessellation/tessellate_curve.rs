use tracing::trace;

use crate::error::Result;
use crate::geometry::{CurveDomain, ParametricCurve};
use crate::math::{real, Real};

use super::{Polyline, TessellationParams};

/// Samples a curve at evenly spaced parameters into a polyline.
///
/// Bounded curves are sampled over their whole domain. Unbounded ones
/// (a rising helix) are sampled over one turn starting at `t = 0`.
pub struct TessellateCurve {
    params: TessellationParams,
}

impl TessellateCurve {
    /// Creates a new `TessellateCurve` operation.
    #[must_use]
    pub fn new(params: TessellationParams) -> Self {
        Self { params }
    }

    /// Executes the tessellation, returning `segments + 1` points.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid.
    pub fn execute<T: Real, C: ParametricCurve<T> + ?Sized>(
        &self,
        curve: &C,
    ) -> Result<Polyline<T>> {
        self.params.validate()?;

        let domain = curve.domain();
        let domain = if domain.is_bounded() {
            domain
        } else {
            CurveDomain::full_turn()
        };

        let segments = self.params.segments;
        let span = domain.t_max - domain.t_min;
        let count: T = real(f64::from(segments));
        let points = (0..=segments)
            .map(|i| {
                let t = domain.t_min + span * real::<T>(f64::from(i)) / count;
                curve.calculate(t)
            })
            .collect();
        trace!(segments, "tessellated curve");
        Ok(Polyline { points })
    }
}
