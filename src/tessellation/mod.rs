mod tessellate_curve;

pub use tessellate_curve::TessellateCurve;

use crate::error::{CurveError, Result};
use crate::math::{Real, Vector3};

/// Parameters controlling curve sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TessellationParams {
    /// Number of segments between consecutive samples.
    pub segments: u32,
}

impl TessellationParams {
    /// Checks that at least one segment is requested.
    ///
    /// # Errors
    ///
    /// Returns an error if `segments` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.segments == 0 {
            return Err(CurveError::InvalidInput(
                "tessellation needs at least one segment".into(),
            ));
        }
        Ok(())
    }
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self { segments: 64 }
    }
}

/// A polyline approximation of a curve.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline<T: Real> {
    /// The ordered vertices of the polyline.
    pub points: Vec<Vector3<T>>,
}

impl<T: Real> Polyline<T> {
    /// Sum of the segment lengths.
    #[must_use]
    pub fn length(&self) -> T {
        self.points
            .windows(2)
            .fold(T::zero(), |sum, pair| sum + (pair[1] - pair[0]).norm())
    }
}
