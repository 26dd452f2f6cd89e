use thiserror::Error;

/// Top-level error type for curve construction and the operations built on it.
///
/// Curve evaluation itself never fails; these cover conversions, unit tangents
/// and parameter validation.
#[derive(Debug, Error)]
pub enum CurveError {
    #[error("zero-length vector")]
    ZeroVector,

    #[error("circle requires equal radii, got a = {a}, b = {b}")]
    UnequalRadii { a: f64, b: f64 },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`CurveError`].
pub type Result<T> = std::result::Result<T, CurveError>;
