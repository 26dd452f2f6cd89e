//! Parametric curves in 3D space: ellipses, circles and helices evaluated
//! together with their analytic derivatives.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod tessellation;

pub use error::{CurveError, Result};
pub use geometry::{Circle, Curve, CurveKind, Ellipse, Helix, ParametricCurve};
pub use math::{Real, Vector3};
