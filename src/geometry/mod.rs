pub mod curve;

pub use curve::{Circle, Curve, CurveDomain, CurveKind, Ellipse, Helix, ParametricCurve};
