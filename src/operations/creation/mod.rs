mod random_curves;

pub use random_curves::{GeneratorParams, RandomCurves};
