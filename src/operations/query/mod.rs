mod select_circles;

pub use select_circles::{RadiusSummary, SelectCircles};
