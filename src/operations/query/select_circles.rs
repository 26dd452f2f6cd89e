use std::cmp::Ordering;

use tracing::debug;

use crate::geometry::{Circle, Curve};
use crate::math::Real;

/// Picks the circles out of a mixed collection, ordered by radius.
///
/// The result borrows from the collection; no curve is copied.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectCircles;

impl SelectCircles {
    /// Creates a new `SelectCircles` query.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the query, returning every circle sorted by ascending radius.
    ///
    /// The sort is stable, so circles of equal radius keep their collection
    /// order. NaN radii sort after every other radius.
    #[must_use]
    pub fn execute<'a, T: Real>(&self, curves: &'a [Curve<T>]) -> Vec<&'a Circle<T>> {
        let mut circles: Vec<_> = curves.iter().filter_map(Curve::as_circle).collect();
        circles.sort_by(|a, b| radius_order(a.radius(), b.radius()));
        debug!(total = curves.len(), circles = circles.len(), "selected circles");
        circles
    }
}

/// Total order on radii with NaN placed last.
fn radius_order<T: Real>(a: T, b: T) -> Ordering {
    match (is_nan(a), is_nan(b)) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

fn is_nan<T: Real>(value: T) -> bool {
    value.partial_cmp(&value).is_none()
}

/// Radius statistics over a set of circles sorted by [`SelectCircles`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusSummary<T: Real> {
    /// Number of circles.
    pub count: usize,
    /// Radius of the first circle (the smallest).
    pub first: T,
    /// Radius of the last circle (the largest).
    pub last: T,
    /// Sum of all radii.
    pub total: T,
}

impl<T: Real> RadiusSummary<T> {
    /// Summarizes circles already sorted by radius.
    ///
    /// Returns `None` for an empty slice.
    #[must_use]
    pub fn from_circles(circles: &[&Circle<T>]) -> Option<Self> {
        let first = circles.first()?.radius();
        let last = circles.last()?.radius();
        let total = circles
            .iter()
            .fold(T::zero(), |sum, circle| sum + circle.radius());
        Some(Self {
            count: circles.len(),
            first,
            last,
            total,
        })
    }
}
