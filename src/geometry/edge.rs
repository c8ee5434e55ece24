use crate::math::predicates::distance_squared;
use crate::math::Point2;

/// An undirected segment between two points.
///
/// Equality ignores endpoint order and compares coordinates exactly, so two
/// edges whose endpoints are merely close are distinct.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    /// First endpoint.
    pub a: Point2,
    /// Second endpoint.
    pub b: Point2,
}

impl Edge {
    /// Creates a new edge.
    #[must_use]
    pub fn new(a: Point2, b: Point2) -> Self {
        Self { a, b }
    }

    /// Returns the same segment with its endpoints swapped.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.b, self.a)
    }

    /// Returns the Euclidean length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        distance_squared(&self.a, &self.b).sqrt()
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}
