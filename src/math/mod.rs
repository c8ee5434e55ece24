pub mod predicates;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// Global geometric tolerance for floating-point comparisons.
///
/// Only the checked code paths consult it; the triangulation core itself
/// compares coordinates exactly.
pub const TOLERANCE: f64 = 1e-10;
