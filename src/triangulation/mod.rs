//! Incremental Delaunay triangulation.
//!
//! Points are inserted in ascending x order. Each insertion removes the
//! triangles whose circumcircle contains the new point, then fans new
//! triangles from the point to the boundary of the removed region. Because
//! later points never lie to the left of the current one, a triangle whose
//! circumcircle ends left of the current point is final and leaves the
//! working set early.

mod boundary;
mod bowyer_watson;
mod super_triangle;
mod validate;

pub use boundary::star_boundary;
pub use bowyer_watson::BowyerWatson;
pub use super_triangle::enclosing_super_triangle;
pub use validate::{check_input, delaunay_violations};

use crate::geometry::Triangle;
use crate::math::Point2;

/// Parameters controlling a triangulation run.
#[derive(Debug, Clone, Copy)]
pub struct TriangulationParams {
    /// Retire triangles whose circumcircle lies entirely left of the
    /// current sweep position. Disabling this keeps every triangle in the
    /// working set until the end; the output is the same.
    pub early_finalization: bool,
    /// Reject degenerate super-triangles, non-finite points and points not
    /// strictly inside the super-triangle before running.
    pub validate_input: bool,
}

impl Default for TriangulationParams {
    fn default() -> Self {
        Self {
            early_finalization: true,
            validate_input: false,
        }
    }
}

/// Output of a triangulation run.
#[derive(Debug, Clone, Default)]
pub struct Triangulation {
    triangles: Vec<Triangle>,
    points_inserted: usize,
    finalized_early: usize,
}

impl Triangulation {
    /// Returns the triangles. Their order is unspecified.
    #[must_use]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Consumes the result and returns the triangles.
    #[must_use]
    pub fn into_triangles(self) -> Vec<Triangle> {
        self.triangles
    }

    /// Number of triangles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Returns `true` if no triangle was produced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Number of points inserted.
    #[must_use]
    pub fn points_inserted(&self) -> usize {
        self.points_inserted
    }

    /// Number of triangles retired by the sweep before the last insertion,
    /// including ones later purged for touching the super-triangle.
    #[must_use]
    pub fn finalized_early(&self) -> usize {
        self.finalized_early
    }

    /// Sum of the triangle areas.
    #[must_use]
    pub fn total_area(&self) -> f64 {
        self.triangles.iter().map(Triangle::area).sum()
    }
}

/// Triangulates `points`, which must all lie strictly inside
/// `super_triangle`.
///
/// No input is checked. Collinear, duplicate or out-of-bounds points give
/// degenerate triangles or non-finite circumcircles instead of an error;
/// use [`BowyerWatson`] with [`TriangulationParams::validate_input`] for a
/// checked run.
#[must_use]
pub fn triangulate(points: &[Point2], super_triangle: &Triangle) -> Vec<Triangle> {
    BowyerWatson::new(points, *super_triangle)
        .run()
        .into_triangles()
}
