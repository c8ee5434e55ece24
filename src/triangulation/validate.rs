use crate::error::{GeometryError, Result, TriangulationError};
use crate::geometry::{Circumcircle, Triangle};
use crate::math::predicates::{distance_squared, is_finite};
use crate::math::{Point2, TOLERANCE};

/// Checks that `points` can be triangulated inside `super_triangle`.
///
/// # Errors
///
/// Returns [`TriangulationError::DegenerateSuperTriangle`] if the
/// super-triangle is collinear or not finite, [`GeometryError::NonFinite`]
/// for a point with a non-finite coordinate, and
/// [`TriangulationError::PointOutsideSuperTriangle`] for the first point
/// that is not strictly inside the super-triangle. Indices refer to the
/// order of `points`.
pub fn check_input(points: &[Point2], super_triangle: &Triangle) -> Result<()> {
    Circumcircle::try_from_vertices(&super_triangle.a, &super_triangle.b, &super_triangle.c)
        .map_err(|_| TriangulationError::DegenerateSuperTriangle)?;

    for (index, p) in points.iter().enumerate() {
        if !is_finite(p) {
            return Err(GeometryError::NonFinite { x: p.x, y: p.y }.into());
        }
        if !super_triangle.strictly_contains_point(p) {
            return Err(TriangulationError::PointOutsideSuperTriangle {
                index,
                x: p.x,
                y: p.y,
            }
            .into());
        }
    }
    Ok(())
}

/// Finds violations of the empty-circumcircle property.
///
/// Returns `(triangle_index, point_index)` for every point of `points` that
/// is not a vertex of the triangle yet lies strictly inside its
/// circumcircle, with a slack of [`TOLERANCE`] relative to the squared
/// radius. Points on the circle are not violations.
#[must_use]
pub fn delaunay_violations(triangles: &[Triangle], points: &[Point2]) -> Vec<(usize, usize)> {
    let mut violations = Vec::new();
    for (ti, t) in triangles.iter().enumerate() {
        let circle = t.circumcircle();
        let r2 = circle.radius_squared();
        let slack = TOLERANCE * r2.max(1.0);
        for (pi, p) in points.iter().enumerate() {
            if t.has_vertex(p) {
                continue;
            }
            if distance_squared(p, circle.center()) < r2 - slack {
                violations.push((ti, pi));
            }
        }
    }
    violations
}
