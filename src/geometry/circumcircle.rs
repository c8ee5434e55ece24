use crate::error::{GeometryError, Result};
use crate::math::predicates::{distance_squared, is_finite, longest_edge_squared, orient_2d};
use crate::math::{Point2, TOLERANCE};

/// The circle passing through the three vertices of a triangle.
///
/// The squared radius is stored alongside the radius so that containment
/// tests never take a square root.
#[derive(Debug, Clone, Copy)]
pub struct Circumcircle {
    center: Point2,
    radius: f64,
    radius_squared: f64,
}

impl Circumcircle {
    /// Computes the circumcircle of `(a, b, c)` from the closed-form
    /// intersection of the perpendicular bisectors.
    ///
    /// The vertices must not be collinear. No check is made: for collinear
    /// input the center and radius come out as NaN or infinite, and every
    /// later containment query on the circle inherits that.
    #[must_use]
    pub fn from_vertices(a: &Point2, b: &Point2, c: &Point2) -> Self {
        let a2 = a.x * a.x + a.y * a.y;
        let b2 = b.x * b.x + b.y * b.y;
        let c2 = c.x * c.x + c.y * c.y;

        let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
        let center = Point2::new(
            (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d,
            (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d,
        );

        let radius_squared = distance_squared(a, &center);
        Self {
            center,
            radius: radius_squared.sqrt(),
            radius_squared,
        }
    }

    /// Checked variant of [`Circumcircle::from_vertices`].
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonFinite`] if a vertex has a non-finite
    /// coordinate, and [`GeometryError::Degenerate`] if the vertices are
    /// collinear within [`TOLERANCE`] relative to the longest edge.
    pub fn try_from_vertices(a: &Point2, b: &Point2, c: &Point2) -> Result<Self> {
        for p in [a, b, c] {
            if !is_finite(p) {
                return Err(GeometryError::NonFinite { x: p.x, y: p.y }.into());
            }
        }

        let scale = longest_edge_squared(a, b, c);
        if scale < TOLERANCE * TOLERANCE || orient_2d(a, b, c).abs() <= TOLERANCE * scale {
            return Err(GeometryError::Degenerate(format!(
                "collinear vertices ({}, {}), ({}, {}), ({}, {})",
                a.x, a.y, b.x, b.y, c.x, c.y
            ))
            .into());
        }

        let circle = Self::from_vertices(a, b, c);
        if !is_finite(&circle.center) || !circle.radius.is_finite() {
            return Err(GeometryError::Degenerate("circumcircle is unbounded".into()).into());
        }
        Ok(circle)
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the squared radius of the circle.
    #[must_use]
    pub fn radius_squared(&self) -> f64 {
        self.radius_squared
    }

    /// Largest x-coordinate reached by the circle.
    #[must_use]
    pub fn right_extent(&self) -> f64 {
        self.center.x + self.radius
    }

    /// Returns `true` if `p` lies inside or on the circle.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        distance_squared(p, &self.center) <= self.radius_squared
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::BowyerError;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn right_triangle_center_at_hypotenuse_midpoint() {
        let c = Circumcircle::from_vertices(&p(0.0, 0.0), &p(4.0, 0.0), &p(0.0, 3.0));
        assert_relative_eq!(c.center().x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(c.center().y, 1.5, epsilon = 1e-12);
        assert_relative_eq!(c.radius(), 2.5, epsilon = 1e-12);
        assert_relative_eq!(c.radius_squared(), 6.25, epsilon = 1e-12);
    }

    #[test]
    fn winding_does_not_change_circle() {
        let ccw = Circumcircle::from_vertices(&p(1.0, 1.0), &p(5.0, 2.0), &p(2.0, 6.0));
        let cw = Circumcircle::from_vertices(&p(1.0, 1.0), &p(2.0, 6.0), &p(5.0, 2.0));
        assert_relative_eq!(ccw.center().x, cw.center().x, epsilon = 1e-12);
        assert_relative_eq!(ccw.center().y, cw.center().y, epsilon = 1e-12);
        assert_relative_eq!(ccw.radius(), cw.radius(), epsilon = 1e-12);
    }

    #[test]
    fn all_vertices_on_circle() {
        let (a, b, c) = (p(-3.0, 0.5), p(7.0, -2.0), p(1.0, 9.0));
        let circle = Circumcircle::from_vertices(&a, &b, &c);
        for v in [a, b, c] {
            let d = distance_squared(&v, circle.center()).sqrt();
            assert_relative_eq!(d, circle.radius(), max_relative = 1e-12);
        }
    }

    #[test]
    fn contains_interior_and_rejects_exterior() {
        let c = Circumcircle::from_vertices(&p(-1.0, 0.0), &p(1.0, 0.0), &p(0.0, 1.0));
        assert!(c.contains(&p(0.0, 0.0)));
        assert!(c.contains(&p(0.5, -0.5)));
        assert!(!c.contains(&p(2.0, 0.0)));
        assert!(!c.contains(&p(0.0, -1.5)));
    }

    #[test]
    fn boundary_point_counts_as_inside() {
        let c = Circumcircle::from_vertices(&p(-1.0, 0.0), &p(1.0, 0.0), &p(0.0, 1.0));
        assert!(c.contains(&p(0.0, -1.0)));
        assert!(c.contains(&p(-1.0, 0.0)));
    }

    #[test]
    fn right_extent_is_center_plus_radius() {
        let c = Circumcircle::from_vertices(&p(0.0, 0.0), &p(4.0, 0.0), &p(0.0, 3.0));
        assert_relative_eq!(c.right_extent(), 4.5, epsilon = 1e-12);
    }

    #[test]
    fn collinear_vertices_propagate_non_finite() {
        let c = Circumcircle::from_vertices(&p(0.0, 0.0), &p(1.0, 1.0), &p(2.0, 2.0));
        assert!(!c.center().x.is_finite() || !c.radius().is_finite());
    }

    #[test]
    fn checked_rejects_collinear() {
        let err = Circumcircle::try_from_vertices(&p(0.0, 0.0), &p(1.0, 1.0), &p(2.0, 2.0))
            .unwrap_err();
        assert!(matches!(
            err,
            BowyerError::Geometry(GeometryError::Degenerate(_))
        ));
    }

    #[test]
    fn checked_rejects_coincident_vertices() {
        let err = Circumcircle::try_from_vertices(&p(1.0, 1.0), &p(1.0, 1.0), &p(1.0, 1.0))
            .unwrap_err();
        assert!(matches!(
            err,
            BowyerError::Geometry(GeometryError::Degenerate(_))
        ));
    }

    #[test]
    fn checked_rejects_nan() {
        let err = Circumcircle::try_from_vertices(&p(0.0, 0.0), &p(f64::NAN, 1.0), &p(2.0, 0.0))
            .unwrap_err();
        assert!(matches!(
            err,
            BowyerError::Geometry(GeometryError::NonFinite { .. })
        ));
    }

    #[test]
    fn checked_matches_unchecked_for_valid_input() {
        let (a, b, c) = (p(0.0, 0.0), p(4.0, 0.0), p(0.0, 3.0));
        let checked = Circumcircle::try_from_vertices(&a, &b, &c).unwrap();
        let plain = Circumcircle::from_vertices(&a, &b, &c);
        assert_relative_eq!(checked.radius(), plain.radius());
        assert_eq!(checked.center(), plain.center());
    }
}
