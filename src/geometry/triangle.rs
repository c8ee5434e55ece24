use crate::error::Result;
use crate::math::predicates::orient_2d;
use crate::math::Point2;

use super::{Circumcircle, Edge};

/// A triangle together with its circumcircle.
///
/// The circumcircle is computed when the triangle is built and cannot be
/// changed afterwards, so every triangle is ready for containment queries.
/// Vertex winding is not normalized.
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    /// First vertex.
    pub a: Point2,
    /// Second vertex.
    pub b: Point2,
    /// Third vertex.
    pub c: Point2,
    circumcircle: Circumcircle,
}

impl Triangle {
    /// Creates a triangle and computes its circumcircle.
    ///
    /// Collinear vertices are accepted and yield a non-finite circumcircle;
    /// see [`Circumcircle::from_vertices`].
    #[must_use]
    pub fn new(a: Point2, b: Point2, c: Point2) -> Self {
        Self {
            a,
            b,
            c,
            circumcircle: Circumcircle::from_vertices(&a, &b, &c),
        }
    }

    /// Creates a triangle, rejecting degenerate vertices.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertices are collinear, coincident or not
    /// finite.
    pub fn try_new(a: Point2, b: Point2, c: Point2) -> Result<Self> {
        let circumcircle = Circumcircle::try_from_vertices(&a, &b, &c)?;
        Ok(Self {
            a,
            b,
            c,
            circumcircle,
        })
    }

    /// Returns the three vertices in construction order.
    #[must_use]
    pub fn vertices(&self) -> [Point2; 3] {
        [self.a, self.b, self.c]
    }

    /// Returns the cached circumcircle.
    #[must_use]
    pub fn circumcircle(&self) -> &Circumcircle {
        &self.circumcircle
    }

    /// Returns `true` if `p` is exactly equal to one of the vertices.
    #[must_use]
    pub fn has_vertex(&self, p: &Point2) -> bool {
        self.a == *p || self.b == *p || self.c == *p
    }

    /// Returns `true` if the two triangles have at least one vertex in common.
    #[must_use]
    pub fn shares_vertex_with(&self, other: &Triangle) -> bool {
        other.vertices().iter().any(|v| self.has_vertex(v))
    }

    /// Returns `true` if `p` lies inside or on the circumcircle.
    #[must_use]
    pub fn circumcircle_contains(&self, p: &Point2) -> bool {
        self.circumcircle.contains(p)
    }

    /// Returns the edges A-B, A-C and B-C.
    #[must_use]
    pub fn edges(&self) -> [Edge; 3] {
        [
            Edge::new(self.a, self.b),
            Edge::new(self.a, self.c),
            Edge::new(self.b, self.c),
        ]
    }

    /// Signed area, positive when the vertices wind counter-clockwise.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        orient_2d(&self.a, &self.b, &self.c) * 0.5
    }

    /// Unsigned area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Returns `true` if `p` lies inside the triangle or on its boundary.
    ///
    /// Works for either winding.
    #[must_use]
    pub fn contains_point(&self, p: &Point2) -> bool {
        let d0 = orient_2d(&self.a, &self.b, p);
        let d1 = orient_2d(&self.b, &self.c, p);
        let d2 = orient_2d(&self.c, &self.a, p);

        let has_neg = d0 < 0.0 || d1 < 0.0 || d2 < 0.0;
        let has_pos = d0 > 0.0 || d1 > 0.0 || d2 > 0.0;
        !(has_neg && has_pos)
    }

    /// Returns `true` if `p` lies strictly inside the triangle.
    #[must_use]
    pub fn strictly_contains_point(&self, p: &Point2) -> bool {
        let d0 = orient_2d(&self.a, &self.b, p);
        let d1 = orient_2d(&self.b, &self.c, p);
        let d2 = orient_2d(&self.c, &self.a, p);

        (d0 > 0.0 && d1 > 0.0 && d2 > 0.0) || (d0 < 0.0 && d1 < 0.0 && d2 < 0.0)
    }
}
