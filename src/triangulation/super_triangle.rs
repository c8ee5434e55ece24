use crate::geometry::Triangle;
use crate::math::{Point2, TOLERANCE};

/// Smallest accepted scale factor; below it the bounding box corners are no
/// longer strictly inside.
const MIN_MARGIN: f64 = 2.0;

/// Builds a triangle that strictly encloses the bounding box of `points`.
///
/// `margin` scales the triangle relative to the larger side of the box and
/// is clamped to at least 2. Larger margins push the super-triangle vertices
/// further away, which makes it less likely that a thin triangle on the
/// convex hull is lost to the super-triangle purge. For an empty slice a
/// box of unit size around the origin is used.
#[must_use]
pub fn enclosing_super_triangle(points: &[Point2], margin: f64) -> Triangle {
    let margin = margin.max(MIN_MARGIN);

    let (min, max) = match points.split_first() {
        Some((first, rest)) => rest.iter().fold((*first, *first), |(lo, hi), p| {
            (
                Point2::new(lo.x.min(p.x), lo.y.min(p.y)),
                Point2::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        }),
        None => (Point2::origin(), Point2::origin()),
    };

    let extent = (max.x - min.x).max(max.y - min.y);
    let delta = if extent > TOLERANCE { extent } else { 1.0 };
    let mid = nalgebra::center(&min, &max);

    Triangle::new(
        Point2::new(mid.x - margin * delta, mid.y - delta),
        Point2::new(mid.x + margin * delta, mid.y - delta),
        Point2::new(mid.x, mid.y + margin * delta),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn encloses_every_point() {
        let pts = [p(-3.0, 1.0), p(4.0, 2.5), p(0.5, -6.0), p(2.0, 2.0)];
        let st = enclosing_super_triangle(&pts, 10.0);
        for q in &pts {
            assert!(st.strictly_contains_point(q));
        }
    }

    #[test]
    fn encloses_box_corners_at_minimum_margin() {
        let pts = [p(0.0, 0.0), p(1.0, 1.0)];
        let st = enclosing_super_triangle(&pts, 0.0);
        for q in [p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0), p(1.0, 1.0)] {
            assert!(st.strictly_contains_point(&q));
        }
    }

    #[test]
    fn single_point_gets_unit_box() {
        let st = enclosing_super_triangle(&[p(7.0, -3.0)], 10.0);
        assert!(st.strictly_contains_point(&p(7.0, -3.0)));
        assert!(st.area() > 1.0);
    }

    #[test]
    fn empty_input_centres_on_origin() {
        let st = enclosing_super_triangle(&[], 10.0);
        assert!(st.strictly_contains_point(&Point2::origin()));
    }

    #[test]
    fn super_triangle_is_not_degenerate() {
        let pts = [p(-1.0, -1.0), p(1.0, 1.0)];
        let st = enclosing_super_triangle(&pts, 10.0);
        assert!(st.circumcircle().radius().is_finite());
        assert!(Triangle::try_new(st.a, st.b, st.c).is_ok());
    }
}
