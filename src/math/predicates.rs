use super::Point2;

/// Twice the signed area of the triangle `(a, b, c)`.
///
/// Positive for counter-clockwise, negative for clockwise, zero if collinear.
#[must_use]
pub fn orient_2d(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Squared Euclidean distance between two points.
#[must_use]
pub fn distance_squared(p: &Point2, q: &Point2) -> f64 {
    let dx = p.x - q.x;
    let dy = p.y - q.y;
    dx * dx + dy * dy
}

/// Returns `true` if both coordinates of `p` are finite.
#[must_use]
pub fn is_finite(p: &Point2) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

/// Scale used to turn [`TOLERANCE`](super::TOLERANCE) into a relative bound
/// for the triangle `(a, b, c)`: the squared length of its longest edge.
#[must_use]
pub fn longest_edge_squared(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    distance_squared(a, b)
        .max(distance_squared(b, c))
        .max(distance_squared(c, a))
}
