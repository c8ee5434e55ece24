use crate::geometry::Edge;

/// Returns the edges that occur exactly once in `edges`.
///
/// `edges` holds the sides of every triangle invalidated by one insertion.
/// A side shared by two of them is interior to the removed region; the
/// remaining sides bound the star-shaped hole that the new point fans into.
/// First-occurrence order is kept.
#[must_use]
pub fn star_boundary(edges: &[Edge]) -> Vec<Edge> {
    let mut boundary = Vec::with_capacity(edges.len());
    for (i, edge) in edges.iter().enumerate() {
        let shared = edges
            .iter()
            .enumerate()
            .any(|(j, other)| i != j && other == edge);
        if !shared {
            boundary.push(*edge);
        }
    }
    boundary
}
