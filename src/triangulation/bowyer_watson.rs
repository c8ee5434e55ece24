use slotmap::SlotMap;

use crate::error::Result;
use crate::geometry::{Edge, Triangle};
use crate::math::Point2;

use super::{check_input, star_boundary, Triangulation, TriangulationParams};

slotmap::new_key_type! {
    /// Handle of a triangle in the working set of a triangulation run.
    struct TriangleId;
}

/// Computes the Delaunay triangulation of a point set.
///
/// The super-triangle seeds the working set and must enclose every point.
/// Triangles touching any of its vertices are removed from the output.
pub struct BowyerWatson {
    points: Vec<Point2>,
    super_triangle: Triangle,
    params: TriangulationParams,
}

impl BowyerWatson {
    /// Creates a new `BowyerWatson` operation with default parameters.
    #[must_use]
    pub fn new(points: &[Point2], super_triangle: Triangle) -> Self {
        Self {
            points: points.to_vec(),
            super_triangle,
            params: TriangulationParams::default(),
        }
    }

    /// Sets custom triangulation parameters.
    #[must_use]
    pub fn with_params(mut self, params: TriangulationParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the triangulation.
    ///
    /// # Errors
    ///
    /// Returns an error only when [`TriangulationParams::validate_input`] is
    /// set and the input is rejected by [`check_input`].
    pub fn execute(&self) -> Result<Triangulation> {
        if self.params.validate_input {
            check_input(&self.points, &self.super_triangle)?;
        }
        Ok(self.run())
    }

    pub(super) fn run(&self) -> Triangulation {
        let mut sorted = self.points.clone();
        sorted.sort_by(|p, q| p.x.total_cmp(&q.x));

        tracing::debug!(
            points = sorted.len(),
            early_finalization = self.params.early_finalization,
            "starting triangulation"
        );

        let mut active: SlotMap<TriangleId, Triangle> = SlotMap::with_key();
        active.insert(self.super_triangle);

        let mut finalized: Vec<Triangle> = Vec::new();
        let mut candidates: Vec<Edge> = Vec::new();

        for p in &sorted {
            candidates.clear();
            let retired_before = finalized.len();

            active.retain(|_, t| {
                if self.params.early_finalization && p.x > t.circumcircle().right_extent() {
                    finalized.push(*t);
                    false
                } else if t.circumcircle_contains(p) {
                    candidates.extend(t.edges());
                    false
                } else {
                    true
                }
            });

            let boundary = star_boundary(&candidates);
            for edge in &boundary {
                active.insert(Triangle::new(edge.a, edge.b, *p));
            }

            tracing::trace!(
                x = p.x,
                y = p.y,
                retired = finalized.len() - retired_before,
                invalidated = candidates.len() / 3,
                boundary = boundary.len(),
                active = active.len(),
                "inserted point"
            );
        }

        let finalized_early = finalized.len();
        finalized.extend(active.into_iter().map(|(_, t)| t));
        finalized.retain(|t| !t.shares_vertex_with(&self.super_triangle));

        tracing::debug!(
            triangles = finalized.len(),
            finalized_early,
            "triangulation complete"
        );

        Triangulation {
            triangles: finalized,
            points_inserted: sorted.len(),
            finalized_early,
        }
    }
}
