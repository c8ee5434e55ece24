//! Triangulates random points sampled in a disk and logs the result.
//!
//! Usage:
//! ```text
//! cargo run --example triangulate            # 6 points
//! cargo run --example triangulate -- 200     # 200 points
//! RUST_LOG=bowyer=trace cargo run --example triangulate
//! ```

use std::f64::consts::TAU;

use bowyer::geometry::Triangle;
use bowyer::math::Point2;
use bowyer::triangulation::{delaunay_violations, BowyerWatson, TriangulationParams};

const DEFAULT_POINTS: usize = 6;
const DISK_RADIUS: f64 = 5.0;

fn main() -> bowyer::Result<()> {
    // Default: WARN for everything, INFO for bowyer.
    // Override with RUST_LOG env var (e.g. RUST_LOG=bowyer=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("triangulate=info".parse().unwrap_or_default())
        .add_directive("bowyer=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let count = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_POINTS);

    let mut rng = fastrand::Rng::new();
    let points: Vec<Point2> = (0..count).map(|_| point_in_disk(&mut rng, DISK_RADIUS)).collect();

    let super_triangle = Triangle::new(
        Point2::new(0.0, 50.0),
        Point2::new(50.0, -50.0),
        Point2::new(-50.0, -50.0),
    );

    let result = BowyerWatson::new(&points, super_triangle)
        .with_params(TriangulationParams {
            validate_input: true,
            ..TriangulationParams::default()
        })
        .execute()?;

    for t in result.triangles() {
        tracing::info!(
            "({:.4}, {:.4}) ({:.4}, {:.4}) ({:.4}, {:.4})",
            t.a.x,
            t.a.y,
            t.b.x,
            t.b.y,
            t.c.x,
            t.c.y
        );
    }

    let violations = delaunay_violations(result.triangles(), &points);
    if !violations.is_empty() {
        tracing::warn!(count = violations.len(), "empty-circumcircle violations");
    }
    tracing::info!(
        points = result.points_inserted(),
        triangles = result.len(),
        finalized_early = result.finalized_early(),
        area = result.total_area(),
        "number of triangles"
    );
    Ok(())
}

/// Random point in a disk of `radius` around the origin, uniform by area.
fn point_in_disk(rng: &mut fastrand::Rng, radius: f64) -> Point2 {
    let t = TAU * rng.f64();
    let u = rng.f64() + rng.f64();
    let r = if u > 1.0 { 2.0 - u } else { u };
    Point2::new(radius * r * t.cos(), radius * r * t.sin())
}
