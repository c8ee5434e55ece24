//! Delaunay triangulation of planar point sets using the incremental
//! Bowyer-Watson algorithm, with an X-sweep that retires triangles whose
//! circumcircle can no longer be reached by the remaining points.
//!
//! ```
//! use bowyer::geometry::Triangle;
//! use bowyer::math::Point2;
//! use bowyer::triangulation::triangulate;
//!
//! let points = [
//!     Point2::new(-1.0, 0.0),
//!     Point2::new(0.0, -1.2),
//!     Point2::new(1.0, 0.1),
//!     Point2::new(0.2, 1.0),
//! ];
//! let super_triangle = Triangle::new(
//!     Point2::new(0.0, 50.0),
//!     Point2::new(50.0, -50.0),
//!     Point2::new(-50.0, -50.0),
//! );
//!
//! let triangles = triangulate(&points, &super_triangle);
//! assert_eq!(triangles.len(), 2);
//! ```

pub mod error;
pub mod geometry;
pub mod math;
pub mod triangulation;

pub use error::{BowyerError, Result};
