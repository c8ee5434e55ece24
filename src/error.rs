use thiserror::Error;

/// Top-level error type for the triangulation crate.
#[derive(Debug, Error)]
pub enum BowyerError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Triangulation(#[from] TriangulationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("non-finite coordinate ({x}, {y})")]
    NonFinite { x: f64, y: f64 },
}

/// Errors raised by checked triangulation runs.
#[derive(Debug, Error)]
pub enum TriangulationError {
    #[error("super-triangle is degenerate")]
    DegenerateSuperTriangle,

    #[error("point {index} = ({x}, {y}) is not strictly inside the super-triangle")]
    PointOutsideSuperTriangle { index: usize, x: f64, y: f64 },
}

/// Convenience type alias for results using [`BowyerError`].
pub type Result<T> = std::result::Result<T, BowyerError>;
