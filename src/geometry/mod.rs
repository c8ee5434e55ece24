pub mod circumcircle;
pub mod edge;
pub mod triangle;

pub use circumcircle::Circumcircle;
pub use edge::Edge;
pub use triangle::Triangle;
