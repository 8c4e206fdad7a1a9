//! Grid topology: the planar lattice every cube face is routed on.

mod build;
mod types;

pub use build::Grid;
pub use types::{Axis, Edge, Vertex};
