//! Face routing: decompose the base grid into alternating boundary-to-boundary
//! paths and collect template planes for the cube search.
//!
//! - `types`: `PathSet`, `Plane`, `TemplateSet`.
//! - `dfs`: path decomposer for a single `(s, t)` pair.
//! - `discover`: randomized plane discovery with full restarts, and template
//!   collection on top of it.

mod dfs;
mod discover;
mod types;

pub use dfs::find_path;
pub use discover::{collect_templates, discover_plane, discover_plane_attempt};
pub use types::{PathSet, Plane, TemplateSet};

#[cfg(test)]
mod tests;
