//! cuberoute: scaffold routing over the surface of a lattice cube.
//!
//! Pipeline
//! - `grid`: build the `segments × segments` face lattice (corners removed).
//! - `route`: decompose it into axis-alternating boundary-to-boundary paths
//!   (randomized, restart on failure) and collect four template planes.
//! - `cube`: project templates onto the six faces and search for an
//!   assignment whose paths chain into one closed loop.
//! - `api`: request/response types for rendering and export consumers.
//!
//! Every retry loop is bounded by `RouteCfg`; exhausting a budget is reported
//! as a `RoutingError`.

pub mod api;
pub mod cfg;
pub mod cube;
pub mod error;
pub mod grid;
pub mod rng;
pub mod route;

pub use api::{route, RouteRequest, Routing, RoutingGraph, M13_SCAFFOLD_LENGTH};
pub use cfg::{RouteCfg, SearchStats};
pub use cube::{route_cube, ClosedLoop, CubeFace, CubeRoute, Direction, LoopStep};
pub use error::{RecoveredFailure, RoutingError};
pub use grid::{Axis, Edge, Grid, Vertex};
pub use route::{PathSet, Plane, TemplateSet};
