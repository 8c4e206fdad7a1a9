//! Cube assembly: project face routings onto the cube and search for a face
//! assignment whose paths form one closed loop.

mod project;
mod search;

pub use project::{project_all, project_plane, project_vertex, CubeFace, Direction, FaceMap};
pub use search::{
    find_assignment, route_cube, trace_single_loop, ClosedLoop, CubeRoute, FaceAssignment,
    LoopStep,
};
