//! Request/response boundary consumed by rendering and export collaborators.
//!
//! The serialized shape is
//! `{ width, height, depth, segments, scaffold_length, planes: [{ face, edges, paths }], route }`
//! with one plane per cube face (`CubeFace::ALL` order). `edges` lists the
//! face's paths one after another, each in walk order.

use serde::{Deserialize, Serialize};

use crate::cfg::{RouteCfg, SearchStats};
use crate::cube::{route_cube, ClosedLoop, CubeFace, FaceAssignment, LoopStep};
use crate::error::RoutingError;
use crate::grid::{Edge, Grid, Vertex};

/// Length of the M13mp18 scaffold strand, in nucleotides.
pub const M13_SCAFFOLD_LENGTH: u32 = 7249;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    pub segments: u32,
    /// Carried through to the output; the search does not use it.
    pub scaffold_length: u32,
}

impl RouteRequest {
    /// Cube with equal dimensions and the M13 scaffold.
    pub fn cube(segments: u32) -> Self {
        Self {
            width: segments,
            height: segments,
            depth: segments,
            segments,
            scaffold_length: M13_SCAFFOLD_LENGTH,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathEnds {
    pub start: Vertex,
    pub end: Vertex,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceRouting {
    pub face: CubeFace,
    pub edges: Vec<Edge>,
    pub paths: Vec<PathEnds>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingGraph {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    pub segments: u32,
    pub scaffold_length: u32,
    pub planes: Vec<FaceRouting>,
    pub route: Vec<LoopStep>,
}

impl RoutingGraph {
    pub fn from_loop(req: &RouteRequest, lp: &ClosedLoop) -> Self {
        let planes = CubeFace::ALL
            .iter()
            .map(|&face| {
                let plane = lp.face(face);
                FaceRouting {
                    face,
                    edges: plane.edges().copied().collect(),
                    paths: plane
                        .paths()
                        .iter()
                        .map(|p| PathEnds {
                            start: p.start(),
                            end: p.end(),
                        })
                        .collect(),
                }
            })
            .collect();
        Self {
            width: req.width,
            height: req.height,
            depth: req.depth,
            segments: req.segments,
            scaffold_length: req.scaffold_length,
            planes,
            route: lp.steps().to_vec(),
        }
    }
}

/// Engine output: the folded loop, its unfolded (mirrored) counterpart, and
/// the search bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Routing {
    pub seed: u64,
    pub assignment: FaceAssignment,
    pub primary: RoutingGraph,
    pub mirrored: RoutingGraph,
    pub stats: SearchStats,
}

/// Route a cube scaffold for `req`.
pub fn route(req: &RouteRequest, cfg: &RouteCfg, seed: u64) -> Result<Routing, RoutingError> {
    let grid = Grid::new(req.segments)?;
    let found = route_cube(&grid, cfg, seed)?;
    Ok(Routing {
        seed,
        assignment: found.assignment,
        primary: RoutingGraph::from_loop(req, &found.primary),
        mirrored: RoutingGraph::from_loop(req, &found.mirrored),
        stats: found.stats,
    })
}
