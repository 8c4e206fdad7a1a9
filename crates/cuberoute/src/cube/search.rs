//! Loop search: assign template planes to cube faces until the projected
//! paths chain into one closed loop.
//!
//! Model
//! - All `4^6` assignments of the four templates to the six faces are tried
//!   in lexicographic order (front face most significant).
//! - A candidate is accepted when walking endpoint-to-endpoint from the first
//!   path returns to its start after consuming every path. A walk that gets
//!   stuck, or closes early and leaves paths over, rejects the candidate.
//! - If no assignment closes, a fresh template set is drawn; the number of
//!   rounds is bounded by `RouteCfg::max_search_rounds`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::cfg::{RouteCfg, SearchStats};
use crate::error::{RecoveredFailure, RoutingError};
use crate::grid::{Grid, Vertex};
use crate::rng::RoundToken;
use crate::route::{collect_templates, PathSet, Plane, TemplateSet};

use super::project::{project_all, project_plane, CubeFace, Direction};

/// Template index per face, in `CubeFace::ALL` order.
pub type FaceAssignment = [usize; 6];

/// One path of the loop, in traversal order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoopStep {
    pub face: CubeFace,
    /// Index into the face plane's paths.
    pub path: usize,
    /// Traversed from `end` to `start`.
    pub reversed: bool,
}

/// Six face planes plus the order in which their paths form one cycle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosedLoop {
    faces: [Plane; 6],
    steps: Vec<LoopStep>,
}

impl ClosedLoop {
    #[inline]
    pub fn faces(&self) -> &[Plane; 6] {
        &self.faces
    }

    #[inline]
    pub fn face(&self, face: CubeFace) -> &Plane {
        &self.faces[face.index()]
    }

    #[inline]
    pub fn steps(&self) -> &[LoopStep] {
        &self.steps
    }

    pub fn path(&self, step: &LoopStep) -> Option<&PathSet> {
        self.faces[step.face.index()].paths().get(step.path)
    }

    pub fn path_count(&self) -> usize {
        self.faces.iter().map(|p| p.paths().len()).sum()
    }

    pub fn edge_count(&self) -> usize {
        self.faces.iter().map(Plane::edge_count).sum()
    }

    /// Vertex where each step enters its path, in traversal order.
    pub fn junctions(&self) -> Vec<Vertex> {
        self.steps
            .iter()
            .filter_map(|step| {
                let p = self.path(step)?;
                Some(if step.reversed { p.end() } else { p.start() })
            })
            .collect()
    }

    /// Counterpart with the mirrored map applied to every non-front face.
    /// For a forward-projected loop this unfolds each face back onto the
    /// base grid; the traversal order is kept.
    pub fn mirrored(&self, segments: i32) -> ClosedLoop {
        let faces = CubeFace::ALL
            .map(|face| project_plane(&self.faces[face.index()], face, Direction::Mirrored, segments));
        ClosedLoop {
            faces,
            steps: self.steps.clone(),
        }
    }
}

/// Chain the paths of six face planes end to end, starting at the first path
/// of the first non-empty face. Returns the traversal if it forms exactly one
/// cycle through every path.
pub fn trace_single_loop(faces: &[&Plane; 6]) -> Option<Vec<LoopStep>> {
    let mut refs: Vec<(CubeFace, usize, &PathSet)> = Vec::new();
    for (face, plane) in CubeFace::ALL.iter().zip(faces.iter()) {
        for (i, p) in plane.paths().iter().enumerate() {
            refs.push((*face, i, p));
        }
    }
    let (&(face0, path0, first), _) = refs.split_first()?;
    let mut at_vertex: HashMap<Vertex, Vec<usize>> = HashMap::new();
    for (k, (_, _, p)) in refs.iter().enumerate() {
        at_vertex.entry(p.start()).or_default().push(k);
        at_vertex.entry(p.end()).or_default().push(k);
    }
    let mut used = vec![false; refs.len()];
    used[0] = true;
    let start = first.start();
    let mut end = first.end();
    let mut steps = vec![LoopStep {
        face: face0,
        path: path0,
        reversed: false,
    }];
    while end != start {
        let next = at_vertex
            .get(&end)?
            .iter()
            .copied()
            .find(|&k| !used[k])?;
        used[next] = true;
        let (face, path, p) = refs[next];
        let reversed = p.start() != end;
        end = if reversed { p.start() } else { p.end() };
        steps.push(LoopStep {
            face,
            path,
            reversed,
        });
    }
    (steps.len() == refs.len()).then_some(steps)
}

fn decode(code: usize) -> FaceAssignment {
    let n = TemplateSet::LEN;
    std::array::from_fn(|f| (code / n.pow((5 - f) as u32)) % n)
}

/// Try every face assignment of `templates`; the front face stays untransformed
/// and the others are projected forward.
pub fn find_assignment(
    templates: &TemplateSet,
    segments: i32,
    stats: &mut SearchStats,
) -> Result<(FaceAssignment, ClosedLoop), RecoveredFailure> {
    let projected: Vec<[Plane; 6]> = templates
        .planes()
        .iter()
        .map(|p| project_all(p, Direction::Forward, segments))
        .collect();
    let total = TemplateSet::LEN.pow(6);
    for code in 0..total {
        let assignment = decode(code);
        let faces: [&Plane; 6] = std::array::from_fn(|f| &projected[assignment[f]][f]);
        stats.assignments_tested += 1;
        if let Some(steps) = trace_single_loop(&faces) {
            let faces = faces.map(Plane::clone);
            return Ok((assignment, ClosedLoop { faces, steps }));
        }
    }
    Err(RecoveredFailure::NoValidFaceAssignment { tested: total })
}

/// Result of a successful cube routing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CubeRoute {
    pub templates: TemplateSet,
    pub assignment: FaceAssignment,
    pub primary: ClosedLoop,
    pub mirrored: ClosedLoop,
    pub stats: SearchStats,
}

/// Full engine: collect templates, search assignments, and regenerate the
/// templates on failure until `cfg.max_search_rounds` is spent.
pub fn route_cube(grid: &Grid, cfg: &RouteCfg, seed: u64) -> Result<CubeRoute, RoutingError> {
    cfg.validate()?;
    let mut stats = SearchStats::default();
    for round in 0..cfg.max_search_rounds {
        let mut rng = RoundToken {
            seed,
            round: round as u64,
        }
        .to_std_rng();
        stats.template_rounds += 1;
        let templates = collect_templates(grid, cfg, &mut rng, &mut stats)?;
        match find_assignment(&templates, grid.segments(), &mut stats) {
            Ok((assignment, primary)) => {
                let mirrored = primary.mirrored(grid.segments());
                tracing::info!(
                    round,
                    ?assignment,
                    paths = primary.path_count(),
                    tested = stats.assignments_tested,
                    "closed_loop_found"
                );
                return Ok(CubeRoute {
                    templates,
                    assignment,
                    primary,
                    mirrored,
                    stats,
                });
            }
            Err(failure) => tracing::debug!(round, %failure, "template_round_failed"),
        }
    }
    tracing::warn!(rounds = cfg.max_search_rounds, "search_budget_exhausted");
    Err(RoutingError::RoutingUnsatisfiable {
        rounds: cfg.max_search_rounds,
    })
}
