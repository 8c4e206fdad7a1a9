//! Path sets, planes and template sets.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::grid::{Edge, Grid, Vertex};

/// One strand segment: an ordered edge walk from `start` to `end`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSet {
    start: Vertex,
    end: Vertex,
    edges: Vec<Edge>,
}

impl PathSet {
    /// `edges` are expected in walk order from `start`; see `is_valid`.
    pub fn new(start: Vertex, end: Vertex, edges: Vec<Edge>) -> Self {
        Self { start, end, edges }
    }

    #[inline]
    pub fn start(&self) -> Vertex {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Vertex {
        self.end
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The endpoint opposite to `v`, if `v` is one of the two endpoints.
    pub fn other_end(&self, v: Vertex) -> Option<Vertex> {
        if v == self.start {
            Some(self.end)
        } else if v == self.end {
            Some(self.start)
        } else {
            None
        }
    }

    /// Vertices visited from `start`, or `None` if the edges do not chain.
    pub fn walk(&self) -> Option<Vec<Vertex>> {
        let mut cur = self.start;
        let mut out = Vec::with_capacity(self.edges.len() + 1);
        out.push(cur);
        for e in &self.edges {
            cur = e.other(cur)?;
            out.push(cur);
        }
        Some(out)
    }

    /// Edges chain from `start` to `end` without revisiting a vertex.
    pub fn is_simple(&self) -> bool {
        let Some(walk) = self.walk() else {
            return false;
        };
        if walk.last() != Some(&self.end) || self.edges.is_empty() {
            return false;
        }
        let unique: HashSet<Vertex> = walk.iter().copied().collect();
        unique.len() == walk.len()
    }

    /// Consecutive edges move along different coordinates. Rigid face maps
    /// permute coordinates, so this holds before and after projection.
    pub fn alternates(&self) -> bool {
        let dirs: Option<Vec<usize>> = self.edges.iter().map(Edge::direction).collect();
        match dirs {
            Some(d) => d.windows(2).all(|w| w[0] != w[1]),
            None => false,
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.is_simple() && self.alternates()
    }

    /// Rebuild the path under a vertex map, keeping walk order.
    pub fn map_vertices(&self, f: impl Fn(Vertex) -> Vertex) -> PathSet {
        PathSet {
            start: f(self.start),
            end: f(self.end),
            edges: self.edges.iter().map(|e| e.map(&f)).collect(),
        }
    }

    fn canonical(&self) -> Vec<(Vertex, Vertex)> {
        let mut keys: Vec<(Vertex, Vertex)> = self.edges.iter().map(Edge::key).collect();
        keys.sort();
        keys
    }
}

/// A decomposition of one face into boundary-to-boundary paths.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plane {
    paths: Vec<PathSet>,
}

impl Plane {
    pub fn new(paths: Vec<PathSet>) -> Self {
        Self { paths }
    }

    #[inline]
    pub fn paths(&self) -> &[PathSet] {
        &self.paths
    }

    /// All edges, path by path in walk order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.paths.iter().flat_map(|p| p.edges.iter())
    }

    pub fn edge_count(&self) -> usize {
        self.paths.iter().map(|p| p.edges.len()).sum()
    }

    /// Every grid edge is used exactly once and every boundary vertex ends
    /// exactly one path.
    pub fn covers(&self, grid: &Grid) -> bool {
        let mut seen: HashSet<Edge> = HashSet::with_capacity(grid.edges().len());
        for e in self.edges() {
            if !seen.insert(*e) {
                return false;
            }
        }
        let all: HashSet<Edge> = grid.edges().iter().copied().collect();
        if seen != all {
            return false;
        }
        let mut ends: Vec<Vertex> = self.paths.iter().flat_map(|p| [p.start, p.end]).collect();
        ends.sort();
        let mut boundary = grid.boundary_vertices();
        boundary.sort();
        ends == boundary
    }

    /// Same routing regardless of path order and walk direction.
    pub fn same_routing(&self, other: &Plane) -> bool {
        self.canonical() == other.canonical()
    }

    fn canonical(&self) -> Vec<Vec<(Vertex, Vertex)>> {
        let mut paths: Vec<Vec<(Vertex, Vertex)>> =
            self.paths.iter().map(PathSet::canonical).collect();
        paths.sort();
        paths
    }

    pub fn map_vertices(&self, f: impl Fn(Vertex) -> Vertex) -> Plane {
        Plane {
            paths: self.paths.iter().map(|p| p.map_vertices(&f)).collect(),
        }
    }
}

/// The four planes the loop search assigns to cube faces.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSet {
    planes: [Plane; 4],
}

impl TemplateSet {
    pub const LEN: usize = 4;

    pub fn new(planes: [Plane; 4]) -> Self {
        Self { planes }
    }

    #[inline]
    pub fn planes(&self) -> &[Plane; 4] {
        &self.planes
    }

    /// Number of pairwise-distinct routings among the four planes.
    pub fn distinct_count(&self) -> usize {
        let mut kept: Vec<&Plane> = Vec::new();
        for p in &self.planes {
            if !kept.iter().any(|k| k.same_routing(p)) {
                kept.push(p);
            }
        }
        kept.len()
    }
}
