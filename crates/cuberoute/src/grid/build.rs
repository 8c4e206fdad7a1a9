//! Base grid construction (vertices, edges, adjacency).

use std::collections::HashMap;

use crate::error::RoutingError;

use super::types::{Axis, Edge, Vertex};

/// Planar `segments × segments` grid with its four corners removed.
///
/// Boundary vertices (a coordinate divisible by `segments`) have exactly one
/// incident edge and are where strands enter and leave the face; interior
/// vertices have four.
#[derive(Clone, Debug)]
pub struct Grid {
    segments: i32,
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    adj: HashMap<Vertex, Vec<Vertex>>, // neighbors in edge construction order
}

impl Grid {
    /// Build the grid. Vertices are listed column by column (`x` outer, `y`
    /// inner), and each kept cell `(x, y)` contributes
    /// - `x == 0`: the edge to `(x + 1, y)`;
    /// - otherwise `y == 0`: the edge to `(x, y + 1)`;
    /// - otherwise, away from the far sides: edges to `(x + 1, y)` and `(x, y + 1)`.
    pub fn new(segments: u32) -> Result<Self, RoutingError> {
        if segments < 2 {
            return Err(RoutingError::InvalidSegments(segments));
        }
        let n = i32::try_from(segments).map_err(|_| RoutingError::InvalidSegments(segments))?;
        let mut vertices = Vec::new();
        let mut edges = Vec::new();
        for x in 0..=n {
            for y in 0..=n {
                if x % n == 0 && y % n == 0 {
                    continue;
                }
                let v = Vertex::planar(x, y);
                vertices.push(v);
                if x == 0 {
                    edges.push(Edge::new(v, Vertex::planar(x + 1, y)));
                } else if y == 0 {
                    edges.push(Edge::new(v, Vertex::planar(x, y + 1)));
                } else if x != n && y != n {
                    edges.push(Edge::new(v, Vertex::planar(x + 1, y)));
                    edges.push(Edge::new(v, Vertex::planar(x, y + 1)));
                }
            }
        }
        let mut adj: HashMap<Vertex, Vec<Vertex>> =
            vertices.iter().map(|&v| (v, Vec::new())).collect();
        for e in &edges {
            adj.entry(e.v1).or_default().push(e.v2);
            adj.entry(e.v2).or_default().push(e.v1);
        }
        Ok(Self {
            segments: n,
            vertices,
            edges,
            adj,
        })
    }

    #[inline]
    pub fn segments(&self) -> i32 {
        self.segments
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Neighbors of `v` in a stable order (empty for foreign vertices).
    pub fn neighbors(&self, v: Vertex) -> &[Vertex] {
        self.adj.get(&v).map(Vec::as_slice).unwrap_or(&[])
    }

    #[inline]
    pub fn is_boundary(&self, v: Vertex) -> bool {
        v.x % self.segments == 0 || v.y % self.segments == 0
    }

    /// Valid path endpoints, in vertex order.
    pub fn boundary_vertices(&self) -> Vec<Vertex> {
        self.vertices
            .iter()
            .copied()
            .filter(|&v| self.is_boundary(v))
            .collect()
    }

    /// First movement axis of a path leaving boundary vertex `v`: left/right
    /// sides move horizontally, bottom/top sides vertically.
    #[inline]
    pub fn start_axis(&self, v: Vertex) -> Axis {
        if v.x % self.segments == 0 {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }

    /// Edge count the construction rule yields: `2 · segments · (segments − 1)`.
    pub fn expected_edge_count(segments: u32) -> usize {
        let s = segments as usize;
        2 * s * s.saturating_sub(1)
    }
}
