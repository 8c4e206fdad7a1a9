//! Value types shared by every stage: lattice vertices, undirected edges and
//! movement axes.
//!
//! Equality is structural throughout; a vertex is its coordinates and an edge
//! is its unordered pair of endpoints.

use std::hash::{Hash, Hasher};

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Integer lattice point. Base grids live in the `z = 0` plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Vertex {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Vertex {
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Point of the base grid (`z = 0`).
    #[inline]
    pub const fn planar(x: i32, y: i32) -> Self {
        Self { x, y, z: 0 }
    }

    #[inline]
    pub fn to_vector(self) -> Vector3<i32> {
        Vector3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn from_vector(v: Vector3<i32>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// Movement axis inside the base grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Along `x`.
    Horizontal,
    /// Along `y`.
    Vertical,
}

impl Axis {
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// Undirected edge between two lattice points; `Edge(a, b) == Edge(b, a)`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Edge {
    pub v1: Vertex,
    pub v2: Vertex,
}

impl Edge {
    #[inline]
    pub const fn new(v1: Vertex, v2: Vertex) -> Self {
        Self { v1, v2 }
    }

    /// Endpoints in canonical (sorted) order; equality and hashing use this.
    #[inline]
    pub fn key(&self) -> (Vertex, Vertex) {
        if self.v1 <= self.v2 {
            (self.v1, self.v2)
        } else {
            (self.v2, self.v1)
        }
    }

    /// The endpoint opposite to `v`, if `v` is an endpoint.
    #[inline]
    pub fn other(&self, v: Vertex) -> Option<Vertex> {
        if self.v1 == v {
            Some(self.v2)
        } else if self.v2 == v {
            Some(self.v1)
        } else {
            None
        }
    }

    /// Index (0 = x, 1 = y, 2 = z) of the single coordinate this unit edge
    /// moves along; `None` for degenerate or non-axis-aligned edges.
    pub fn direction(&self) -> Option<usize> {
        let (a, b) = (self.v1, self.v2);
        match ((b.x - a.x).abs(), (b.y - a.y).abs(), (b.z - a.z).abs()) {
            (1, 0, 0) => Some(0),
            (0, 1, 0) => Some(1),
            (0, 0, 1) => Some(2),
            _ => None,
        }
    }

    /// Grid axis of a planar unit edge.
    pub fn axis(&self) -> Option<Axis> {
        match self.direction() {
            Some(0) => Some(Axis::Horizontal),
            Some(1) => Some(Axis::Vertical),
            _ => None,
        }
    }

    /// Apply a vertex map to both endpoints, keeping their order.
    #[inline]
    pub fn map(&self, f: impl Fn(Vertex) -> Vertex) -> Edge {
        Edge::new(f(self.v1), f(self.v2))
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}
