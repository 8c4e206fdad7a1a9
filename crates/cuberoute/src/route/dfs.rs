//! Depth-first search for one alternating boundary-to-boundary path.
//!
//! Model
//! - Search states are `(vertex, axis of the next move)`. The first path to
//!   reach a state is the only one kept for it; later arrivals are pruned.
//! - Moves use untaken grid edges along the current axis, then flip the axis.
//! - The search stops at the first arrival at `t`; the result is any valid
//!   path, not a shortest or longest one.
//! - The walk is iterative with an explicit frame stack, so long paths on fine
//!   grids do not grow the call stack.

use std::collections::HashSet;

use crate::grid::{Axis, Edge, Grid, Vertex};

/// Find a simple, axis-alternating path `s → t` over edges not in `taken`.
///
/// The first move follows `grid.start_axis(s)`. Returns the edges in walk
/// order from `s`, or `None` when no such path is reachable.
pub fn find_path(grid: &Grid, taken: &HashSet<Edge>, s: Vertex, t: Vertex) -> Option<Vec<Edge>> {
    PathRunner::new(grid, taken, t).run(s, grid.start_axis(s))
}

struct Frame {
    vertex: Vertex,
    axis: Axis,
    next: usize, // index into grid.neighbors(vertex)
}

struct PathRunner<'a> {
    grid: &'a Grid,
    taken: &'a HashSet<Edge>,
    target: Vertex,
    seen: HashSet<(Vertex, Axis)>,
    on_path: HashSet<Vertex>,
    path: Vec<Edge>,
}

impl<'a> PathRunner<'a> {
    fn new(grid: &'a Grid, taken: &'a HashSet<Edge>, target: Vertex) -> Self {
        Self {
            grid,
            taken,
            target,
            seen: HashSet::new(),
            on_path: HashSet::new(),
            path: Vec::new(),
        }
    }

    fn run(mut self, s: Vertex, axis: Axis) -> Option<Vec<Edge>> {
        if s == self.target {
            return None;
        }
        let mut frames = vec![Frame {
            vertex: s,
            axis,
            next: 0,
        }];
        self.seen.insert((s, axis));
        self.on_path.insert(s);
        // Invariant: path.len() == frames.len() - 1.
        while let Some(frame) = frames.last_mut() {
            let neighbors = self.grid.neighbors(frame.vertex);
            let Some(&n) = neighbors.get(frame.next) else {
                self.on_path.remove(&frame.vertex);
                frames.pop();
                self.path.pop();
                continue;
            };
            frame.next += 1;
            let (cur, axis) = (frame.vertex, frame.axis);
            let edge = Edge::new(cur, n);
            if edge.axis() != Some(axis) || self.taken.contains(&edge) || self.on_path.contains(&n)
            {
                continue;
            }
            let next_axis = axis.flip();
            if !self.seen.insert((n, next_axis)) {
                continue;
            }
            self.path.push(edge);
            if n == self.target {
                return Some(self.path);
            }
            self.on_path.insert(n);
            frames.push(Frame {
                vertex: n,
                axis: next_axis,
                next: 0,
            });
        }
        None
    }
}
