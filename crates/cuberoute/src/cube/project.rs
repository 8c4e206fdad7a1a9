//! Face projector: rigid integer maps from the base grid onto cube faces.
//!
//! Conventions
//! - The base grid is the `Front` face (`z = 0`) and is never transformed.
//! - The other five faces use one parameterized map each. With sign `σ`,
//!   offset `o` and `n = segments`:
//!
//!   | face   | image of `(x, y, z)`                  |
//!   |--------|---------------------------------------|
//!   | Back   | `(x, y, z + σn)`                      |
//!   | Top    | `(x, −σz + o, σy − (n − o))`          |
//!   | Bottom | `(x, −σz, σy)`                        |
//!   | Left   | `(−σz + o, y, σx − (n − o))`          |
//!   | Right  | `(−σz, y, σx)`                        |
//!
//! - `Forward` uses `σ = −1, o = n` and folds the grid onto the cube
//!   `[0, n] × [0, n] × [−n, 0]`; `Mirrored` uses `σ = +1, o = 0` and is its
//!   exact inverse, unfolding a projected face back onto `z = 0`.

use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::grid::Vertex;
use crate::route::Plane;

/// The six cube faces, in assignment order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CubeFace {
    Front,
    Back,
    Top,
    Bottom,
    Left,
    Right,
}

impl CubeFace {
    pub const ALL: [CubeFace; 6] = [
        CubeFace::Front,
        CubeFace::Back,
        CubeFace::Top,
        CubeFace::Bottom,
        CubeFace::Left,
        CubeFace::Right,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Projection index `0..5`; `None` for the untransformed front face.
    #[inline]
    pub fn projection(self) -> Option<usize> {
        self.index().checked_sub(1)
    }
}

/// Orientation of a face map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Mirrored,
}

impl Direction {
    #[inline]
    fn sign(self) -> i32 {
        match self {
            Direction::Forward => -1,
            Direction::Mirrored => 1,
        }
    }

    #[inline]
    fn offset(self, segments: i32) -> i32 {
        match self {
            Direction::Forward => segments,
            Direction::Mirrored => 0,
        }
    }
}

/// Integer affine map `v ↦ M v + t`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceMap {
    pub m: Matrix3<i32>,
    pub t: Vector3<i32>,
}

impl FaceMap {
    #[inline]
    pub fn identity() -> Self {
        Self {
            m: Matrix3::identity(),
            t: Vector3::zeros(),
        }
    }

    /// Map for projection index `projection` (0 = Back … 4 = Right).
    pub fn new(projection: usize, direction: Direction, segments: i32) -> Option<Self> {
        let s = direction.sign();
        let o = direction.offset(segments);
        let n = segments;
        let (m, t) = match projection {
            0 => (Matrix3::identity(), Vector3::new(0, 0, s * n)),
            1 => (
                Matrix3::new(1, 0, 0, 0, 0, -s, 0, s, 0),
                Vector3::new(0, o, -(n - o)),
            ),
            2 => (Matrix3::new(1, 0, 0, 0, 0, -s, 0, s, 0), Vector3::zeros()),
            3 => (
                Matrix3::new(0, 0, -s, 0, 1, 0, s, 0, 0),
                Vector3::new(o, 0, -(n - o)),
            ),
            4 => (Matrix3::new(0, 0, -s, 0, 1, 0, s, 0, 0), Vector3::zeros()),
            _ => return None,
        };
        Some(Self { m, t })
    }

    /// Map for a named face; the front face maps to the identity.
    pub fn for_face(face: CubeFace, direction: Direction, segments: i32) -> Self {
        face.projection()
            .and_then(|p| Self::new(p, direction, segments))
            .unwrap_or_else(Self::identity)
    }

    #[inline]
    pub fn apply(&self, v: Vertex) -> Vertex {
        Vertex::from_vector(self.m * v.to_vector() + self.t)
    }

    /// `next ∘ self`.
    pub fn then(&self, next: &FaceMap) -> FaceMap {
        FaceMap {
            m: next.m * self.m,
            t: next.m * self.t + next.t,
        }
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }
}

pub fn project_vertex(v: Vertex, face: CubeFace, direction: Direction, segments: i32) -> Vertex {
    FaceMap::for_face(face, direction, segments).apply(v)
}

/// Remap every vertex of `plane` onto `face`. Path order, walk order and edge
/// order are unchanged.
pub fn project_plane(plane: &Plane, face: CubeFace, direction: Direction, segments: i32) -> Plane {
    let map = FaceMap::for_face(face, direction, segments);
    if map.is_identity() {
        return plane.clone();
    }
    plane.map_vertices(|v| map.apply(v))
}

/// `plane` projected onto all six faces, in `CubeFace::ALL` order.
pub fn project_all(plane: &Plane, direction: Direction, segments: i32) -> [Plane; 6] {
    CubeFace::ALL.map(|face| project_plane(plane, face, direction, segments))
}
