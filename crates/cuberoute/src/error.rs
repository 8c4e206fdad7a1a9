//! Error types for the routing engine.
//!
//! - `RoutingError`: the only failures that leave the public API.
//! - `RecoveredFailure`: failures of a single attempt that the engine absorbs
//!   by retrying; they surface through `tracing` and `SearchStats` only.

use thiserror::Error;

use crate::grid::Vertex;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RoutingError {
    #[error("segments must be at least 2, got {0}")]
    InvalidSegments(u32),

    #[error("invalid routing configuration: {0}")]
    InvalidConfig(String),

    #[error("plane discovery left edges uncovered after {attempts} attempts ({expected_edges} edges expected)")]
    IncompleteDecomposition {
        attempts: usize,
        expected_edges: usize,
    },

    /// Also the outcome when the lattice has fewer than four distinct
    /// routings at all (`segments = 2` has two).
    #[error(
        "only {found} distinct template planes after {draws} plane draws (need 4); \
         small lattices may not have four, set distinct_templates = false to allow repeats"
    )]
    TemplatesExhausted { found: usize, draws: usize },

    #[error("no face assignment closed into a single loop after {rounds} template rounds")]
    RoutingUnsatisfiable { rounds: usize },
}

impl RoutingError {
    pub(crate) fn config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig(reason.into())
    }
}

/// Failure of one attempt inside the retry loops.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecoveredFailure {
    #[error("no alternating path from {from:?} to {to:?}")]
    NoPathFound { from: Vertex, to: Vertex },

    #[error("decomposition covered {covered} of {expected} edges")]
    IncompleteDecomposition { covered: usize, expected: usize },

    #[error("none of {tested} face assignments closed into a single loop")]
    NoValidFaceAssignment { tested: usize },
}
