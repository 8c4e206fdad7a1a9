//! Randomized plane discovery and template collection.
//!
//! Model
//! - One attempt greedily pairs random boundary vertices, asking `find_path`
//!   for a route over the still untaken edges. Failed pairs put `s` back into
//!   the pool; nothing already taken is rolled back.
//! - An attempt that cannot empty the pool or leaves edges uncovered is thrown
//!   away as a whole and discovery restarts from an empty grid.
//! - Templates are four planes drawn from repeated discovery, optionally
//!   restricted to pairwise-distinct routings.
//!
//! All randomness comes from the caller's RNG, so a seeded `StdRng` replays
//! the same planes.

use std::collections::HashSet;

use rand::Rng;

use crate::cfg::{RouteCfg, SearchStats};
use crate::error::{RecoveredFailure, RoutingError};
use crate::grid::{Edge, Grid};

use super::dfs::find_path;
use super::types::{PathSet, Plane, TemplateSet};

/// One discovery attempt. `max_pair_draws` caps the `(s, t)` draws.
pub fn discover_plane_attempt<R: Rng>(
    grid: &Grid,
    rng: &mut R,
    max_pair_draws: usize,
    stats: &mut SearchStats,
) -> Result<Plane, RecoveredFailure> {
    stats.plane_attempts += 1;
    let mut pool = grid.boundary_vertices();
    let mut taken: HashSet<Edge> = HashSet::with_capacity(grid.edges().len());
    let mut paths = Vec::with_capacity(pool.len() / 2);
    let mut draws = 0usize;
    while pool.len() >= 2 && draws < max_pair_draws {
        draws += 1;
        stats.pair_draws += 1;
        let s = pool.remove(rng.gen_range(0..pool.len()));
        let t = pool[rng.gen_range(0..pool.len())];
        match find_path(grid, &taken, s, t) {
            Some(edges) => {
                pool.retain(|&v| v != t);
                taken.extend(edges.iter().copied());
                paths.push(PathSet::new(s, t, edges));
            }
            None => {
                stats.dead_pairs += 1;
                let failure = RecoveredFailure::NoPathFound { from: s, to: t };
                tracing::trace!(%failure, "pair_rejected");
                pool.push(s);
            }
        }
    }
    let expected = grid.edges().len();
    if !pool.is_empty() || taken.len() != expected {
        return Err(RecoveredFailure::IncompleteDecomposition {
            covered: taken.len(),
            expected,
        });
    }
    Ok(Plane::new(paths))
}

/// Discover one plane covering every grid edge, restarting from scratch on
/// incomplete attempts until `cfg.max_plane_attempts` is spent.
pub fn discover_plane<R: Rng>(
    grid: &Grid,
    cfg: &RouteCfg,
    rng: &mut R,
    stats: &mut SearchStats,
) -> Result<Plane, RoutingError> {
    let max_pair_draws = cfg
        .pair_draws_per_vertex
        .saturating_mul(grid.boundary_vertices().len());
    for attempt in 1..=cfg.max_plane_attempts {
        match discover_plane_attempt(grid, rng, max_pair_draws, stats) {
            Ok(plane) => {
                tracing::debug!(attempt, paths = plane.paths().len(), "plane_found");
                return Ok(plane);
            }
            Err(failure) => tracing::trace!(attempt, %failure, "plane_restart"),
        }
    }
    tracing::warn!(attempts = cfg.max_plane_attempts, "plane_budget_exhausted");
    Err(RoutingError::IncompleteDecomposition {
        attempts: cfg.max_plane_attempts,
        expected_edges: grid.edges().len(),
    })
}

/// Collect four template planes. With `cfg.distinct_templates`, planes that
/// repeat an already kept routing are skipped.
pub fn collect_templates<R: Rng>(
    grid: &Grid,
    cfg: &RouteCfg,
    rng: &mut R,
    stats: &mut SearchStats,
) -> Result<TemplateSet, RoutingError> {
    let mut kept: Vec<Plane> = Vec::with_capacity(TemplateSet::LEN);
    let mut draws = 0usize;
    while kept.len() < TemplateSet::LEN {
        if draws == cfg.max_template_draws {
            tracing::warn!(found = kept.len(), draws, "template_budget_exhausted");
            return Err(RoutingError::TemplatesExhausted {
                found: kept.len(),
                draws,
            });
        }
        draws += 1;
        let plane = discover_plane(grid, cfg, rng, stats)?;
        if cfg.distinct_templates && kept.iter().any(|k| k.same_routing(&plane)) {
            stats.duplicate_planes += 1;
            continue;
        }
        kept.push(plane);
    }
    tracing::info!(draws, "templates_collected");
    match <[Plane; 4]>::try_from(kept) {
        Ok(planes) => Ok(TemplateSet::new(planes)),
        Err(kept) => Err(RoutingError::TemplatesExhausted {
            found: kept.len(),
            draws,
        }),
    }
}
