//! Search budgets and template policy.
//!
//! Policy
//! - Every retry loop in the engine is bounded by one of these budgets. The
//!   defaults are generous enough that small lattices (`segments` up to ~6)
//!   route on the first or second template round.
//! - Counters observed while searching are collected in `SearchStats` so that
//!   callers can see how close a run came to its budgets.

use serde::{Deserialize, Serialize};

use crate::error::RoutingError;

/// Budgets for plane discovery, template collection and loop search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteCfg {
    /// Reject template planes that repeat an already collected routing.
    /// `false` keeps duplicates (four draws always form a template set).
    pub distinct_templates: bool,
    /// Random `(s, t)` draws allowed per boundary vertex in one discovery attempt.
    pub pair_draws_per_vertex: usize,
    /// Full restarts of plane discovery before giving up on one plane.
    pub max_plane_attempts: usize,
    /// Planes drawn while collecting one template set.
    pub max_template_draws: usize,
    /// Template sets generated by the loop search.
    pub max_search_rounds: usize,
}

impl Default for RouteCfg {
    fn default() -> Self {
        Self {
            distinct_templates: true,
            pair_draws_per_vertex: 16,
            max_plane_attempts: 10_000,
            max_template_draws: 256,
            max_search_rounds: 64,
        }
    }
}

impl RouteCfg {
    pub fn validate(&self) -> Result<(), RoutingError> {
        if self.pair_draws_per_vertex == 0 {
            return Err(RoutingError::config("pair_draws_per_vertex must be > 0"));
        }
        if self.max_plane_attempts == 0 {
            return Err(RoutingError::config("max_plane_attempts must be > 0"));
        }
        if self.max_template_draws < 4 {
            return Err(RoutingError::config("max_template_draws must be >= 4"));
        }
        if self.max_search_rounds == 0 {
            return Err(RoutingError::config("max_search_rounds must be > 0"));
        }
        Ok(())
    }
}

/// Retry counters accumulated over one routing run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// `(s, t)` pairs handed to the path decomposer.
    pub pair_draws: usize,
    /// Pairs for which no alternating path existed.
    pub dead_pairs: usize,
    /// Plane discovery attempts, including the successful ones.
    pub plane_attempts: usize,
    /// Planes rejected because an equal routing was already collected.
    pub duplicate_planes: usize,
    /// Template sets generated by the loop search.
    pub template_rounds: usize,
    /// Face assignments checked for a single closed loop.
    pub assignments_tested: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cfg_is_valid() {
        assert!(RouteCfg::default().validate().is_ok());
    }

    #[test]
    fn zero_budgets_are_rejected() {
        let cfg = RouteCfg {
            max_search_rounds: 0,
            ..RouteCfg::default()
        };
        assert!(matches!(cfg.validate(), Err(RoutingError::InvalidConfig(_))));
        let cfg = RouteCfg {
            max_template_draws: 3,
            ..RouteCfg::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg: RouteCfg = serde_json::from_str(r#"{"distinct_templates": false}"#).unwrap();
        assert!(!cfg.distinct_templates);
        assert_eq!(cfg.max_search_rounds, RouteCfg::default().max_search_rounds);
    }
}
