use std::collections::HashSet;

use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

use super::*;
use crate::cfg::{RouteCfg, SearchStats};
use crate::error::{RecoveredFailure, RoutingError};
use crate::grid::{Edge, Grid, Vertex};

fn v(x: i32, y: i32) -> Vertex {
    Vertex::planar(x, y)
}

fn e(a: (i32, i32), b: (i32, i32)) -> Edge {
    Edge::new(v(a.0, a.1), v(b.0, b.1))
}

#[test]
fn finds_the_turning_path_on_two_segments() {
    let g = Grid::new(2).unwrap();
    let path = find_path(&g, &HashSet::new(), v(0, 1), v(1, 0)).unwrap();
    assert_eq!(path, vec![e((0, 1), (1, 1)), e((1, 1), (1, 0))]);
    // Going straight across would need two horizontal moves in a row.
    assert!(find_path(&g, &HashSet::new(), v(0, 1), v(2, 1)).is_none());
}

#[test]
fn taken_edges_block_the_path() {
    let g = Grid::new(2).unwrap();
    let taken: HashSet<Edge> = [e((1, 0), (1, 1))].into_iter().collect();
    assert!(find_path(&g, &taken, v(0, 1), v(1, 0)).is_none());
    assert!(find_path(&g, &taken, v(0, 1), v(1, 2)).is_some());
}

#[test]
fn staircase_path_on_four_segments() {
    let g = Grid::new(4).unwrap();
    let (s, t) = (v(0, 1), v(3, 4));
    let edges = find_path(&g, &HashSet::new(), s, t).unwrap();
    let path = PathSet::new(s, t, edges);
    assert!(path.is_valid());
    assert_eq!(path.edges()[0].axis(), Some(g.start_axis(s)));
    assert_eq!(path.walk().unwrap().last(), Some(&t));
}

#[test]
fn two_segment_discovery_covers_the_grid() {
    let g = Grid::new(2).unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    let mut stats = SearchStats::default();
    let plane = discover_plane(&g, &RouteCfg::default(), &mut rng, &mut stats).unwrap();
    assert_eq!(plane.paths().len(), 2);
    assert_eq!(plane.edge_count(), g.edges().len());
    assert!(plane.covers(&g));
    assert!(stats.plane_attempts >= 1);
    assert!(stats.pair_draws >= 2);
}

#[test]
fn attempt_without_draws_is_incomplete() {
    let g = Grid::new(3).unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    let mut stats = SearchStats::default();
    let err = discover_plane_attempt(&g, &mut rng, 0, &mut stats).unwrap_err();
    assert_eq!(
        err,
        RecoveredFailure::IncompleteDecomposition {
            covered: 0,
            expected: 12
        }
    );
}

#[test]
fn dead_pair_returns_start_to_the_pool() {
    let g = Grid::new(3).unwrap();
    let max_draws = 16 * g.boundary_vertices().len();
    let recovered = (0..64u64).find_map(|seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut stats = SearchStats::default();
        let plane = discover_plane_attempt(&g, &mut rng, max_draws, &mut stats).ok()?;
        (stats.dead_pairs > 0).then_some((plane, stats))
    });
    let (plane, stats) = recovered.expect("some seed hits a dead pair and still completes");
    assert!(plane.covers(&g));
    assert_eq!(stats.plane_attempts, 1);
    assert_eq!(stats.pair_draws, plane.paths().len() + stats.dead_pairs);
}

#[test]
fn plane_budget_exhaustion_is_reported() {
    let g = Grid::new(5).unwrap();
    let cfg = RouteCfg {
        max_plane_attempts: 1,
        pair_draws_per_vertex: 1,
        ..RouteCfg::default()
    };
    let err = (0..16u64)
        .find_map(|seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            discover_plane(&g, &cfg, &mut rng, &mut SearchStats::default()).err()
        })
        .expect("one draw per boundary vertex rarely completes a five-segment plane");
    assert_eq!(
        err,
        RoutingError::IncompleteDecomposition {
            attempts: 1,
            expected_edges: 40
        }
    );
}

#[test]
fn same_seed_gives_the_same_plane() {
    let g = Grid::new(5).unwrap();
    let cfg = RouteCfg::default();
    let run = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        discover_plane(&g, &cfg, &mut rng, &mut SearchStats::default()).unwrap()
    };
    assert_eq!(run(2024), run(2024));
}

#[test]
fn same_routing_ignores_order_and_direction() {
    let a = PathSet::new(v(0, 1), v(1, 0), vec![e((0, 1), (1, 1)), e((1, 1), (1, 0))]);
    let b = PathSet::new(v(2, 1), v(1, 2), vec![e((2, 1), (1, 1)), e((1, 1), (1, 2))]);
    let b_rev = PathSet::new(v(1, 2), v(2, 1), vec![e((1, 2), (1, 1)), e((1, 1), (2, 1))]);
    let p = Plane::new(vec![a.clone(), b]);
    let q = Plane::new(vec![b_rev, a]);
    assert_ne!(p, q);
    assert!(p.same_routing(&q));

    let c = PathSet::new(v(0, 1), v(1, 2), vec![e((0, 1), (1, 1)), e((1, 1), (1, 2))]);
    let d = PathSet::new(v(2, 1), v(1, 0), vec![e((2, 1), (1, 1)), e((1, 1), (1, 0))]);
    assert!(!p.same_routing(&Plane::new(vec![c, d])));
}

#[test]
fn broken_paths_are_not_valid() {
    // Two horizontal moves in a row.
    let straight = PathSet::new(v(0, 1), v(2, 1), vec![e((0, 1), (1, 1)), e((1, 1), (2, 1))]);
    assert!(straight.is_simple());
    assert!(!straight.alternates());
    // Edges that do not chain from the start.
    let gap = PathSet::new(v(0, 1), v(1, 0), vec![e((1, 1), (1, 0))]);
    assert!(!gap.is_simple());
}

#[test]
fn distinct_templates_on_three_segments() {
    let g = Grid::new(3).unwrap();
    let mut rng = StdRng::seed_from_u64(11);
    let mut stats = SearchStats::default();
    let t = collect_templates(&g, &RouteCfg::default(), &mut rng, &mut stats).unwrap();
    assert_eq!(t.distinct_count(), 4);
    for p in t.planes() {
        assert!(p.covers(&g));
    }
}

#[test]
fn two_segments_have_only_two_distinct_routings() {
    let g = Grid::new(2).unwrap();
    let cfg = RouteCfg {
        max_template_draws: 32,
        ..RouteCfg::default()
    };
    let mut rng = StdRng::seed_from_u64(3);
    let mut stats = SearchStats::default();
    let err = collect_templates(&g, &cfg, &mut rng, &mut stats).unwrap_err();
    assert_eq!(err, RoutingError::TemplatesExhausted { found: 2, draws: 32 });
    assert_eq!(stats.duplicate_planes, 30);
    assert!(err.to_string().contains("distinct_templates = false"));
}

#[test]
fn duplicates_allowed_when_not_distinct() {
    let g = Grid::new(2).unwrap();
    let cfg = RouteCfg {
        distinct_templates: false,
        ..RouteCfg::default()
    };
    let mut rng = StdRng::seed_from_u64(3);
    let t = collect_templates(&g, &cfg, &mut rng, &mut SearchStats::default()).unwrap();
    assert!(t.distinct_count() <= 2);
    assert!(t.planes().iter().all(|p| p.covers(&g)));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn discovered_planes_are_valid_decompositions(seed in any::<u64>(), segments in 2u32..=5) {
        let g = Grid::new(segments).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let plane = discover_plane(&g, &RouteCfg::default(), &mut rng, &mut SearchStats::default())
            .unwrap();
        prop_assert!(plane.covers(&g));
        prop_assert_eq!(plane.edge_count(), g.edges().len());
        for path in plane.paths() {
            prop_assert!(path.is_valid());
            prop_assert!(g.is_boundary(path.start()) && g.is_boundary(path.end()));
            prop_assert_eq!(path.edges()[0].axis(), Some(g.start_axis(path.start())));
        }
    }
}
