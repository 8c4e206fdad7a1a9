//! Criterion microbenches for the routing pipeline.
//!
//! - plane discovery (restart loop included) on 4- and 6-segment grids;
//! - single-loop check on a fixed face assignment;
//! - full cube routing on a 3-segment grid.
//!
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use cuberoute::cube::{find_assignment, project_all, trace_single_loop, Direction};
use cuberoute::route::{collect_templates, discover_plane};
use cuberoute::{route_cube, Grid, Plane, RouteCfg, SearchStats};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn bench_discovery(c: &mut Criterion) {
    let mut group = c.benchmark_group("discover");
    let cfg = RouteCfg::default();
    for segments in [4u32, 6] {
        let grid = Grid::new(segments).unwrap();
        group.bench_function(BenchmarkId::new("discover_plane", segments), |b| {
            b.iter_batched(
                || StdRng::seed_from_u64(42),
                |mut rng| {
                    let mut stats = SearchStats::default();
                    let _ = discover_plane(&grid, &cfg, &mut rng, &mut stats);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_loop_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("loop");
    let grid = Grid::new(4).unwrap();
    let cfg = RouteCfg::default();
    let mut rng = StdRng::seed_from_u64(7);
    let templates = collect_templates(&grid, &cfg, &mut rng, &mut SearchStats::default()).unwrap();
    let projected: Vec<[Plane; 6]> = templates
        .planes()
        .iter()
        .map(|p| project_all(p, Direction::Forward, grid.segments()))
        .collect();
    group.bench_function(BenchmarkId::new("trace_single_loop", "random-assignment"), |b| {
        b.iter_batched(
            || {
                let mut r = StdRng::seed_from_u64(rng.gen());
                std::array::from_fn::<usize, 6, _>(|_| r.gen_range(0..4))
            },
            |assignment| {
                let faces: [&Plane; 6] = std::array::from_fn(|f| &projected[assignment[f]][f]);
                let _ = trace_single_loop(&faces);
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function(BenchmarkId::new("find_assignment", 4), |b| {
        b.iter(|| {
            let _ = find_assignment(&templates, grid.segments(), &mut SearchStats::default());
        })
    });
    group.finish();
}

fn bench_route(c: &mut Criterion) {
    let grid = Grid::new(3).unwrap();
    let cfg = RouteCfg::default();
    c.bench_function("route_cube/3", |b| {
        b.iter_batched(
            || 0u64,
            |seed| {
                let _ = route_cube(&grid, &cfg, seed);
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_discovery, bench_loop_check, bench_route);
criterion_main!(benches);
