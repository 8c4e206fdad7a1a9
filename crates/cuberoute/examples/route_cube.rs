//! Timing probe for one full cube routing.
//!
//! Usage: `cargo run --release --example route_cube -- [segments] [seed]`
//!
//! Prints the winning face assignment, the loop size, and the retry counters
//! so that budget defaults can be checked against real runs.

use std::time::Instant;

use cuberoute::{route_cube, Grid, RouteCfg};

fn main() {
    let mut args = std::env::args().skip(1);
    let segments: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(4);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(0);

    let grid = Grid::new(segments).expect("segments >= 2");
    let start = Instant::now();
    let route = route_cube(&grid, &RouteCfg::default(), seed).expect("cube routing succeeds");
    let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;

    println!(
        "segments={segments} seed={seed} assignment={:?}",
        route.assignment
    );
    println!(
        "paths={} edges={} (grid edges={})",
        route.primary.path_count(),
        route.primary.edge_count(),
        grid.edges().len()
    );
    println!("stats={:?}", route.stats);
    println!("route_time_ms={elapsed_ms:.3}");
}
