use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cuberoute::route::discover_plane;
use cuberoute::{route, Grid, RouteCfg, RouteRequest, SearchStats, M13_SCAFFOLD_LENGTH};
use rand::{rngs::StdRng, SeedableRng};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

use provenance::{RunRecord, View};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Cube scaffold routing runner")]
struct Cmd {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Route a cube and write the routing JSON (plus provenance sidecars)
    Route {
        #[arg(long)]
        segments: u32,
        #[arg(long)]
        width: Option<u32>,
        #[arg(long)]
        height: Option<u32>,
        #[arg(long)]
        depth: Option<u32>,
        #[arg(long, default_value_t = M13_SCAFFOLD_LENGTH)]
        scaffold_length: u32,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// JSON file with search budgets (missing fields use defaults)
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        out: PathBuf,
        /// Also write the unfolded (mirrored) routing here
        #[arg(long)]
        mirrored_out: Option<PathBuf>,
        /// Allow repeated template planes (needed for --segments 2, which has
        /// only two distinct face routings)
        #[arg(long)]
        allow_duplicate_templates: bool,
    },
    /// Discover one face decomposition and print it as JSON
    Plane {
        #[arg(long)]
        segments: u32,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    init_logging(cmd.verbose, cmd.quiet);
    match cmd.action {
        Action::Route {
            segments,
            width,
            height,
            depth,
            scaffold_length,
            seed,
            config,
            out,
            mirrored_out,
            allow_duplicate_templates,
        } => {
            let req = RouteRequest {
                width: width.unwrap_or(segments),
                height: height.unwrap_or(segments),
                depth: depth.unwrap_or(segments),
                segments,
                scaffold_length,
            };
            let cfg = route_cfg(config.as_deref(), allow_duplicate_templates)?;
            run_route(&req, &cfg, seed, &out, mirrored_out.as_deref())
        }
        Action::Plane { segments, seed } => plane(segments, seed),
        Action::Report => report(),
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_cfg(path: Option<&Path>) -> Result<RouteCfg> {
    let cfg = match path {
        Some(p) => {
            let text =
                std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {}", p.display()))?
        }
        None => RouteCfg::default(),
    };
    cfg.validate()?;
    Ok(cfg)
}

fn route_cfg(path: Option<&Path>, allow_duplicate_templates: bool) -> Result<RouteCfg> {
    let mut cfg = load_cfg(path)?;
    if allow_duplicate_templates {
        cfg.distinct_templates = false;
    }
    Ok(cfg)
}

fn run_route(
    req: &RouteRequest,
    cfg: &RouteCfg,
    seed: u64,
    out: &Path,
    mirrored_out: Option<&Path>,
) -> Result<()> {
    tracing::info!(segments = req.segments, seed, out = %out.display(), "route");
    let routing = route(req, cfg, seed)?;
    tracing::info!(
        assignment = ?routing.assignment,
        steps = routing.primary.route.len(),
        stats = ?routing.stats,
        "routed"
    );
    let run = RunRecord::new(req, cfg, &routing);
    write_json(out, &routing.primary)?;
    provenance::write_sidecar(out, View::Primary, &run)?;
    if let Some(path) = mirrored_out {
        write_json(path, &routing.mirrored)?;
        provenance::write_sidecar(path, View::Mirrored, &run)?;
    }
    Ok(())
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn plane(segments: u32, seed: u64) -> Result<()> {
    tracing::info!(segments, seed, "plane");
    let grid = Grid::new(segments)?;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut stats = SearchStats::default();
    let plane = discover_plane(&grid, &RouteCfg::default(), &mut rng, &mut stats)?;
    let obj = json!({
        "segments": segments,
        "seed": seed,
        "stats": stats,
        "plane": plane,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "engine": env!("CARGO_PKG_NAME"),
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
