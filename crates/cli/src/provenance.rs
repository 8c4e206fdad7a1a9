//! `<artifact>.provenance.json` sidecars for routing outputs.
//!
//! A sidecar names the code revision and callsite that produced the file and
//! repeats what is needed to replay the run: request, seed, budgets, and the
//! face assignment the search settled on.

use anyhow::{Context, Result};
use cuberoute::{Routing, RouteCfg, RouteRequest, SearchStats};
use serde::Serialize;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Which of the two routing views an artifact holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Primary,
    Mirrored,
}

/// Replay information for one routing run.
#[derive(Clone, Debug, Serialize)]
pub struct RunRecord<'a> {
    pub request: &'a RouteRequest,
    pub cfg: &'a RouteCfg,
    pub seed: u64,
    pub assignment: [usize; 6],
    pub stats: SearchStats,
}

impl<'a> RunRecord<'a> {
    pub fn new(request: &'a RouteRequest, cfg: &'a RouteCfg, routing: &Routing) -> Self {
        Self {
            request,
            cfg,
            seed: routing.seed,
            assignment: routing.assignment,
            stats: routing.stats,
        }
    }
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Serialize)]
struct Sidecar<'a> {
    code_rev: String,
    engine_version: &'static str,
    callsite: Callsite,
    view: View,
    run: &'a RunRecord<'a>,
    outputs: [String; 1],
}

/// Write the sidecar for `artifact` and return its path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, view: View, run: &RunRecord) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let path = sidecar_path(artifact)?;
    let callsite = Location::caller();
    let doc = Sidecar {
        code_rev: current_git_rev(),
        engine_version: env!("CARGO_PKG_VERSION"),
        callsite: Callsite {
            file: callsite.file(),
            line: callsite.line(),
        },
        view,
        run,
        outputs: [artifact.to_string_lossy().into_owned()],
    };
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// `out/routing.json` -> `out/routing.provenance.json`.
fn sidecar_path(artifact: &Path) -> Result<PathBuf> {
    let stem = artifact
        .file_stem()
        .with_context(|| format!("artifact path {} has no file name", artifact.display()))?;
    let mut name = stem.to_os_string();
    name.push(".provenance.json");
    Ok(artifact.with_file_name(name))
}

pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty())
        .or_else(|| {
            Command::new("git")
                .args(["rev-parse", "HEAD"])
                .output()
                .ok()
                .filter(|output| output.status.success())
                .and_then(|output| String::from_utf8(output.stdout).ok())
                .map(|s| s.trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}
