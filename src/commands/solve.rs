//! Solve command
//!
//! Runs the same pipeline as `POST /solve` once, against the configured
//! solver, without starting a server.

use std::path::Path;
use std::process::ExitCode;

use cubesolve::adapters::CommandSolver;
use cubesolve::api::{self, SolveRequest};
use cubesolve::config::ServerConfig;
use cubesolve::output::{OutputMode, SolveReport};

/// Validate and solve one cube string
pub fn solve(
    cube: &str,
    config_path: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<ExitCode> {
    let config = ServerConfig::load(config_path)?;
    let solver = CommandSolver::from_config(&config.solver);

    let report = SolveReport::from_result(api::solve(&solver, &SolveRequest::new(cube)));
    report.render(mode);

    Ok(if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
