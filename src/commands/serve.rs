//! Serve command
//!
//! Loads the configuration once, binds the listener and runs the worker pool.

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use log::info;

use cubesolve::adapters::CommandSolver;
use cubesolve::config::ServerConfig;
use cubesolve::server::Router;
use cubesolve::server::tiny_http as http;

/// Start the HTTP server
pub fn serve(
    config_path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
    workers: Option<usize>,
) -> anyhow::Result<ExitCode> {
    let config = ServerConfig::load(config_path)?.with_overrides(host, port, workers);
    config.validate()?;

    let solver = CommandSolver::from_config(&config.solver);
    info!("using solver '{}'", solver.program());

    let addr = config.bind_addr();
    let workers = config.server.workers;
    let router = Arc::new(Router::new(Arc::new(config), Arc::new(solver)));

    let server = http::bind(&addr)?;
    info!("listening on http://{addr}");
    info!("POST /solve with {{\"cubeString\": \"...\"}}; GET /health for liveness");

    http::serve(&server, &router, workers)?;
    Ok(ExitCode::SUCCESS)
}
