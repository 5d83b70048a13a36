//! CLI definitions and entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::commands;
use cubesolve::output::OutputMode;

/// cubesolve - Validate and solve 3x3 cube facelet strings
#[derive(Parser, Debug)]
#[command(
    name = "cubesolve",
    version,
    about = "Validate and solve 3x3 cube facelet strings",
    long_about = "Serve a JSON API that validates 54-character cube strings and\n\
                  returns a move sequence from an external two-phase solver.\n\n\
                  Facelets are given in U R F D L B face order, nine per face."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Config file (defaults to $CUBESOLVE_CONFIG or ~/.config/cubesolve/config.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Interface to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Number of worker threads
        #[arg(short, long)]
        workers: Option<usize>,
    },

    /// Check a cube string without solving it
    Validate {
        /// 54-character cube string
        cube: String,
    },

    /// Solve a cube string with the configured solver
    Solve {
        /// 54-character cube string
        cube: String,

        /// Config file (defaults to $CUBESOLVE_CONFIG or ~/.config/cubesolve/config.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Serve {
            config,
            host,
            port,
            workers,
        }) => commands::serve(config.as_deref(), host, port, workers),
        Some(Command::Validate { cube }) => Ok(commands::validate(&cube, output_mode)),
        Some(Command::Solve { cube, config }) => {
            commands::solve(&cube, config.as_deref(), output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("cubesolve v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(ExitCode::SUCCESS)
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("cubesolve v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'cubesolve --help' for usage");
                println!("Run 'cubesolve serve' to start the API");
            }
            Ok(ExitCode::SUCCESS)
        },
    }
}
