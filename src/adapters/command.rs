//! Process-backed solver adapter
//!
//! Implements `Solver` by running an external two-phase solver executable.
//! The cube string is passed as the final argument; the solution is read
//! from stdout.
//!
//! Exit status contract:
//! - `0` - stdout holds the move sequence
//! - `unreachable_exit_code` - the cube state is physically impossible
//! - anything else - failure
//!
//! Without a configured `unreachable_exit_code`, failures are classified by
//! message instead (see [`looks_unreachable`]).

use std::process::Command;

use log::{debug, warn};

use crate::config::SolverConfig;
use crate::core::models::CubeString;
use crate::core::ports::{SolveError, Solver};

/// Message fragments that solvers use for impossible cube states
const UNREACHABLE_MARKERS: [&str; 3] = ["invalid", "cubestring", "unsolvable"];

/// Solver that shells out to an executable
#[derive(Debug, Clone)]
pub struct CommandSolver {
    program: String,
    args: Vec<String>,
    unreachable_exit_code: Option<i32>,
}

impl CommandSolver {
    /// Create a solver for `program` with leading `args`
    #[must_use]
    pub const fn new(
        program: String,
        args: Vec<String>,
        unreachable_exit_code: Option<i32>,
    ) -> Self {
        Self {
            program,
            args,
            unreachable_exit_code,
        }
    }

    /// Build from the `[solver]` config section
    #[must_use]
    pub fn from_config(config: &SolverConfig) -> Self {
        Self::new(
            config.program.clone(),
            config.args.clone(),
            config.unreachable_exit_code,
        )
    }

    /// Executable that will be run
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    // Message text is only classified when no exit-code contract is set
    fn classify_failure(&self, message: String) -> SolveError {
        if self.unreachable_exit_code.is_some() {
            SolveError::Failed(message)
        } else {
            classify_message(message)
        }
    }
}

impl Solver for CommandSolver {
    fn solve(&self, cube: &CubeString) -> Result<String, SolveError> {
        debug!("running solver: {} {:?} <cube>", self.program, self.args);

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(cube.to_string())
            .output()
            .map_err(|e| {
                SolveError::Failed(format!("Failed to run solver '{}': {e}", self.program))
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        if output.status.success() {
            // Some solvers exit 0 and print an error line instead of moves
            if stdout.starts_with("Error") {
                return Err(self.classify_failure(stdout));
            }
            return Ok(stdout);
        }

        let message = if stderr.is_empty() { stdout } else { stderr };
        let message = if message.is_empty() {
            format!("Solver exited with {}", output.status)
        } else {
            message
        };

        if self.unreachable_exit_code.is_some()
            && output.status.code() == self.unreachable_exit_code
        {
            return Err(SolveError::Unreachable(message));
        }

        warn!("solver failed ({}): {message}", output.status);
        Err(self.classify_failure(message))
    }
}

/// Classify a free-form solver error message
///
/// Message text is not a stable interface; this is only consulted when no
/// `unreachable_exit_code` is configured.
#[must_use]
pub fn classify_message(message: String) -> SolveError {
    if looks_unreachable(&message) {
        SolveError::Unreachable(message)
    } else {
        SolveError::Failed(message)
    }
}

/// Whether a message reads like an impossible-state report
#[must_use]
pub fn looks_unreachable(message: &str) -> bool {
    let lower = message.to_lowercase();
    UNREACHABLE_MARKERS.iter().any(|m| lower.contains(m))
}
