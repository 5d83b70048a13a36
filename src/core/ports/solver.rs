//! Solver port
//!
//! Defines the interface to the external two-phase solver.

use thiserror::Error;

use super::super::models::CubeString;

/// Why the solver could not produce a solution
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The facelets are well-formed but no physical cube looks like this
    #[error("unreachable cube state: {0}")]
    Unreachable(String),

    /// Anything else went wrong while solving
    #[error("{0}")]
    Failed(String),
}

/// External cube solver
///
/// Implementations receive only validated input and return the move
/// sequence as whitespace-delimited notation. An already solved cube may
/// yield an empty string.
#[cfg_attr(test, mockall::automock)]
pub trait Solver: Send + Sync {
    /// Solve a cube, returning move notation
    fn solve(&self, cube: &CubeString) -> Result<String, SolveError>;
}
