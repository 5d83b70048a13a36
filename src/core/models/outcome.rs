//! Result of asking the solver for a solution

use std::time::Duration;

use super::moves::MoveSequence;

/// Classified outcome of one solve attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// The solver produced a move sequence
    Success {
        /// Moves that restore the cube
        moves: MoveSequence,
        /// Wall-clock time spent in the solver
        elapsed: Duration,
    },
    /// Well-formed input that does not describe a reachable cube
    DomainFailure(String),
    /// Any other solver fault
    UnexpectedFailure(String),
}

/// Seconds rounded to millisecond precision
#[must_use]
pub fn seconds_rounded(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 1000.0).round() / 1000.0
}
