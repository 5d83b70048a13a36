//! Solve pipeline - validated cube in, classified outcome out
//!
//! Invokes the solver exactly once, times the call and folds the result
//! into a [`SolveOutcome`]. No retries: the same input fails the same way.
//! A panic inside the solver is an unexpected failure, not a server fault.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Instant;

use log::{debug, warn};

use crate::core::models::{CubeString, MoveSequence, SolveOutcome};
use crate::core::ports::{SolveError, Solver};

/// Run the solver on a validated cube and classify the result
pub fn run_solver(solver: &dyn Solver, cube: &CubeString) -> SolveOutcome {
    if cube.is_solved() {
        debug!("cube is already solved");
    }

    let started = Instant::now();
    let result = catch_unwind(AssertUnwindSafe(|| solver.solve(cube))).unwrap_or_else(|panic| {
        let message = panic_message(&*panic);
        warn!("solver panicked: {message}");
        Err(SolveError::Failed(message))
    });
    let elapsed = started.elapsed();

    debug!("solver returned after {elapsed:?}");
    classify(result, elapsed)
}

/// Text of a caught panic payload
#[must_use]
pub fn panic_message(panic: &(dyn Any + Send)) -> String {
    panic
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "panic with a non-string payload".to_string())
}

/// Fold a raw solver result into an outcome
///
/// Notation the solver returns that does not parse as moves counts as an
/// unexpected failure.
#[must_use]
pub fn classify(
    result: Result<String, SolveError>,
    elapsed: std::time::Duration,
) -> SolveOutcome {
    match result {
        Ok(notation) => match MoveSequence::parse(&notation) {
            Ok(moves) => SolveOutcome::Success { moves, elapsed },
            Err(e) => SolveOutcome::UnexpectedFailure(format!(
                "Solver returned unreadable moves '{}': {e}",
                notation.trim()
            )),
        },
        Err(SolveError::Unreachable(message)) => SolveOutcome::DomainFailure(message),
        Err(SolveError::Failed(message)) => SolveOutcome::UnexpectedFailure(message),
    }
}
