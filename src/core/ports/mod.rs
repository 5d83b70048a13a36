//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundary between the validation/response logic
//! and the external solver. Implementations live in the `adapters` module.

mod solver;

#[cfg(test)]
pub use solver::MockSolver;
pub use solver::{SolveError, Solver};
