//! Domain models for cubesolve
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`CubeString`] - A validated 54-facelet cube description
//! - [`Face`] - One of the six face labels
//! - [`MoveSequence`] - Face-turn notation returned by the solver
//! - [`SolveOutcome`] - What happened when the solver was asked

mod cube;
mod moves;
mod outcome;

pub use cube::{CubeString, FACELET_COUNT, FACELETS_PER_FACE, Face, SOLVED};
pub use moves::{Move, MoveParseError, MoveSequence, Turn};
pub use outcome::{SolveOutcome, seconds_rounded};
