//! Business logic services
//!
//! Pure orchestration logic that operates on domain models.
//!
//! - [`validator`] - Structural checks on raw cube strings
//! - [`pipeline`] - Invoke the solver and classify what comes back

pub mod pipeline;
pub mod validator;

pub use pipeline::{classify, panic_message, run_solver};
pub use validator::{ValidationError, validate};
