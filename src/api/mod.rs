//! HTTP-agnostic API layer
//!
//! This module provides typed request/response structures and the request
//! pipeline as pure handlers that any HTTP server implementation can call.
//!
//! ## Design
//!
//! - **Handlers are pure functions**: Take typed input, return `Result<T, ApiError>`
//! - **Types are framework-agnostic**: No HTTP types leak into this module
//! - **Errors carry HTTP semantics**: `ApiError` knows its status code and label

mod error;
mod handlers;
mod types;

pub use error::{ApiError, ErrorBody, ErrorCode};
pub use handlers::{
    UNREACHABLE_STATE_DETAILS, health, parse_solve_request, respond, solve, solve_body,
};
pub use types::{CUBE_STRING_FIELD, HealthData, SolveData, SolveRequest};
