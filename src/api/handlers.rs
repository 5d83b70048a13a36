//! Pure API handlers
//!
//! These handlers contain the request pipeline and are HTTP-agnostic.
//! They take typed input and return `Result<T, ApiError>`.

use log::{debug, warn};
use serde_json::Value;

use crate::core::models::{SolveOutcome, seconds_rounded};
use crate::core::ports::Solver;
use crate::core::services::{run_solver, validate};

use super::error::ApiError;
use super::types::{CUBE_STRING_FIELD, HealthData, SolveData, SolveRequest};

/// Explanation sent when the solver rejects a structurally valid cube
pub const UNREACHABLE_STATE_DETAILS: &str = "The cube state is physically impossible. Every color \
     appears exactly 9 times, but the facelets do not form a reachable cube: check corner and \
     edge orientation and permutation parity (for example, two swapped stickers or a twisted \
     corner).";

// =============================================================================
// REQUEST PARSING
// =============================================================================

/// Extract a solve request from a raw body
///
/// Fails with a malformed-request error when the body is missing, is not a
/// JSON object, or has no usable `cubeString` field.
pub fn parse_solve_request(body: Option<&str>) -> Result<SolveRequest, ApiError> {
    let body = body
        .map(str::trim)
        .filter(|b| !b.is_empty())
        .ok_or_else(|| ApiError::malformed("Missing request body"))?;

    let value: Value = serde_json::from_str(body)
        .map_err(|e| ApiError::malformed(format!("Invalid JSON: {e}")))?;

    let Value::Object(fields) = value else {
        return Err(ApiError::malformed("Request body must be a JSON object"));
    };

    match fields.get(CUBE_STRING_FIELD) {
        None => Err(ApiError::malformed(format!(
            "Missing '{CUBE_STRING_FIELD}' field in request body"
        ))),
        Some(Value::Null) => Ok(SolveRequest::new("")),
        Some(Value::String(s)) => Ok(SolveRequest::new(s.as_str())),
        Some(_) => Err(ApiError::malformed(format!(
            "'{CUBE_STRING_FIELD}' must be a string"
        ))),
    }
}

// =============================================================================
// SOLVE
// =============================================================================

/// Validate a cube string and solve it
///
/// The solver is only called once validation has passed.
pub fn solve(solver: &dyn Solver, req: &SolveRequest) -> Result<SolveData, ApiError> {
    let cube = validate(&req.cube_string).map_err(|e| {
        debug!("rejected cube string ({}): {e}", e.kind());
        ApiError::from(e)
    })?;

    respond(run_solver(solver, &cube))
}

/// Parse a raw body, then validate and solve
pub fn solve_body(solver: &dyn Solver, body: Option<&str>) -> Result<SolveData, ApiError> {
    let req = parse_solve_request(body)?;
    solve(solver, &req)
}

/// Turn a classified outcome into response data or an API error
pub fn respond(outcome: SolveOutcome) -> Result<SolveData, ApiError> {
    match outcome {
        SolveOutcome::Success { moves, elapsed } => Ok(SolveData {
            moves: moves.len(),
            solution: moves,
            time: seconds_rounded(elapsed),
        }),
        SolveOutcome::DomainFailure(message) => {
            warn!("solver rejected cube state: {message}");
            Err(ApiError::invalid_cube_state(UNREACHABLE_STATE_DETAILS))
        },
        SolveOutcome::UnexpectedFailure(message) => {
            warn!("solve failed: {message}");
            Err(ApiError::solve_failed(message))
        },
    }
}

// =============================================================================
// HEALTH
// =============================================================================

/// Liveness check payload
#[must_use]
pub const fn health() -> HealthData {
    HealthData {
        status: "healthy",
        version: crate::VERSION,
    }
}
