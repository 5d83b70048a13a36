//! API request and response types
//!
//! All types are framework-agnostic and can be used by any client.

use serde::{Deserialize, Serialize};

use crate::core::models::MoveSequence;

/// Field carrying the facelet string in a solve request
pub const CUBE_STRING_FIELD: &str = "cubeString";

// =============================================================================
// REQUEST TYPES
// =============================================================================

/// Request body for `POST /solve`
///
/// Built from raw bodies by [`super::parse_solve_request`], which maps a JSON
/// `null` to an empty cube string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveRequest {
    /// The 54-character facelet string
    #[serde(rename = "cubeString")]
    pub cube_string: String,
}

impl SolveRequest {
    /// Create a request for a cube string
    #[must_use]
    pub fn new(cube_string: impl Into<String>) -> Self {
        Self {
            cube_string: cube_string.into(),
        }
    }
}

// =============================================================================
// RESPONSE DATA TYPES
// =============================================================================

/// Successful solve response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolveData {
    /// Space-delimited move sequence
    pub solution: MoveSequence,
    /// Number of moves in `solution`
    pub moves: usize,
    /// Seconds spent in the solver, millisecond precision
    pub time: f64,
}

/// Health endpoint response data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthData {
    /// Always `healthy` when the process answers
    pub status: &'static str,
    /// Crate version
    pub version: &'static str,
}
