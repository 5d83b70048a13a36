//! API error types with HTTP status code mapping

use serde::Serialize;

use crate::core::services::ValidationError;

/// Error categories that map to HTTP status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Body missing, not JSON, or lacking `cubeString` (400)
    MalformedRequest,
    /// Cube string failed validation (400)
    InvalidCubeString,
    /// Solver reports the cube state is unreachable (400)
    InvalidCubeState,
    /// Solver failed for any other reason (400)
    SolveFailed,
    /// Unknown route (404)
    NotFound,
    /// Known route, wrong method (405)
    MethodNotAllowed,
    /// Fault outside the validate/solve pipeline (500)
    Internal,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn status_code(self) -> u16 {
        match self {
            Self::MalformedRequest
            | Self::InvalidCubeString
            | Self::InvalidCubeState
            | Self::SolveFailed => 400,
            Self::NotFound => 404,
            Self::MethodNotAllowed => 405,
            Self::Internal => 500,
        }
    }

    /// Get the error code string
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MalformedRequest => "MALFORMED_REQUEST",
            Self::InvalidCubeString => "INVALID_CUBE_STRING",
            Self::InvalidCubeState => "INVALID_CUBE_STATE",
            Self::SolveFailed => "SOLVE_FAILED",
            Self::NotFound => "NOT_FOUND",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::Internal => "INTERNAL_ERROR",
        }
    }

    /// Human-readable category label sent as `error`
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MalformedRequest => "Invalid request",
            Self::InvalidCubeString => "Invalid cube string",
            Self::InvalidCubeState => "Invalid cube state",
            Self::SolveFailed => "Cube solving failed",
            Self::NotFound => "Not found",
            Self::MethodNotAllowed => "Method not allowed",
            Self::Internal => "Internal server error",
        }
    }
}

/// API error with category and diagnostic
#[derive(Debug, Clone)]
pub struct ApiError {
    /// Error category (determines HTTP status)
    pub code: ErrorCode,
    /// Diagnostic detail for the caller
    pub message: String,
}

impl ApiError {
    const fn new(code: ErrorCode, message: String) -> Self {
        Self { code, message }
    }

    /// Create a malformed request error
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MalformedRequest, message.into())
    }

    /// Create an invalid cube string error
    #[must_use]
    pub fn invalid_cube_string(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidCubeString, message.into())
    }

    /// Create an invalid cube state error
    #[must_use]
    pub fn invalid_cube_state(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidCubeState, message.into())
    }

    /// Create a solve failure error
    #[must_use]
    pub fn solve_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SolveFailed, message.into())
    }

    /// Create a not found error
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message.into())
    }

    /// Create a method not allowed error
    #[must_use]
    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MethodNotAllowed, message.into())
    }

    /// Create an internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Internal, message.into())
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.code.status_code()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::invalid_cube_string(err.to_string())
    }
}

/// Serializable error body
///
/// ```json
/// {"error": "Invalid cube string", "code": "INVALID_CUBE_STRING", "details": "..."}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    /// Category label
    pub error: String,
    /// Machine-readable category
    pub code: String,
    /// Diagnostic detail
    pub details: String,
}

impl From<&ApiError> for ErrorBody {
    fn from(err: &ApiError) -> Self {
        Self {
            error: err.code.label().to_string(),
            code: err.code.as_str().to_string(),
            details: err.message.clone(),
        }
    }
}
