//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::api::{ApiError, ErrorBody, SolveData};
use crate::core::services::ValidationError;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a validate command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidateReport {
    /// Whether all checks passed
    pub valid: bool,
    /// Name of the failed rule
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    /// Diagnostic for a failed rule
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ValidateReport {
    /// Build a report from a validation result
    #[must_use]
    pub fn from_result<T>(result: &Result<T, ValidationError>) -> Self {
        match result {
            Ok(_) => Self {
                valid: true,
                rule: None,
                message: None,
            },
            Err(e) => Self {
                valid: false,
                rule: Some(e.kind().to_string()),
                message: Some(e.to_string()),
            },
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.valid {
            println!("{} cube string is valid", "✓".green());
        } else {
            println!(
                "{} {} ({})",
                "✗".red(),
                self.message.as_deref().unwrap_or("invalid"),
                self.rule.as_deref().unwrap_or("unknown").dimmed()
            );
        }
    }
}

/// Result of a solve command
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SolveReport {
    /// Solver produced a move sequence
    Solved(SolveData),
    /// Request was rejected
    Failed(ErrorBody),
}

impl SolveReport {
    /// Build a report from a handler result
    #[must_use]
    pub fn from_result(result: Result<SolveData, ApiError>) -> Self {
        match result {
            Ok(data) => Self::Solved(data),
            Err(e) => Self::Failed(ErrorBody::from(&e)),
        }
    }

    /// Whether the solve succeeded
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Solved(_))
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        match self {
            Self::Solved(data) if data.solution.is_empty() => {
                println!("{} already solved ({:.3}s)", "✓".green(), data.time);
            },
            Self::Solved(data) => {
                println!(
                    "{} {} move(s) in {:.3}s",
                    "✓".green(),
                    data.moves,
                    data.time
                );
                println!("  {}", data.solution.to_string().bold());
            },
            Self::Failed(err) => {
                println!("{} {}: {}", "✗".red(), err.error, err.details);
            },
        }
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
