//! Cube string validation
//!
//! Structural checks run before anything is handed to the solver. The
//! checks short-circuit in a fixed order so the diagnostic always names the
//! first rule that failed:
//!
//! 1. presence
//! 2. length (54 characters)
//! 3. alphabet (`U R F D L B`)
//! 4. nine facelets per label
//!
//! Nine of each label is necessary but not sufficient for a reachable
//! cube; parity is left to the solver.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::core::models::{CubeString, FACELET_COUNT, FACELETS_PER_FACE, Face};

/// Which validation rule failed, with the offending data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Nothing was supplied
    #[error("Cube string is empty")]
    EmptyInput,

    /// Character count is not 54
    #[error("Cube string must be exactly 54 characters, got {actual}")]
    WrongLength {
        /// Observed character count
        actual: usize,
    },

    /// Characters outside the face alphabet
    #[error(
        "Invalid color characters: {}. Valid colors are: {}",
        format_symbols(.symbols),
        format_alphabet()
    )]
    InvalidSymbols {
        /// Distinct offending characters, sorted
        symbols: BTreeSet<char>,
    },

    /// One or more labels do not appear exactly nine times
    #[error(
        "Each color must appear exactly 9 times: {}",
        format_counts(.counts)
    )]
    WrongColorCount {
        /// Every offending label with its observed count, in face order
        counts: Vec<(Face, usize)>,
    },
}

impl ValidationError {
    /// Stable name of the failed rule
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::EmptyInput => "EmptyInput",
            Self::WrongLength { .. } => "WrongLength",
            Self::InvalidSymbols { .. } => "InvalidSymbols",
            Self::WrongColorCount { .. } => "WrongColorCount",
        }
    }
}

fn format_symbols(symbols: &BTreeSet<char>) -> String {
    symbols
        .iter()
        .map(|c| format!("'{}'", c.escape_default()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_alphabet() -> String {
    Face::ALL
        .iter()
        .map(|f| f.as_char().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_counts(counts: &[(Face, usize)]) -> String {
    counts
        .iter()
        .map(|(face, n)| format!("'{face}' appears {n} times"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Validate a raw facelet string
///
/// Returns the parsed [`CubeString`] when all four checks pass.
///
/// # Examples
///
/// ```
/// use cubesolve::core::models::SOLVED;
/// use cubesolve::core::services::{validate, ValidationError};
///
/// assert!(validate(SOLVED).is_ok());
/// assert_eq!(validate(""), Err(ValidationError::EmptyInput));
/// assert_eq!(validate("UUU"), Err(ValidationError::WrongLength { actual: 3 }));
/// ```
pub fn validate(input: &str) -> Result<CubeString, ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    let actual = input.chars().count();
    if actual != FACELET_COUNT {
        return Err(ValidationError::WrongLength { actual });
    }

    let symbols: BTreeSet<char> = input
        .chars()
        .filter(|c| Face::from_char(*c).is_none())
        .collect();
    if !symbols.is_empty() {
        return Err(ValidationError::InvalidSymbols { symbols });
    }

    let mut facelets = [Face::U; FACELET_COUNT];
    let mut tally = [0usize; 6];
    for (slot, c) in facelets.iter_mut().zip(input.chars()) {
        // Alphabet already checked above
        if let Some(face) = Face::from_char(c) {
            *slot = face;
            tally[face.index()] += 1;
        }
    }

    let counts: Vec<(Face, usize)> = Face::ALL
        .iter()
        .map(|face| (*face, tally[face.index()]))
        .filter(|(_, n)| *n != FACELETS_PER_FACE)
        .collect();
    if !counts.is_empty() {
        return Err(ValidationError::WrongColorCount { counts });
    }

    Ok(CubeString::from_facelets(facelets))
}
