//! Face-turn notation
//!
//! A move is a face letter optionally followed by `'` (counter-clockwise)
//! or `2` (half turn). Sequences are whitespace-delimited on the wire, e.g.
//! `R U R' U R U2 R'`.

use serde::{Serialize, Serializer};
use thiserror::Error;

use super::cube::Face;

/// Errors that can occur when parsing move notation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveParseError {
    /// Token was empty
    #[error("empty move token")]
    Empty,

    /// First character is not a face letter
    #[error("unknown face in move '{0}'")]
    UnknownFace(String),

    /// Suffix is not `'` or `2`
    #[error("unknown turn suffix in move '{0}'")]
    UnknownSuffix(String),
}

/// How far a face is turned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    /// Quarter turn clockwise (no suffix)
    Clockwise,
    /// Half turn (`2`)
    Double,
    /// Quarter turn counter-clockwise (`'`)
    CounterClockwise,
}

impl Turn {
    const fn suffix(self) -> &'static str {
        match self {
            Self::Clockwise => "",
            Self::Double => "2",
            Self::CounterClockwise => "'",
        }
    }
}

/// A single face turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// Face being turned
    pub face: Face,
    /// Turn amount
    pub turn: Turn,
}

impl Move {
    /// Parse a single token such as `R`, `U'` or `F2`
    pub fn parse(token: &str) -> Result<Self, MoveParseError> {
        let mut chars = token.chars();
        let first = chars.next().ok_or(MoveParseError::Empty)?;
        let face =
            Face::from_char(first).ok_or_else(|| MoveParseError::UnknownFace(token.to_string()))?;

        let turn = match chars.as_str() {
            "" => Turn::Clockwise,
            "2" => Turn::Double,
            "'" => Turn::CounterClockwise,
            _ => return Err(MoveParseError::UnknownSuffix(token.to_string())),
        };

        Ok(Self { face, turn })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.face, self.turn.suffix())
    }
}

impl std::str::FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// An ordered list of moves
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveSequence {
    moves: Vec<Move>,
}

impl MoveSequence {
    /// Parse whitespace-delimited notation; blank input is the empty sequence
    pub fn parse(notation: &str) -> Result<Self, MoveParseError> {
        let moves = notation
            .split_whitespace()
            .map(Move::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { moves })
    }

    /// Number of moves
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Whether the sequence has no moves
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

impl std::fmt::Display for MoveSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, m) in self.moves.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{m}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for MoveSequence {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for MoveSequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
