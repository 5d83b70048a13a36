//! Facelet model for a 3x3 cube
//!
//! A cube is serialized as 54 facelet labels, nine per face, faces in the
//! order `U R F D L B`. Within a face the facelets run left-to-right,
//! top-to-bottom.
//!
//! ```text
//!              |************|
//!              |*U1**U2**U3*|
//!              |*U4**U5**U6*|
//!              |*U7**U8**U9*|
//! |************|************|************|************|
//! |*L1**L2**L3*|*F1**F2**F3*|*R1**R2**R3*|*B1**B2**B3*|
//! |*L4**L5**L6*|*F4**F5**F6*|*R4**R5**R6*|*B4**B5**B6*|
//! |*L7**L8**L9*|*F7**F8**F9*|*R7**R8**R9*|*B7**B8**B9*|
//! |************|************|************|************|
//!              |*D1**D2**D3*|
//!              |*D4**D5**D6*|
//!              |*D7**D8**D9*|
//! ```

use serde::{Deserialize, Serialize};

/// Number of facelets in a cube string
pub const FACELET_COUNT: usize = 54;

/// Number of facelets carrying each label
pub const FACELETS_PER_FACE: usize = 9;

/// The solved cube in `U R F D L B` order
pub const SOLVED: &str = "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";

/// One of the six face labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Face {
    /// Up
    U,
    /// Right
    R,
    /// Front
    F,
    /// Down
    D,
    /// Left
    L,
    /// Back
    B,
}

impl Face {
    /// All faces in serialization order
    pub const ALL: [Self; 6] = [Self::U, Self::R, Self::F, Self::D, Self::L, Self::B];

    /// Parse a single label character (case-sensitive)
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'U' => Some(Self::U),
            'R' => Some(Self::R),
            'F' => Some(Self::F),
            'D' => Some(Self::D),
            'L' => Some(Self::L),
            'B' => Some(Self::B),
            _ => None,
        }
    }

    /// The label character
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::U => 'U',
            Self::R => 'R',
            Self::F => 'F',
            Self::D => 'D',
            Self::L => 'L',
            Self::B => 'B',
        }
    }

    /// Position of this face in the serialization order
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A facelet string that passed validation
///
/// Only [`crate::core::services::validate`] constructs one, so holding a
/// `CubeString` means length, alphabet and per-label counts are correct.
#[allow(missing_copy_implementations)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CubeString {
    facelets: [Face; FACELET_COUNT],
}

impl CubeString {
    pub(crate) const fn from_facelets(facelets: [Face; FACELET_COUNT]) -> Self {
        Self { facelets }
    }

    /// Whether every face shows a single label
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.facelets
            .chunks(FACELETS_PER_FACE)
            .all(|face| face.iter().all(|f| *f == face[0]))
    }
}

impl std::fmt::Display for CubeString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for face in &self.facelets {
            write!(f, "{}", face.as_char())?;
        }
        Ok(())
    }
}
