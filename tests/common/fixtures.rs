//! Cube strings with known properties

use cubesolve::core::models::SOLVED;

/// A reachable scramble (from the two-phase solver's documentation)
pub const SCRAMBLED: &str = "DRLUUBFBRBLURRLRUBLRDDFDLFUFUFFDBRDUBRUFLLFDDBFLUBLRBD";

/// Solution the reference solver prints for [`SCRAMBLED`]
pub const SCRAMBLED_SOLUTION: &str = "D2 R' D' F2 B D R2 D2 R' F2 D' F2 U' B2 L2 U2 D R2 U";

/// Solved cube with the U-F edge flipped in place
///
/// Every label still appears nine times, but a single flipped edge is
/// unreachable by legal moves.
#[must_use]
pub fn flipped_edge() -> String {
    swap_facelets(SOLVED, 7, 19)
}

/// Swap two facelets by index
#[must_use]
pub fn swap_facelets(cube: &str, a: usize, b: usize) -> String {
    let mut chars: Vec<char> = cube.chars().collect();
    chars.swap(a, b);
    chars.into_iter().collect()
}

/// Replace the facelet at `index`
#[must_use]
pub fn set_facelet(cube: &str, index: usize, label: char) -> String {
    let mut chars: Vec<char> = cube.chars().collect();
    chars[index] = label;
    chars.into_iter().collect()
}

/// JSON body for a solve request
#[must_use]
pub fn solve_body(cube: &str) -> String {
    serde_json::json!({ "cubeString": cube }).to_string()
}
