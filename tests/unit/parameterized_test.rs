//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use cubesolve::api::ErrorCode;
use cubesolve::core::models::{Face, Move, SOLVED, Turn};
use cubesolve::core::services::validate;
use test_case::test_case;

// =============================================================================
// Validator Rule Tests
// =============================================================================

#[test_case("", "EmptyInput" ; "empty string")]
#[test_case("U", "WrongLength" ; "single facelet")]
#[test_case(&SOLVED[..53], "WrongLength" ; "one short")]
#[test_case(&format!("{SOLVED}U"), "WrongLength" ; "one long")]
#[test_case(&format!("{}Z", &SOLVED[..53]), "InvalidSymbols" ; "trailing bad symbol")]
#[test_case(&format!(" {}", &SOLVED[1..]), "InvalidSymbols" ; "leading space")]
#[test_case(&format!("R{}", &SOLVED[1..]), "WrongColorCount" ; "one label too many")]
#[test_case(SOLVED, "Valid" ; "solved cube")]
fn test_rule_selected(input: &str, expected: &str) {
    let kind = match validate(input) {
        Ok(_) => "Valid",
        Err(e) => e.kind(),
    };
    assert_eq!(kind, expected, "input={input:?}");
}

// =============================================================================
// Move Notation Tests
// =============================================================================

#[test_case("U", Face::U, Turn::Clockwise ; "plain up")]
#[test_case("R'", Face::R, Turn::CounterClockwise ; "right prime")]
#[test_case("F2", Face::F, Turn::Double ; "front double")]
#[test_case("D", Face::D, Turn::Clockwise ; "plain down")]
#[test_case("L'", Face::L, Turn::CounterClockwise ; "left prime")]
#[test_case("B2", Face::B, Turn::Double ; "back double")]
fn test_move_parsing(token: &str, face: Face, turn: Turn) {
    assert_eq!(Move::parse(token).unwrap(), Move { face, turn });
}

#[test_case("" ; "empty")]
#[test_case("X" ; "unknown face")]
#[test_case("r" ; "lowercase face")]
#[test_case("R2'" ; "stacked suffix")]
#[test_case("R3" ; "bad amount")]
fn test_move_rejected(token: &str) {
    assert!(Move::parse(token).is_err());
}

// =============================================================================
// Error Code Tests
// =============================================================================

#[test_case(ErrorCode::MalformedRequest, 400, "Invalid request" ; "malformed")]
#[test_case(ErrorCode::InvalidCubeString, 400, "Invalid cube string" ; "invalid string")]
#[test_case(ErrorCode::InvalidCubeState, 400, "Invalid cube state" ; "invalid state")]
#[test_case(ErrorCode::SolveFailed, 400, "Cube solving failed" ; "solve failed")]
#[test_case(ErrorCode::NotFound, 404, "Not found" ; "not found")]
#[test_case(ErrorCode::MethodNotAllowed, 405, "Method not allowed" ; "wrong method")]
#[test_case(ErrorCode::Internal, 500, "Internal server error" ; "internal")]
fn test_error_code_mapping(code: ErrorCode, status: u16, label: &str) {
    assert_eq!(code.status_code(), status);
    assert_eq!(code.label(), label);
}
