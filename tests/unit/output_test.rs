//! Tests for CLI output reports

use cubesolve::api::{ApiError, SolveData};
use cubesolve::core::models::{MoveSequence, SOLVED};
use cubesolve::core::services::validate;
use cubesolve::output::{OutputMode, SolveReport, ValidateReport};

#[test]
fn test_output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn test_validate_report_valid() {
    let report = ValidateReport::from_result(&validate(SOLVED));
    assert!(report.valid);
    assert_eq!(
        serde_json::to_value(&report).unwrap(),
        serde_json::json!({ "valid": true })
    );
}

#[test]
fn test_validate_report_invalid() {
    let report = ValidateReport::from_result(&validate("UUU"));
    assert!(!report.valid);
    assert_eq!(report.rule.as_deref(), Some("WrongLength"));

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["valid"], false);
    assert_eq!(json["rule"], "WrongLength");
    assert_eq!(json["message"], "Cube string must be exactly 54 characters, got 3");
}

#[test]
fn test_solve_report_success() {
    let report = SolveReport::from_result(Ok(SolveData {
        solution: MoveSequence::parse("R U2 F'").unwrap(),
        moves: 3,
        time: 0.012,
    }));
    assert!(report.is_success());

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["solution"], "R U2 F'");
    assert_eq!(json["moves"], 3);
}

#[test]
fn test_solve_report_failure_uses_error_body() {
    let report = SolveReport::from_result(Err(ApiError::solve_failed("tables missing")));
    assert!(!report.is_success());

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["error"], "Cube solving failed");
    assert_eq!(json["code"], "SOLVE_FAILED");
    assert_eq!(json["details"], "tables missing");
}
