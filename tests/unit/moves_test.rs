//! Tests for move notation

use cubesolve::core::models::{MoveParseError, MoveSequence};

use crate::common::SCRAMBLED_SOLUTION;

#[test]
fn test_reference_solution_parses() {
    let seq = MoveSequence::parse(SCRAMBLED_SOLUTION).unwrap();
    assert_eq!(seq.len(), 19);
    assert_eq!(seq.to_string(), SCRAMBLED_SOLUTION);
}

#[test]
fn test_count_matches_whitespace_tokens() {
    let notation = "R  U\tR'\nU2";
    let seq = MoveSequence::parse(notation).unwrap();
    assert_eq!(seq.len(), notation.split_whitespace().count());
}

#[test]
fn test_blank_is_empty_sequence() {
    for blank in ["", "   ", "\n"] {
        let seq = MoveSequence::parse(blank).unwrap();
        assert!(seq.is_empty());
        assert_eq!(seq.to_string(), "");
    }
}

#[test]
fn test_first_bad_token_reported() {
    let err = MoveSequence::parse("R U Y F2 Q").unwrap_err();
    assert_eq!(err, MoveParseError::UnknownFace("Y".to_string()));
    assert_eq!(err.to_string(), "unknown face in move 'Y'");
}

#[test]
fn test_serializes_as_notation_string() {
    let seq: MoveSequence = "F R' U2".parse().unwrap();
    assert_eq!(serde_json::to_value(&seq).unwrap(), serde_json::json!("F R' U2"));
}
