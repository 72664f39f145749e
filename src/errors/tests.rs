//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter {
            character: "@".to_string(),
        },
        Position(10, Rc::new("test.cl".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.cl".to_string()));
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "Semicolon".to_string(),
            found: "}".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_unexpected_token_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "Identifier".to_string(),
            found: "42".to_string(),
        },
        Position(0, Rc::new("test.cl".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
}

#[test]
fn test_duplicate_declaration_error() {
    let error = Error::new(
        ErrorImpl::DuplicateDeclaration {
            variable: "x".to_string(),
        },
        Position(0, Rc::new("test.cl".to_string())),
    );

    assert_eq!(error.get_error_name(), "DuplicateDeclaration");
}

#[test]
fn test_undeclared_variable_error() {
    let error = Error::new(
        ErrorImpl::UndeclaredVariable {
            variable: "foo".to_string(),
        },
        Position(0, Rc::new("test.cl".to_string())),
    );

    assert_eq!(error.get_error_name(), "UndeclaredVariable");
}

#[test]
fn test_mixed_mode_assignment_error() {
    let error = Error::new(
        ErrorImpl::MixedModeAssignment {
            target: "y".to_string(),
            target_type: "bool".to_string(),
            source_type: "int".to_string(),
        },
        Position(0, Rc::new("test.cl".to_string())),
    );

    assert_eq!(error.get_error_name(), "MixedModeAssignment");
}

#[test]
fn test_poorly_typed_test_error() {
    let error = Error::new(
        ErrorImpl::PoorlyTypedTest {
            construct: "if".to_string(),
            test: "x".to_string(),
        },
        Position(0, Rc::new("test.cl".to_string())),
    );

    assert_eq!(error.get_error_name(), "PoorlyTypedTest");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter {
            character: "@".to_string(),
        },
        Position(0, Rc::new("test.cl".to_string())),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "Semicolon".to_string(),
            found: "}".to_string(),
        },
        Position(0, Rc::new("test.cl".to_string())),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_operand_type_error() {
    let error = Error::new(
        ErrorImpl::OperandTypeError {
            operator: "+".to_string(),
            left: "int".to_string(),
            right: "float".to_string(),
        },
        Position(0, Rc::new("test.cl".to_string())),
    );

    assert_eq!(error.get_error_name(), "OperandTypeError");
}

#[test]
fn test_malformed_ast_error() {
    let error = Error::new(
        ErrorImpl::MalformedAst {
            message: "cast operator in binary position".to_string(),
        },
        Position(0, Rc::new("test.cl".to_string())),
    );

    assert_eq!(error.get_error_name(), "MalformedAst");
}
