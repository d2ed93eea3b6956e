//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

fn at(offset: u32) -> Position {
    Position(offset, Rc::new("test.c".to_string()))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        at(10),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().0, 10);
}

#[test]
fn test_error_display_includes_position() {
    let error = Error::new(
        ErrorImpl::VariableNotDeclared {
            variable: "y".to_string(),
        },
        at(42),
    );

    assert_eq!(error.to_string(), "variable \"y\" not declared at test.c:42");
}

#[test]
fn test_function_already_declared_error() {
    let error = Error::new(
        ErrorImpl::FunctionAlreadyDeclared {
            function: "f".to_string(),
            declared: 1,
            found: 2,
        },
        at(0),
    );

    assert_eq!(error.get_error_name(), "FunctionAlreadyDeclared");
    assert_eq!(
        error.get_diagnostic().to_string(),
        "function \"f\" already declared with 1 parameters, found 2"
    );
}

#[test]
fn test_argument_count_mismatch_tip() {
    let error = Error::new(
        ErrorImpl::ArgumentCountMismatch {
            function: "printnum".to_string(),
            expected: 1,
            received: 3,
        },
        at(0),
    );

    assert_eq!(error.get_error_name(), "ArgumentCountMismatch");
    assert_eq!(error.get_tip().to_string(), "Expected 1 arguments, received 3");
}

#[test]
fn test_missing_return_error() {
    let error = Error::new(
        ErrorImpl::MissingReturn {
            function: "main".to_string(),
        },
        at(0),
    );

    assert_eq!(error.get_error_name(), "MissingReturn");
    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("main")),
        ErrorTip::None => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_unrecognised_token_has_no_tip() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "#".to_string(),
        },
        at(0),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_resource_limit_errors() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 128 }, at(7));
    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(error.get_tip().to_string(), "Calls may be nested at most 128 deep");
    assert_eq!(error.to_string(), "calls nested deeper than 128 at test.c:7");

    let error = Error::new(ErrorImpl::UnterminatedComment, at(3));
    assert_eq!(error.get_error_name(), "UnterminatedComment");
    assert!(error.get_tip().to_string().contains("*/"));
}
