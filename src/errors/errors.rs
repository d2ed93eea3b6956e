use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// The single failure type of the front end.
///
/// Every grammar rule fails with this type and callers never branch on the
/// diagnostic inside it: a failure only means "this alternative did not
/// match". `ErrorImpl` exists for the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} at {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_diagnostic(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnterminatedComment => "UnterminatedComment",
            ErrorImpl::SourceTooLarge { .. } => "SourceTooLarge",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnsupportedUnaryMinus => "UnsupportedUnaryMinus",
            ErrorImpl::ParameterAlreadyDeclared { .. } => "ParameterAlreadyDeclared",
            ErrorImpl::VariableAlreadyDeclared { .. } => "VariableAlreadyDeclared",
            ErrorImpl::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorImpl::FunctionAlreadyDeclared { .. } => "FunctionAlreadyDeclared",
            ErrorImpl::FunctionAlreadyDefined { .. } => "FunctionAlreadyDefined",
            ErrorImpl::FunctionNotDeclared { .. } => "FunctionNotDeclared",
            ErrorImpl::ArgumentCountMismatch { .. } => "ArgumentCountMismatch",
            ErrorImpl::MissingReturn { .. } => "MissingReturn",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedComment => {
                ErrorTip::Suggestion(String::from("Block comment is missing its closing `*/`"))
            }
            ErrorImpl::SourceTooLarge { limit } => {
                ErrorTip::Suggestion(format!("Source files are limited to {} bytes", limit))
            }
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::UnsupportedUnaryMinus => ErrorTip::Suggestion(String::from(
                "Negative literals are not supported, write `0 - x` instead",
            )),
            ErrorImpl::ParameterAlreadyDeclared { parameter } => {
                ErrorTip::Suggestion(format!("Parameter `{}` appears twice", parameter))
            }
            ErrorImpl::VariableAlreadyDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` already declared", variable))
            }
            ErrorImpl::VariableNotDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` not declared", variable))
            }
            ErrorImpl::FunctionAlreadyDeclared { function, .. } => ErrorTip::Suggestion(format!(
                "Function `{}` already declared with a different signature",
                function
            )),
            ErrorImpl::FunctionAlreadyDefined { function } => {
                ErrorTip::Suggestion(format!("Function `{}` already defined", function))
            }
            ErrorImpl::FunctionNotDeclared { function } => ErrorTip::Suggestion(format!(
                "Function `{}` must be declared before it is called",
                function
            )),
            ErrorImpl::ArgumentCountMismatch { expected, received, .. } => ErrorTip::Suggestion(
                format!("Expected {} arguments, received {}", expected, received),
            ),
            ErrorImpl::MissingReturn { function } => ErrorTip::Suggestion(format!(
                "Function `{}` must end with a return statement",
                function
            )),
            ErrorImpl::NestingTooDeep { limit } => {
                ErrorTip::Suggestion(format!("Calls may be nested at most {} deep", limit))
            }
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unterminated block comment")]
    UnterminatedComment,
    #[error("source is longer than {limit} bytes")]
    SourceTooLarge { limit: usize },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("unary minus is not supported")]
    UnsupportedUnaryMinus,
    #[error("parameter {parameter:?} already declared")]
    ParameterAlreadyDeclared { parameter: String },
    #[error("variable {variable:?} already declared")]
    VariableAlreadyDeclared { variable: String },
    #[error("variable {variable:?} not declared")]
    VariableNotDeclared { variable: String },
    #[error("function {function:?} already declared with {declared} parameters, found {found}")]
    FunctionAlreadyDeclared { function: String, declared: usize, found: usize },
    #[error("function {function:?} already defined")]
    FunctionAlreadyDefined { function: String },
    #[error("function {function:?} not declared")]
    FunctionNotDeclared { function: String },
    #[error("call to {function:?}: expected {expected:?} arguments, received {received:?}")]
    ArgumentCountMismatch { function: String, expected: usize, received: usize },
    #[error("function {function:?} does not end with a return statement")]
    MissingReturn { function: String },
    #[error("calls nested deeper than {limit}")]
    NestingTooDeep { limit: usize },
}
