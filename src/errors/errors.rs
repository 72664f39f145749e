use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
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

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::DuplicateDeclaration { .. } => "DuplicateDeclaration",
            ErrorImpl::UndeclaredVariable { .. } => "UndeclaredVariable",
            ErrorImpl::UndefinedTarget { .. } => "UndefinedTarget",
            ErrorImpl::MixedModeAssignment { .. } => "MixedModeAssignment",
            ErrorImpl::OperandTypeError { .. } => "OperandTypeError",
            ErrorImpl::NonBoolOperand { .. } => "NonBoolOperand",
            ErrorImpl::UnaryTypeError { .. } => "UnaryTypeError",
            ErrorImpl::PoorlyTypedTest { .. } => "PoorlyTypedTest",
            ErrorImpl::MalformedAst { .. } => "MalformedAst",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { expected, found } => ErrorTip::Suggestion(format!(
                "Expected `{}`, saw `{}` instead",
                expected, found
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::DuplicateDeclaration { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` is declared twice", variable))
            }
            ErrorImpl::UndeclaredVariable { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` was never declared", variable))
            }
            ErrorImpl::UndefinedTarget { variable } => ErrorTip::Suggestion(format!(
                "Assignment target `{}` was never declared",
                variable
            )),
            ErrorImpl::MixedModeAssignment {
                target,
                target_type,
                source_type,
            } => ErrorTip::Suggestion(format!(
                "Cannot assign `{}` to `{}` (declared `{}`)",
                source_type, target, target_type
            )),
            ErrorImpl::OperandTypeError {
                operator,
                left,
                right,
            } => ErrorTip::Suggestion(format!(
                "Operator `{}` cannot combine `{}` and `{}`",
                operator, left, right
            )),
            ErrorImpl::NonBoolOperand { operator } => {
                ErrorTip::Suggestion(format!("Operator `{}` needs bool operands", operator))
            }
            ErrorImpl::UnaryTypeError { operator, operand } => ErrorTip::Suggestion(format!(
                "Operator `{}` cannot be applied to `{}`",
                operator, operand
            )),
            ErrorImpl::PoorlyTypedTest { construct, test } => ErrorTip::Suggestion(format!(
                "The `{}` test `{}` must be bool",
                construct, test
            )),
            ErrorImpl::MalformedAst { message } => {
                ErrorTip::Suggestion(format!("Internal error, not a problem in the source: {}", message))
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

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("illegal character: {character:?}")]
    UnrecognisedCharacter { character: String },
    #[error("syntax error: expecting {expected:?}, saw {found:?}")]
    UnexpectedToken { expected: String, found: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("duplicate declaration: {variable:?}")]
    DuplicateDeclaration { variable: String },
    #[error("undeclared variable: {variable:?}")]
    UndeclaredVariable { variable: String },
    #[error("undefined target in assignment: {variable:?}")]
    UndefinedTarget { variable: String },
    #[error("mixed mode assignment to {target:?}: {target_type} = {source_type}")]
    MixedModeAssignment {
        target: String,
        target_type: String,
        source_type: String,
    },
    #[error("type error for {operator:?}: {left} and {right}")]
    OperandTypeError {
        operator: String,
        left: String,
        right: String,
    },
    #[error("{operator:?}: non-bool operand")]
    NonBoolOperand { operator: String },
    #[error("type error for unary {operator:?} on {operand}")]
    UnaryTypeError { operator: String, operand: String },
    #[error("poorly typed {construct} test: {test}")]
    PoorlyTypedTest { construct: String, test: String },
    #[error("malformed abstract syntax: {message}")]
    MalformedAst { message: String },
}
