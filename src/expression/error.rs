//! Error types for expression parsing and evaluation

use std::fmt;
use std::io;
use std::sync::Arc;

/// Errors raised while parsing an infix expression
///
/// Parsing builds its output locally and returns it only on success, so a
/// failed parse leaves nothing behind: callers can correct the input and
/// retry from a clean slate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A ')' was read with no matching '(' on the operator stack
    UnmatchedLeftParen,
    /// A '(' was still open when the input ended
    UnmatchedRightParen,
    /// A character that is not a letter, whitespace, parenthesis, or
    /// recognized operator
    InvalidCharacter {
        /// The offending character
        character: char,
        /// Byte position in the input
        position: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnmatchedLeftParen => {
                write!(f, "Illegal expression: unmatched left parenthesis")
            }
            ParseError::UnmatchedRightParen => {
                write!(f, "Illegal expression: unmatched right parenthesis")
            }
            ParseError::InvalidCharacter {
                character,
                position,
            } => write!(
                f,
                "Illegal expression: invalid character `{}` at position {}",
                character, position
            ),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<ParseError> for io::Error {
    fn from(err: ParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Errors raised while evaluating a postfix sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// A variable token had no entry in the assignment
    UnboundVariable {
        /// The variable's name
        name: Arc<str>,
    },
    /// An operator found too few operands on the stack
    MissingOperand {
        /// The operator's display symbol
        operator: char,
    },
    /// The stack did not hold exactly one value after the last token
    MalformedExpression,
    /// More variables than a 64-bit row index can address
    TooManyVariables {
        /// The variable count that was rejected
        count: usize,
    },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::UnboundVariable { name } => {
                write!(f, "Illegal bitmap: value for variable `{}` not found", name)
            }
            EvalError::MissingOperand { operator } => write!(
                f,
                "Illegal expression: missing operand for operator `{}`",
                operator
            ),
            EvalError::MalformedExpression => {
                write!(f, "Illegal expression: operands left without operators")
            }
            EvalError::TooManyVariables { count } => {
                write!(f, "Too many variables ({} > 64)", count)
            }
        }
    }
}

impl std::error::Error for EvalError {}

impl From<EvalError> for io::Error {
    fn from(err: EvalError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}
