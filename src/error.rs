//! Unified error type for the crate
//!
//! Each module reports failures through its own error enum
//! ([`ParseError`], [`EvalError`], [`MinimizerError`]); this module provides
//! the crate-wide [`Error`] wrapper for operations that cross module
//! boundaries, such as [`Minimizer::from_expr`].
//!
//! [`Minimizer::from_expr`]: crate::Minimizer::from_expr

use crate::expression::{EvalError, ParseError};
use crate::minimizer::MinimizerError;
use std::fmt;
use std::io;

/// The main error type for the crate
///
/// Wraps the per-module error enums so callers that mix parsing, evaluation
/// and minimization can use a single error type with `?`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Expression parsing failed
    Parse(ParseError),
    /// Postfix evaluation failed
    Eval(EvalError),
    /// Minimizer construction or configuration failed
    Minimizer(MinimizerError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(e) => write!(f, "{}", e),
            Error::Eval(e) => write!(f, "{}", e),
            Error::Minimizer(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(e) => Some(e),
            Error::Eval(e) => Some(e),
            Error::Minimizer(e) => Some(e),
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

impl From<EvalError> for Error {
    fn from(err: EvalError) -> Self {
        Error::Eval(err)
    }
}

impl From<MinimizerError> for Error {
    fn from(err: MinimizerError) -> Self {
        Error::Minimizer(err)
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}
