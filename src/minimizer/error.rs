//! Error types for minimizer construction and configuration

use std::fmt;
use std::io;

/// Errors raised while building or configuring a [`Minimizer`]
///
/// Constructors validate before anything is stored, so a failed call
/// leaves no half-built minimizer behind.
///
/// [`Minimizer`]: crate::Minimizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MinimizerError {
    /// A display-name list did not match the variable count
    VariableCountMismatch {
        /// Number of variables the minimizer was built with
        expected: usize,
        /// Number of names supplied
        supplied: usize,
    },
    /// A bit-string held something other than '0', '1', 'x', 'X' or '?'
    InvalidDontCareCharacter {
        /// The offending character
        character: char,
        /// Row position in the bit-string
        position: usize,
    },
    /// More variables than a 64-bit row index can address
    TooManyVariables {
        /// The variable count that was rejected
        count: usize,
    },
}

impl fmt::Display for MinimizerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinimizerError::VariableCountMismatch { expected, supplied } => write!(
                f,
                "Mismatched number of variables: expected {}, got {}",
                expected, supplied
            ),
            MinimizerError::InvalidDontCareCharacter {
                character,
                position,
            } => write!(
                f,
                "Illegal character `{}` at row {} in bit-string",
                character, position
            ),
            MinimizerError::TooManyVariables { count } => {
                write!(f, "Too many variables ({} > 64)", count)
            }
        }
    }
}

impl std::error::Error for MinimizerError {}

impl From<MinimizerError> for io::Error {
    fn from(err: MinimizerError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_message_carries_counts() {
        let err = MinimizerError::VariableCountMismatch {
            expected: 3,
            supplied: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains('3'));
        assert!(msg.contains('2'));
    }

    #[test]
    fn test_invalid_character_message() {
        let err = MinimizerError::InvalidDontCareCharacter {
            character: '2',
            position: 5,
        };
        let msg = err.to_string();
        assert!(msg.contains("`2`"));
        assert!(msg.contains("row 5"));
    }

    #[test]
    fn test_to_io_error() {
        let io_err: io::Error = MinimizerError::TooManyVariables { count: 100 }.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }
}
