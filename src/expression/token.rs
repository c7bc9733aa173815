//! Postfix token representation

use std::fmt;
use std::sync::Arc;

/// A single token of a postfix expression
///
/// A well-formed sequence follows the stack discipline: every operator
/// finds its operands (one for [`Token::Not`], two for [`Token::And`] and
/// [`Token::Or`]) already on the stack, and exactly one value remains at
/// the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Reference to a named variable
    Variable(Arc<str>),
    /// Unary negation
    Not,
    /// Binary conjunction
    And,
    /// Binary disjunction
    Or,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Variable(name) => write!(f, "{}", name),
            Token::Not => write!(f, "~"),
            Token::And => write!(f, "*"),
            Token::Or => write!(f, "+"),
        }
    }
}
