//! Display and Debug formatting for boolean expressions

use super::BoolExpr;
use std::fmt;

/// Display formatting for boolean expressions
///
/// Prints the postfix token sequence separated by spaces, which is the
/// expression's actual content.
///
/// # Examples
///
/// ```
/// use quine_logic::BoolExpr;
///
/// let expr = BoolExpr::parse("A + B * C").unwrap();
/// assert_eq!(format!("{}", expr), "A B C * +");
/// ```
impl fmt::Display for BoolExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for token in self.tokens() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}", token)?;
            first = false;
        }
        Ok(())
    }
}

/// Debug formatting delegates to `Display`
impl fmt::Debug for BoolExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
