//! # Quine-McCluskey Logic Minimizer
//!
//! This crate evaluates boolean expressions and minimizes boolean functions
//! using the Quine-McCluskey tabular method. Expressions are parsed from the
//! usual algebraic notation into postfix form, evaluated against variable
//! assignments, expanded into truth tables, and reduced to a minimal
//! sum-of-products cover of prime implicants.
//!
//! ## Overview
//!
//! Two components do the work:
//!
//! - [`BoolExpr`] parses infix expressions (`+` for OR, `*` or juxtaposition
//!   for AND, `~`/`!` for NOT, parentheses for grouping) into a postfix token
//!   sequence and evaluates it as a stack machine.
//! - [`Minimizer`] consumes minterm/don't-care sets (from a truth table, a
//!   bit-string, an explicit index list, or a parsed expression) and produces
//!   prime-implicant product terms via iterative bit-pattern merging,
//!   essential-implicant selection, and Petrick exact covering.
//!
//! ## Parsing and Evaluating
//!
//! ```
//! use quine_logic::BoolExpr;
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), quine_logic::Error> {
//! // Juxtaposition is AND: "AB" and "A*B" parse identically
//! let expr = BoolExpr::parse("AB + ~A~B")?;
//!
//! let mut assignment = HashMap::new();
//! assignment.insert(Arc::from("A"), true);
//! assignment.insert(Arc::from("B"), true);
//! assert!(expr.evaluate(&assignment)?);
//!
//! // Truth table rows are indexed with the first variable as the MSB
//! let table = expr.truth_table()?;
//! assert_eq!(table, vec![true, false, false, true]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Minimizing
//!
//! ```
//! use quine_logic::Minimizer;
//!
//! # fn main() -> Result<(), quine_logic::MinimizerError> {
//! // f(A,B,C) = 1 on rows 0, 2 and 4
//! let minimizer = Minimizer::from_minterms(&[0, 2, 4], &[], 3)?;
//! let products = minimizer.optimize();
//!
//! // ~A~C covers rows 0 and 2; ~B~C covers rows 0 and 4
//! assert_eq!(products, vec!["~A~C".to_string(), "~B~C".to_string()]);
//! # Ok(())
//! # }
//! ```
//!
//! Don't-care rows widen the merge space without demanding coverage:
//!
//! ```
//! use quine_logic::Minimizer;
//!
//! # fn main() -> Result<(), quine_logic::MinimizerError> {
//! // '1' = minterm, '0' = off, 'x'/'X'/'?' = don't care; one char per row
//! let minimizer = Minimizer::from_bit_string("1x1x")?;
//! assert_eq!(minimizer.optimize(), vec!["1".to_string()]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Building Expressions Programmatically
//!
//! ```
//! use quine_logic::BoolExpr;
//!
//! let a = BoolExpr::variable("A");
//! let b = BoolExpr::variable("B");
//!
//! // Method API and operator overloading produce the same postfix form
//! let xor = a.and(&b.not()).or(&a.not().and(&b));
//! let same = &a * &!&b + &!&a * &b;
//! assert_eq!(xor, same);
//! ```

pub mod error;
pub mod expression;
pub mod minimizer;

pub use error::Error;
pub use expression::{BoolExpr, EvalError, ParseError, Token};
pub use minimizer::{Minimizer, MinimizerError, Term};
