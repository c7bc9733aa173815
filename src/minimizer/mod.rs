//! Quine-McCluskey minimization
//!
//! This module provides [`Minimizer`], which reduces a boolean function
//! given as minterm/don't-care row sets to a sum of prime-implicant
//! products. Inputs come from a truth table, a per-row bit-string, explicit
//! index lists, or a parsed [`BoolExpr`].
//!
//! The tabular method runs in three phases, each a pure function over the
//! previous one: iterative adjacent-term merging, essential implicant
//! selection with Petrick completion, and literal rendering.
//! A `Minimizer` is immutable once built;
//! [`Minimizer::optimize`] allocates its working state per call and leaves
//! nothing behind between invocations.
//!
//! # Quick Start
//!
//! ```
//! use quine_logic::Minimizer;
//!
//! # fn main() -> Result<(), quine_logic::MinimizerError> {
//! let minimizer = Minimizer::from_minterms(&[1, 3, 5, 7], &[], 3)?;
//! // Odd rows of a 3-variable function: exactly the last variable
//! assert_eq!(minimizer.optimize(), vec!["C".to_string()]);
//! # Ok(())
//! # }
//! ```
//!
//! [`BoolExpr`]: crate::BoolExpr

pub mod error;
mod labels;
mod merge;
mod render;
mod selection;
mod term;

pub use error::MinimizerError;
pub use term::Term;

use crate::error::Error;
use crate::expression::BoolExpr;
use log::{debug, warn};
use std::collections::HashSet;
use std::sync::Arc;

/// The smallest width whose 2^width rows reach at least `len`
fn width_for(len: usize) -> usize {
    let mut width = 0;
    while (1u128 << width) < len as u128 {
        width += 1;
    }
    width
}

/// A Quine-McCluskey minimizer over a fixed minterm/don't-care set
///
/// Construction validates everything up front; minimization itself cannot
/// fail. Variable identity is positional; display names are a separate
/// table, defaulting to sequential letters from 'A'.
///
/// # Examples
///
/// ```
/// use quine_logic::Minimizer;
///
/// # fn main() -> Result<(), quine_logic::MinimizerError> {
/// let minimizer = Minimizer::from_minterms(&[0, 1], &[], 2)?.with_variables(&["x", "y"])?;
/// assert_eq!(minimizer.optimize(), vec!["~x".to_string()]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Minimizer {
    minterms: Vec<u64>,
    dont_cares: Vec<u64>,
    width: usize,
    labels: Vec<Arc<str>>,
}

impl Minimizer {
    /// Build from a truth table, one boolean per row
    ///
    /// Row r is a minterm when `table[r]` is true. The variable count is
    /// the smallest width whose row space holds the table; rows past the
    /// end of a short table are neither minterms nor don't-cares.
    ///
    /// # Examples
    ///
    /// ```
    /// use quine_logic::Minimizer;
    ///
    /// // f(A,B) = A XOR B
    /// let minimizer = Minimizer::from_truth_table(&[false, true, true, false]);
    /// assert_eq!(
    ///     minimizer.optimize(),
    ///     vec!["~AB".to_string(), "A~B".to_string()]
    /// );
    /// ```
    pub fn from_truth_table(table: &[bool]) -> Self {
        let width = width_for(table.len());
        let minterms = table
            .iter()
            .enumerate()
            .filter(|(_, &value)| value)
            .map(|(row, _)| row as u64)
            .collect();
        Minimizer {
            minterms,
            dont_cares: Vec::new(),
            width,
            labels: labels::default_labels(width),
        }
    }

    /// Build from a bit-string, one character per row
    ///
    /// `'1'` marks a minterm, `'0'` an off row, and `'x'`, `'X'` or `'?'`
    /// a don't-care. Any other character fails with
    /// [`MinimizerError::InvalidDontCareCharacter`] and nothing is kept.
    pub fn from_bit_string(bits: &str) -> Result<Self, MinimizerError> {
        let mut minterms = Vec::new();
        let mut dont_cares = Vec::new();
        let mut rows = 0usize;

        for (position, character) in bits.chars().enumerate() {
            rows += 1;
            match character {
                '0' => {}
                '1' => minterms.push(position as u64),
                'x' | 'X' | '?' => dont_cares.push(position as u64),
                _ => {
                    return Err(MinimizerError::InvalidDontCareCharacter {
                        character,
                        position,
                    })
                }
            }
        }

        let width = width_for(rows);
        Ok(Minimizer {
            minterms,
            dont_cares,
            width,
            labels: labels::default_labels(width),
        })
    }

    /// Build from explicit minterm and don't-care row sets
    ///
    /// A row listed in both sets counts as a minterm. Rows outside the
    /// 2^`variable_count` row space are dropped with a warning.
    ///
    /// # Errors
    ///
    /// [`MinimizerError::TooManyVariables`] when `variable_count` exceeds
    /// 64, checked before any row is touched.
    pub fn from_minterms(
        minterms: &[u64],
        dont_cares: &[u64],
        variable_count: usize,
    ) -> Result<Self, MinimizerError> {
        if variable_count > 64 {
            return Err(MinimizerError::TooManyVariables {
                count: variable_count,
            });
        }
        let limit: u128 = 1u128 << variable_count;

        let in_range = |row: u64| {
            if (row as u128) < limit {
                true
            } else {
                warn!(
                    "dropping row {} outside the {}-variable row space",
                    row, variable_count
                );
                false
            }
        };

        let mut minterms: Vec<u64> = minterms
            .iter()
            .copied()
            .filter(|&row| in_range(row))
            .collect();
        minterms.sort_unstable();
        minterms.dedup();

        let chosen: HashSet<u64> = minterms.iter().copied().collect();
        let mut dont_cares: Vec<u64> = dont_cares
            .iter()
            .copied()
            .filter(|&row| in_range(row))
            .filter(|row| !chosen.contains(row))
            .collect();
        dont_cares.sort_unstable();
        dont_cares.dedup();

        Ok(Minimizer {
            minterms,
            dont_cares,
            width: variable_count,
            labels: labels::default_labels(variable_count),
        })
    }

    /// Build from a parsed expression
    ///
    /// Expands the expression's truth table and takes the expression's own
    /// variables as display names.
    ///
    /// # Examples
    ///
    /// ```
    /// use quine_logic::{BoolExpr, Minimizer};
    ///
    /// # fn main() -> Result<(), quine_logic::Error> {
    /// let expr = BoolExpr::parse("ab + abc")?;
    /// let minimizer = Minimizer::from_expr(&expr)?;
    /// assert_eq!(minimizer.optimize(), vec!["ab".to_string()]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_expr(expr: &BoolExpr) -> Result<Self, Error> {
        let variables = expr.variables();
        let table = expr.truth_table()?;
        let mut minimizer = Self::from_truth_table(&table);
        minimizer.labels = variables;
        Ok(minimizer)
    }

    /// Replace the display names
    ///
    /// # Errors
    ///
    /// [`MinimizerError::VariableCountMismatch`] unless exactly one name
    /// per variable is supplied.
    pub fn with_variables<S: AsRef<str>>(mut self, names: &[S]) -> Result<Self, MinimizerError> {
        self.labels = labels::labels_from(self.width, names)?;
        Ok(self)
    }

    /// Number of variables
    pub fn width(&self) -> usize {
        self.width
    }

    /// Display names, one per variable position
    pub fn variables(&self) -> &[Arc<str>] {
        &self.labels
    }

    /// Minterm rows, sorted ascending
    pub fn minterms(&self) -> &[u64] {
        &self.minterms
    }

    /// Don't-care rows, sorted ascending
    pub fn dont_cares(&self) -> &[u64] {
        &self.dont_cares
    }

    /// All prime implicants of the function
    ///
    /// Runs the merge rounds to exhaustion and returns every term that was
    /// never consumed by a merge, excluding purely don't-care-derived ones.
    /// No covering selection is applied; see [`Minimizer::extract`] for the
    /// selected cover.
    pub fn prime_implicants(&self) -> Vec<Term> {
        if self.width == 0 || self.minterms.is_empty() {
            return Vec::new();
        }

        let mut generation = self.initial_generation();
        let mut primes = Vec::new();
        while generation.iter().any(|bucket| !bucket.is_empty()) {
            let (next, counts) = merge::merge_round(&generation);
            primes.extend(merge::prime_candidates(&generation, &counts));
            generation = next;
        }
        debug!("{} prime implicants found", primes.len());
        primes
    }

    /// The selected cover as raw term records
    ///
    /// These are the terms behind [`Minimizer::optimize`]'s product
    /// strings: essential prime implicants plus the Petrick completion for
    /// any minterm rows the essentials miss.
    pub fn extract(&self) -> Vec<Term> {
        let candidates = self.prime_implicants();
        selection::select_cover(&candidates, &self.minterms)
            .into_iter()
            .map(|index| candidates[index].clone())
            .collect()
    }

    /// Minimize to an ordered sequence of literal products
    ///
    /// Each product string uses `~` for negation and juxtaposition for
    /// AND, in variable order; ORing all products reproduces the function
    /// on every minterm row (don't-care rows fall where they may).
    ///
    /// # Examples
    ///
    /// ```
    /// use quine_logic::Minimizer;
    ///
    /// # fn main() -> Result<(), quine_logic::MinimizerError> {
    /// let minimizer = Minimizer::from_minterms(&[0, 2, 4], &[], 3)?;
    /// assert_eq!(
    ///     minimizer.optimize(),
    ///     vec!["~A~C".to_string(), "~B~C".to_string()]
    /// );
    /// # Ok(())
    /// # }
    /// ```
    pub fn optimize(&self) -> Vec<String> {
        let products: Vec<String> = self
            .extract()
            .iter()
            .map(|term| render::render_product(term, &self.labels))
            .collect();
        debug!("minimized to {} products", products.len());
        products
    }

    /// Order-zero terms bucketed by one-count
    fn initial_generation(&self) -> merge::Generation {
        let mut generation: merge::Generation = vec![Vec::new(); self.width + 1];
        for &row in &self.minterms {
            let term = Term::from_row(row, self.width, false);
            generation[term.ones()].push(term);
        }
        for &row in &self.dont_cares {
            let term = Term::from_row(row, self.width, true);
            generation[term.ones()].push(term);
        }
        generation
    }
}
