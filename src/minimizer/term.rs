//! Minimization terms
//!
//! A [`Term`] is one row group of the Quine-McCluskey table: a pattern over
//! `{'0','1','-'}` with one character per variable, the set of source rows
//! it covers, and whether it descends purely from don't-care rows.

use std::collections::BTreeSet;
use std::fmt;

/// A product term in the minimization table
///
/// The pattern reads in variable order, position 0 being the
/// most-significant bit of every covered row index: `'1'` requires the
/// variable set, `'0'` requires it clear, `'-'` leaves it free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pattern: String,
    ones: usize,
    covered: BTreeSet<u64>,
    from_dont_care: bool,
}

impl Term {
    /// Build the order-zero term for a single row
    pub(crate) fn from_row(row: u64, width: usize, from_dont_care: bool) -> Self {
        let mut pattern = String::with_capacity(width);
        let mut ones = 0;
        for i in 0..width {
            let bit = (width - 1 - i) as u32;
            if (row >> bit) & 1 == 1 {
                pattern.push('1');
                ones += 1;
            } else {
                pattern.push('0');
            }
        }
        let mut covered = BTreeSet::new();
        covered.insert(row);
        Term {
            pattern,
            ones,
            covered,
            from_dont_care,
        }
    }

    /// Merge with an adjacent term
    ///
    /// Succeeds only when the patterns differ in exactly one position; the
    /// differing position becomes `'-'` and the covered sets are unioned.
    /// The result descends from don't-cares only if both inputs do.
    pub(crate) fn combine(&self, other: &Term) -> Option<Term> {
        let mut difference: Option<usize> = None;
        for (i, (a, b)) in self.pattern.chars().zip(other.pattern.chars()).enumerate() {
            if a != b {
                if difference.is_some() {
                    return None;
                }
                difference = Some(i);
            }
        }
        let position = difference?;

        let pattern: String = self
            .pattern
            .chars()
            .enumerate()
            .map(|(i, c)| if i == position { '-' } else { c })
            .collect();

        let ones = if self.pattern.as_bytes()[position] == b'1' {
            self.ones - 1
        } else {
            self.ones
        };

        let covered = self.covered.union(&other.covered).copied().collect();
        Some(Term {
            pattern,
            ones,
            covered,
            from_dont_care: self.from_dont_care && other.from_dont_care,
        })
    }

    /// The pattern over `{'0','1','-'}`, one character per variable
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Number of `'1'` positions in the pattern
    pub fn ones(&self) -> usize {
        self.ones
    }

    /// Source row indices this term covers
    pub fn covered(&self) -> &BTreeSet<u64> {
        &self.covered
    }

    /// True when every source row was a don't-care
    pub fn is_dont_care(&self) -> bool {
        self.from_dont_care
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pattern)
    }
}
