//! Rendering terms back into literal products

use super::term::Term;
use std::sync::Arc;

/// Render a term as a product of literals
///
/// Position i with '1' contributes the positive literal, '0' the negated
/// literal, '-' nothing, concatenated in variable order. Juxtaposition is
/// AND in the expression grammar, so single-letter names round-trip
/// through the parser. The all-dash term is the constant-true product and
/// renders as "1".
pub(super) fn render_product(term: &Term, labels: &[Arc<str>]) -> String {
    let mut product = String::new();
    for (i, c) in term.pattern().chars().enumerate() {
        match c {
            '1' => product.push_str(&labels[i]),
            '0' => {
                product.push('~');
                product.push_str(&labels[i]);
            }
            _ => {}
        }
    }
    if product.is_empty() {
        product.push('1');
    }
    product
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minimizer::labels::default_labels;

    #[test]
    fn test_mixed_literals() {
        let labels = default_labels(3);
        let term = Term::from_row(4, 3, false); // 100
        assert_eq!(render_product(&term, &labels), "A~B~C");
    }

    #[test]
    fn test_dashes_contribute_nothing() {
        let labels = default_labels(3);
        let term = Term::from_row(6, 3, false)
            .combine(&Term::from_row(7, 3, false))
            .unwrap(); // 11-
        assert_eq!(render_product(&term, &labels), "AB");
    }

    #[test]
    fn test_all_dash_renders_constant_true() {
        let labels = default_labels(1);
        let term = Term::from_row(0, 1, false)
            .combine(&Term::from_row(1, 1, false))
            .unwrap(); // -
        assert_eq!(render_product(&term, &labels), "1");
    }
}
