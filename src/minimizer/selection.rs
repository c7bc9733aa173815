//! Cover selection: essential implicants, then Petrick completion
//!
//! Essential selection keeps every candidate that is the unique coverer of
//! some minterm row. Rows left over are handed to Petrick's method: one
//! sum clause per uncovered row, expanded into products with absorption,
//! and the cheapest product (fewest terms, then fewest literals) completes
//! the cover. Don't-care rows never appear here; only minterm rows demand
//! coverage.

use super::term::Term;
use log::{debug, warn};
use std::collections::{BTreeSet, HashSet};

/// Pick a complete cover from the prime-implicant candidates
///
/// Returns indices into `candidates`: essentials first in candidate order,
/// then the Petrick completion in candidate order.
pub(super) fn select_cover(candidates: &[Term], minterms: &[u64]) -> Vec<usize> {
    let mut essential = vec![false; candidates.len()];
    for &row in minterms {
        let mut coverers = candidates
            .iter()
            .enumerate()
            .filter(|(_, term)| term.covered().contains(&row))
            .map(|(index, _)| index);
        if let (Some(index), None) = (coverers.next(), coverers.next()) {
            essential[index] = true;
        }
    }

    let mut picked: Vec<usize> = (0..candidates.len()).filter(|&i| essential[i]).collect();

    let covered: HashSet<u64> = picked
        .iter()
        .flat_map(|&i| candidates[i].covered().iter().copied())
        .collect();
    let uncovered: Vec<u64> = minterms
        .iter()
        .copied()
        .filter(|row| !covered.contains(row))
        .collect();

    debug!(
        "selection: {} candidates, {} essential, {} rows left for Petrick",
        candidates.len(),
        picked.len(),
        uncovered.len()
    );

    if !uncovered.is_empty() {
        picked.extend(petrick(&uncovered, candidates, &essential));
    }
    picked
}

/// Exact cover over the rows no essential implicant reaches
///
/// Builds the product-of-sums "some coverer of this row is chosen", one
/// clause per uncovered row, multiplies it out into sum-of-products form
/// with absorption pruning, and returns the cheapest product.
fn petrick(uncovered: &[u64], candidates: &[Term], excluded: &[bool]) -> Vec<usize> {
    let mut products: Vec<BTreeSet<usize>> = vec![BTreeSet::new()];

    for &row in uncovered {
        let clause: Vec<usize> = candidates
            .iter()
            .enumerate()
            .filter(|(index, term)| !excluded[*index] && term.covered().contains(&row))
            .map(|(index, _)| index)
            .collect();
        if clause.is_empty() {
            // Only reachable with a hand-built candidate list that is
            // missing a coverer; engine-produced candidates reach every row
            warn!("row {} is covered by no prime implicant", row);
            continue;
        }

        let mut expanded: Vec<BTreeSet<usize>> = Vec::new();
        for product in &products {
            for &choice in &clause {
                let mut grown = product.clone();
                grown.insert(choice);
                if !expanded.contains(&grown) {
                    expanded.push(grown);
                }
            }
        }
        products = absorb(expanded);
    }

    products
        .into_iter()
        .min_by_key(|product| (product.len(), literal_cost(product, candidates)))
        .map(|product| product.into_iter().collect())
        .unwrap_or_default()
}

/// Drop every product that is a superset of another (absorption law)
fn absorb(products: Vec<BTreeSet<usize>>) -> Vec<BTreeSet<usize>> {
    let mut kept: Vec<BTreeSet<usize>> = Vec::new();
    for product in products {
        if kept.iter().any(|existing| existing.is_subset(&product)) {
            continue;
        }
        kept.retain(|existing| !product.is_subset(existing));
        kept.push(product);
    }
    kept
}

/// Total literal count of a product: every non-'-' pattern position
fn literal_cost(product: &BTreeSet<usize>, candidates: &[Term]) -> usize {
    product
        .iter()
        .map(|&index| {
            candidates[index]
                .pattern()
                .chars()
                .filter(|&c| c != '-')
                .count()
        })
        .sum()
}
