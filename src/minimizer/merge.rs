//! One merge round of the tabular method
//!
//! Terms are bucketed by one-count; a round tries every pairing across
//! adjacent buckets. Both phases are pure functions over their inputs:
//! [`merge_round`] produces the next generation together with the per-row
//! consumption counts, and [`prime_candidates`] reads a generation against
//! those counts. Keeping the counts out of the terms themselves means no
//! state is shared across generations.

use super::term::Term;
use log::debug;
use std::collections::{HashMap, HashSet};

/// Terms bucketed by one-count; index k holds the terms with k ones
pub(super) type Generation = Vec<Vec<Term>>;

/// Try every adjacent-bucket pairing once
///
/// Returns the merged generation (same bucket layout) and, per source row,
/// how many successful merges consumed a term covering that row. Merged
/// duplicates (identical covered sets) are dropped from the generation
/// but still counted, matching the consumption bookkeeping.
///
/// Counts are keyed by row index rather than held in a dense table so a
/// 64-variable table stays representable.
pub(super) fn merge_round(generation: &[Vec<Term>]) -> (Generation, HashMap<u64, usize>) {
    let mut next: Generation = vec![Vec::new(); generation.len()];
    let mut counts: HashMap<u64, usize> = HashMap::new();
    let mut seen: HashSet<Vec<u64>> = HashSet::new();
    let mut merges = 0usize;

    for k in 0..generation.len().saturating_sub(1) {
        for low in &generation[k] {
            for high in &generation[k + 1] {
                if let Some(merged) = low.combine(high) {
                    merges += 1;
                    for &row in merged.covered() {
                        *counts.entry(row).or_insert(0) += 1;
                    }
                    let key: Vec<u64> = merged.covered().iter().copied().collect();
                    if seen.insert(key) {
                        next[merged.ones()].push(merged);
                    }
                }
            }
        }
    }

    debug!(
        "merge round: {} terms in, {} merges, {} distinct terms out",
        generation.iter().map(Vec::len).sum::<usize>(),
        merges,
        next.iter().map(Vec::len).sum::<usize>()
    );
    (next, counts)
}

/// Prime-implicant candidates of a generation
///
/// A term survives as a candidate when it was subsumed into no merge this
/// round and it is not purely don't-care-derived. Zero consumption across
/// the term's covered rows settles the common case straight from the
/// counts; a term whose rows were consumed by other pairings may still be
/// unmergeable itself, so it gets an explicit partner check against its
/// neighbor buckets. In the final round nothing merges, so every remaining
/// non-don't-care term is collected here.
pub(super) fn prime_candidates(generation: &[Vec<Term>], counts: &HashMap<u64, usize>) -> Vec<Term> {
    let mut candidates = Vec::new();
    for (k, bucket) in generation.iter().enumerate() {
        for term in bucket {
            if term.is_dont_care() {
                continue;
            }
            let untouched = term
                .covered()
                .iter()
                .all(|row| counts.get(row).copied().unwrap_or(0) == 0);
            if untouched || !has_partner(generation, k, term) {
                candidates.push(term.clone());
            }
        }
    }
    candidates
}

/// Whether any term in an adjacent bucket combines with `term`
fn has_partner(generation: &[Vec<Term>], k: usize, term: &Term) -> bool {
    let below = k
        .checked_sub(1)
        .map(|j| &generation[j][..])
        .unwrap_or(&[]);
    let above = generation.get(k + 1).map(Vec::as_slice).unwrap_or(&[]);
    below
        .iter()
        .chain(above)
        .any(|other| term.combine(other).is_some())
}
