//! Don't-care rows let the minimizer merge further than the ON-set alone
//! would allow.
//!
//! Run with: cargo run --example dont_cares

use quine_logic::Minimizer;

fn main() -> Result<(), quine_logic::MinimizerError> {
    // BCD increment carry: rows 10..15 never occur, so they are free
    let minterms = [9u64];
    let dont_cares = [10u64, 11, 12, 13, 14, 15];

    let strict = Minimizer::from_minterms(&minterms, &[], 4)?;
    println!("Without don't-cares: {}", strict.optimize().join(" + "));

    let relaxed = Minimizer::from_minterms(&minterms, &dont_cares, 4)?;
    println!("With don't-cares:    {}", relaxed.optimize().join(" + "));

    Ok(())
}
