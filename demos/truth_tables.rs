//! Evaluate an expression row by row and print its truth table.
//!
//! Run with: cargo run --example truth_tables

use quine_logic::BoolExpr;

fn main() -> Result<(), quine_logic::Error> {
    let expr = BoolExpr::parse("(A + B)(A + C)")?;
    let order = expr.variables();

    println!("f = (A + B)(A + C)");
    for (i, name) in order.iter().enumerate() {
        println!("  bit {} (from MSB): {}", i, name);
    }

    let rows = 1u64 << order.len();
    for row in 0..rows {
        let value = expr.evaluate_row(row, &order)?;
        println!("  {:03b} -> {}", row, u8::from(value));
    }

    Ok(())
}
