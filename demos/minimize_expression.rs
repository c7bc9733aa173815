//! Parse an expression, expand its truth table, and minimize it.
//!
//! Run with: cargo run --example minimize_expression

use quine_logic::{BoolExpr, Minimizer};

fn main() -> Result<(), quine_logic::Error> {
    // A redundant sum of products: the consensus term BC is unnecessary
    let expr = BoolExpr::parse("AB + ~AC + BC")?;

    println!("Expression: AB + ~AC + BC");
    println!("Postfix:    {}", expr.postfix());

    let table = expr.truth_table()?;
    let minterms: Vec<usize> = table
        .iter()
        .enumerate()
        .filter(|(_, &v)| v)
        .map(|(row, _)| row)
        .collect();
    println!("Minterms:   {:?}", minterms);

    let minimizer = Minimizer::from_expr(&expr)?;
    println!("Minimized:  {}", minimizer.optimize().join(" + "));

    Ok(())
}
