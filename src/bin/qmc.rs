//! Quine-McCluskey Logic Minimizer - Command Line Interface
//!
//! Non-interactive front end over the library: takes one function
//! description (expression, minterm list, or bit-string) and prints the
//! minimized sum of products.

use clap::Parser;
use quine_logic::{BoolExpr, Minimizer};
use std::process;

#[derive(Parser, Debug)]
#[command(name = "qmc")]
#[command(about = "Quine-McCluskey boolean function minimizer", long_about = None)]
#[command(version)]
struct Args {
    /// Boolean expression to minimize, e.g. "A*B + ~A*C" or "AB + ~A~B"
    #[arg(value_name = "EXPRESSION")]
    expression: Option<String>,

    /// Comma-separated minterm row indices (requires --variables)
    #[arg(short = 'm', long = "minterms", value_delimiter = ',', conflicts_with = "expression")]
    minterms: Vec<u64>,

    /// Comma-separated don't-care row indices
    #[arg(short = 'd', long = "dont-cares", value_delimiter = ',', requires = "minterms")]
    dont_cares: Vec<u64>,

    /// Number of variables for --minterms input
    #[arg(short = 'n', long = "variables", requires = "minterms")]
    variables: Option<usize>,

    /// Bit-string over 0/1/x/X/? with one character per row
    #[arg(short = 'b', long = "bits", conflicts_with_all = ["expression", "minterms"])]
    bits: Option<String>,

    /// Also print the postfix form (expression input only)
    #[arg(short = 'p', long = "postfix")]
    postfix: bool,

    /// Also print the truth table rows (expression input only)
    #[arg(short = 't', long = "table")]
    table: bool,
}

fn run(args: &Args) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let minimizer = if let Some(input) = &args.expression {
        let expr = BoolExpr::parse(input)?;
        if args.postfix {
            println!("RPN: {}", expr.postfix());
        }
        if args.table {
            let table = expr.truth_table()?;
            let minterms: Vec<usize> = table
                .iter()
                .enumerate()
                .filter(|(_, &v)| v)
                .map(|(row, _)| row)
                .collect();
            println!("Truth table: {:?}", table);
            println!("Minterms: {:?}", minterms);
        }
        Minimizer::from_expr(&expr)?
    } else if let Some(bits) = &args.bits {
        Minimizer::from_bit_string(bits)?
    } else if !args.minterms.is_empty() {
        let count = args
            .variables
            .ok_or("--minterms requires --variables <N>")?;
        Minimizer::from_minterms(&args.minterms, &args.dont_cares, count)?
    } else {
        return Err("no input: pass an expression, --minterms or --bits".into());
    };

    Ok(minimizer.optimize())
}

fn main() {
    let args = Args::parse();

    match run(&args) {
        Ok(products) if products.is_empty() => println!("0"),
        Ok(products) => println!("{}", products.join(" + ")),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
