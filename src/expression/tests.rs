//! Unit tests for parsing and evaluation

use super::error::{EvalError, ParseError};
use super::BoolExpr;
use std::collections::HashMap;
use std::sync::Arc;

fn assignment(pairs: &[(&str, bool)]) -> HashMap<Arc<str>, bool> {
    pairs
        .iter()
        .map(|(name, value)| (Arc::from(*name), *value))
        .collect()
}

#[test]
fn test_parse_or() {
    let expr = BoolExpr::parse("A+B").unwrap();
    assert_eq!(expr.postfix(), "A B +");
    assert_eq!(
        expr.evaluate(&assignment(&[("A", true), ("B", false)])),
        Ok(true)
    );
}

#[test]
fn test_parse_implicit_and() {
    let expr = BoolExpr::parse("AB").unwrap();
    assert_eq!(expr.postfix(), "A B *");
    assert_eq!(
        expr.evaluate(&assignment(&[("A", true), ("B", false)])),
        Ok(false)
    );
}

#[test]
fn test_parse_not() {
    let expr = BoolExpr::parse("~A").unwrap();
    assert_eq!(expr.postfix(), "A ~");
    assert_eq!(expr.evaluate(&assignment(&[("A", true)])), Ok(false));
}

#[test]
fn test_bang_spelling_of_not() {
    assert_eq!(
        BoolExpr::parse("!A").unwrap(),
        BoolExpr::parse("~A").unwrap()
    );
}

#[test]
fn test_precedence_and_over_or() {
    // A + B*C groups as A + (B*C)
    let expr = BoolExpr::parse("A+B*C").unwrap();
    assert_eq!(expr.postfix(), "A B C * +");
}

#[test]
fn test_precedence_not_over_and() {
    // ~A*B groups as (~A)*B
    let expr = BoolExpr::parse("~A*B").unwrap();
    assert_eq!(expr.postfix(), "A ~ B *");
}

#[test]
fn test_and_left_associative() {
    let expr = BoolExpr::parse("A*B*C").unwrap();
    assert_eq!(expr.postfix(), "A B * C *");
}

#[test]
fn test_double_negation() {
    let expr = BoolExpr::parse("~~A").unwrap();
    assert_eq!(expr.postfix(), "A ~ ~");
    assert_eq!(expr.evaluate(&assignment(&[("A", true)])), Ok(true));
}

#[test]
fn test_implicit_and_before_parenthesis() {
    let expr = BoolExpr::parse("A(B+C)").unwrap();
    assert_eq!(expr.postfix(), "A B C + *");
}

#[test]
fn test_implicit_and_between_parentheses() {
    let expr = BoolExpr::parse("(A)(B)").unwrap();
    assert_eq!(expr.postfix(), "A B *");
}

#[test]
fn test_implicit_and_before_not() {
    // A~B is A * ~B
    let expr = BoolExpr::parse("A~B").unwrap();
    assert_eq!(expr.postfix(), "A B ~ *");
}

#[test]
fn test_whitespace_ignored() {
    assert_eq!(
        BoolExpr::parse(" A *  B\t+ C ").unwrap(),
        BoolExpr::parse("A*B+C").unwrap()
    );
}

#[test]
fn test_redundant_parentheses_same_parse() {
    assert_eq!(
        BoolExpr::parse("(A+B)").unwrap().truth_table().unwrap(),
        BoolExpr::parse("A+B").unwrap().truth_table().unwrap()
    );
}

#[test]
fn test_parse_stray_right_paren() {
    assert_eq!(
        BoolExpr::parse("A+B)"),
        Err(ParseError::UnmatchedLeftParen)
    );
}

#[test]
fn test_parse_unclosed_left_paren() {
    assert_eq!(
        BoolExpr::parse("(A+B"),
        Err(ParseError::UnmatchedRightParen)
    );
    assert_eq!(
        BoolExpr::parse("((A+B)"),
        Err(ParseError::UnmatchedRightParen)
    );
}

#[test]
fn test_parse_invalid_character() {
    assert_eq!(
        BoolExpr::parse("A % B"),
        Err(ParseError::InvalidCharacter {
            character: '%',
            position: 2,
        })
    );
}

#[test]
fn test_evaluate_unbound_variable() {
    let expr = BoolExpr::parse("A*B").unwrap();
    assert_eq!(
        expr.evaluate(&assignment(&[("A", true)])),
        Err(EvalError::UnboundVariable {
            name: Arc::from("B"),
        })
    );
}

#[test]
fn test_evaluate_missing_operand() {
    // "A+" parses but underflows the stack at evaluation time
    let expr = BoolExpr::parse("A+").unwrap();
    assert_eq!(
        expr.evaluate(&assignment(&[("A", true)])),
        Err(EvalError::MissingOperand { operator: '+' })
    );
}

#[test]
fn test_evaluate_leftover_operands() {
    let expr = BoolExpr::variable("A").and(&BoolExpr::variable("B"));
    let dangling = {
        let mut tokens = expr.tokens().to_vec();
        tokens.pop();
        BoolExpr::from_tokens(tokens)
    };
    assert_eq!(
        dangling.evaluate(&assignment(&[("A", true), ("B", true)])),
        Err(EvalError::MalformedExpression)
    );
}

#[test]
fn test_evaluate_empty_expression() {
    let expr = BoolExpr::parse("").unwrap();
    assert_eq!(
        expr.evaluate(&HashMap::new()),
        Err(EvalError::MalformedExpression)
    );
}

#[test]
fn test_variables_sorted_and_distinct() {
    let expr = BoolExpr::parse("CAB + BA").unwrap();
    let vars = expr.variables();
    let names: Vec<&str> = vars.iter().map(|v| v.as_ref()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
}

#[test]
fn test_evaluate_row_msb_first() {
    let expr = BoolExpr::parse("A").unwrap();
    let order = BoolExpr::parse("AB").unwrap().variables();

    // Row 2 = 0b10 assigns A=1, B=0
    assert_eq!(expr.evaluate_row(2, &order), Ok(true));
    // Row 1 = 0b01 assigns A=0, B=1
    assert_eq!(expr.evaluate_row(1, &order), Ok(false));
}

#[test]
fn test_truth_table_xor() {
    let expr = BoolExpr::parse("A~B + ~AB").unwrap();
    assert_eq!(
        expr.truth_table().unwrap(),
        vec![false, true, true, false]
    );
}

#[test]
fn test_truth_table_row_count() {
    let expr = BoolExpr::parse("A+B+C").unwrap();
    assert_eq!(expr.truth_table().unwrap().len(), 8);
}

#[test]
fn test_operator_overloads_match_parser() {
    let a = BoolExpr::variable("A");
    let b = BoolExpr::variable("B");
    let c = BoolExpr::variable("C");

    let built = &a * &b + !&c;
    let parsed = BoolExpr::parse("A*B + ~C").unwrap();
    assert_eq!(built, parsed);
}

#[test]
fn test_display_matches_postfix() {
    let expr = BoolExpr::parse("~(A+B)C").unwrap();
    assert_eq!(format!("{}", expr), expr.postfix());
}
