//! Integration tests for expression parsing and evaluation

use quine_logic::{BoolExpr, EvalError, ParseError};
use std::collections::HashMap;
use std::sync::Arc;

fn assignment(pairs: &[(&str, bool)]) -> HashMap<Arc<str>, bool> {
    pairs
        .iter()
        .map(|(name, value)| (Arc::from(*name), *value))
        .collect()
}

#[test]
fn test_or_scenario() {
    // parse("A+B") is "A B OR"; evaluate({A:true, B:false}) is true
    let expr = BoolExpr::parse("A+B").unwrap();
    assert_eq!(expr.postfix(), "A B +");
    assert_eq!(
        expr.evaluate(&assignment(&[("A", true), ("B", false)])),
        Ok(true)
    );
}

#[test]
fn test_juxtaposition_scenario() {
    // parse("AB") is "A B AND"; evaluate({A:true, B:false}) is false
    let expr = BoolExpr::parse("AB").unwrap();
    assert_eq!(expr.postfix(), "A B *");
    assert_eq!(
        expr.evaluate(&assignment(&[("A", true), ("B", false)])),
        Ok(false)
    );
}

#[test]
fn test_negation_scenario() {
    // parse("~A") is "A NOT"; evaluate({A:true}) is false
    let expr = BoolExpr::parse("~A").unwrap();
    assert_eq!(expr.postfix(), "A ~");
    assert_eq!(expr.evaluate(&assignment(&[("A", true)])), Ok(false));
}

#[test]
fn test_juxtaposition_equals_explicit_and() {
    // "AB" and "A*B" must agree on every assignment
    let implicit = BoolExpr::parse("AB").unwrap();
    let explicit = BoolExpr::parse("A*B").unwrap();
    assert_eq!(
        implicit.truth_table().unwrap(),
        explicit.truth_table().unwrap()
    );
}

#[test]
fn test_reparenthesization_is_invariant() {
    let pairs = [
        ("A+B", "(A+B)"),
        ("A+B*C", "A+(B*C)"),
        ("~A*B", "(~A)*B"),
        ("A*B*C", "(A*B)*C"),
    ];
    for (plain, grouped) in pairs {
        assert_eq!(
            BoolExpr::parse(plain).unwrap().truth_table().unwrap(),
            BoolExpr::parse(grouped).unwrap().truth_table().unwrap(),
            "{} vs {}",
            plain,
            grouped
        );
    }
}

#[test]
fn test_parenthesization_that_changes_grouping_changes_the_table() {
    let flat = BoolExpr::parse("A+B*C").unwrap();
    let grouped = BoolExpr::parse("(A+B)*C").unwrap();
    assert_ne!(flat.truth_table().unwrap(), grouped.truth_table().unwrap());
}

#[test]
fn test_parse_errors() {
    assert_eq!(
        BoolExpr::parse("(A+B"),
        Err(ParseError::UnmatchedRightParen)
    );
    assert_eq!(BoolExpr::parse("A+B)"), Err(ParseError::UnmatchedLeftParen));
    assert!(matches!(
        BoolExpr::parse("A & B"),
        Err(ParseError::InvalidCharacter {
            character: '&',
            ..
        })
    ));
}

#[test]
fn test_eval_errors() {
    let expr = BoolExpr::parse("AB").unwrap();
    assert!(matches!(
        expr.evaluate(&assignment(&[("A", true)])),
        Err(EvalError::UnboundVariable { .. })
    ));

    let truncated = BoolExpr::parse("A*").unwrap();
    assert!(matches!(
        truncated.evaluate(&assignment(&[("A", true)])),
        Err(EvalError::MissingOperand { operator: '*' })
    ));
}

#[test]
fn test_de_morgan() {
    // ~(A*B) and ~A + ~B agree everywhere
    let lhs = BoolExpr::parse("~(A*B)").unwrap();
    let rhs = BoolExpr::parse("~A + ~B").unwrap();
    assert_eq!(lhs.truth_table().unwrap(), rhs.truth_table().unwrap());
}

#[test]
fn test_xor_truth_table() {
    let xor = BoolExpr::parse("A~B + ~AB").unwrap();
    assert_eq!(xor.truth_table().unwrap(), vec![false, true, true, false]);
}

#[test]
fn test_method_api_agrees_with_parser() {
    let a = BoolExpr::variable("A");
    let b = BoolExpr::variable("B");
    let c = BoolExpr::variable("C");

    let built = a.and(&b).or(&a.not().and(&c));
    let parsed = BoolExpr::parse("AB + ~AC").unwrap();
    assert_eq!(built.truth_table().unwrap(), parsed.truth_table().unwrap());
}
