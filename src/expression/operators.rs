//! Operator overloading and boolean operations for expressions
//!
//! Composition works directly on postfix form: concatenating two
//! well-formed sequences and appending the operator token yields another
//! well-formed sequence, so no tree is ever built.

use super::token::Token;
use super::BoolExpr;
use std::ops::{Add, Mul, Not};

/// Logical AND operator for references: `&a * &b`
///
/// # Examples
///
/// ```
/// use quine_logic::BoolExpr;
///
/// let a = BoolExpr::variable("A");
/// let b = BoolExpr::variable("B");
/// let result = &a * &b; // Equivalent to a.and(&b)
/// ```
impl Mul for &BoolExpr {
    type Output = BoolExpr;

    fn mul(self, rhs: &BoolExpr) -> BoolExpr {
        self.and(rhs)
    }
}

/// Logical AND operator: `a * b` (delegates to the reference version)
impl Mul for BoolExpr {
    type Output = BoolExpr;

    fn mul(self, rhs: BoolExpr) -> BoolExpr {
        self.and(&rhs)
    }
}

/// Logical OR operator for references: `&a + &b`
///
/// # Examples
///
/// ```
/// use quine_logic::BoolExpr;
///
/// let a = BoolExpr::variable("A");
/// let b = BoolExpr::variable("B");
/// let result = &a + &b; // Equivalent to a.or(&b)
/// ```
impl Add for &BoolExpr {
    type Output = BoolExpr;

    fn add(self, rhs: &BoolExpr) -> BoolExpr {
        self.or(rhs)
    }
}

/// Logical OR operator: `a + b` (delegates to the reference version)
impl Add for BoolExpr {
    type Output = BoolExpr;

    fn add(self, rhs: BoolExpr) -> BoolExpr {
        self.or(&rhs)
    }
}

/// Logical NOT operator for references: `!&a`
impl Not for &BoolExpr {
    type Output = BoolExpr;

    fn not(self) -> BoolExpr {
        BoolExpr::not(self)
    }
}

/// Logical NOT operator: `!a` (delegates to the reference version)
impl Not for BoolExpr {
    type Output = BoolExpr;

    fn not(self) -> BoolExpr {
        BoolExpr::not(&self)
    }
}

// Boolean operation methods
impl BoolExpr {
    /// Conjunction: `self` followed by `other` followed by an AND token
    pub fn and(&self, other: &BoolExpr) -> BoolExpr {
        let mut tokens = Vec::with_capacity(self.tokens.len() + other.tokens.len() + 1);
        tokens.extend_from_slice(&self.tokens);
        tokens.extend_from_slice(&other.tokens);
        tokens.push(Token::And);
        BoolExpr::from_tokens(tokens)
    }

    /// Disjunction: `self` followed by `other` followed by an OR token
    pub fn or(&self, other: &BoolExpr) -> BoolExpr {
        let mut tokens = Vec::with_capacity(self.tokens.len() + other.tokens.len() + 1);
        tokens.extend_from_slice(&self.tokens);
        tokens.extend_from_slice(&other.tokens);
        tokens.push(Token::Or);
        BoolExpr::from_tokens(tokens)
    }

    /// Negation: `self` followed by a NOT token
    pub fn not(&self) -> BoolExpr {
        let mut tokens = Vec::with_capacity(self.tokens.len() + 1);
        tokens.extend_from_slice(&self.tokens);
        tokens.push(Token::Not);
        BoolExpr::from_tokens(tokens)
    }
}
