//! Infix to postfix conversion
//!
//! A shunting-yard pass over the input characters. Precedence is NOT over
//! AND over OR, with AND and OR left-associative. The grammar's one twist
//! is juxtaposition: a variable, an opening parenthesis, or a unary NOT
//! directly after a completed operand implies an AND, so `AB`, `(A)(B)`
//! and `A~B` all parse as products.

use super::error::ParseError;
use super::token::Token;
use super::BoolExpr;
use std::sync::Arc;

/// Operators as tracked on the shunting-yard stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Not,
    And,
    Or,
}

impl Op {
    fn token(self) -> Token {
        match self {
            Op::Not => Token::Not,
            Op::And => Token::And,
            Op::Or => Token::Or,
        }
    }
}

/// Operator-stack entries; parentheses fence off the pop loop
enum StackEntry {
    Operator(Op),
    LeftParen,
}

/// Where the parser stands relative to the operand grammar
///
/// The juxtaposition rule lives entirely in this state: `HaveOperand`
/// followed by anything that begins a new operand inserts an AND.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// The next token must begin an operand
    ExpectOperand,
    /// The previous token completed an operand
    HaveOperand,
}

/// True when `top` binds at least as tightly as `incoming` and must be
/// emitted first. NOT never pops (unary operators stack), and AND does not
/// pop a pending OR.
fn yields_to(incoming: Op, top: Op) -> bool {
    match incoming {
        Op::Or => true,
        Op::And => top != Op::Or,
        Op::Not => false,
    }
}

fn push_operator(output: &mut Vec<Token>, stack: &mut Vec<StackEntry>, op: Op) {
    while let Some(StackEntry::Operator(top)) = stack.last() {
        if !yields_to(op, *top) {
            break;
        }
        output.push(top.token());
        stack.pop();
    }
    stack.push(StackEntry::Operator(op));
}

impl BoolExpr {
    /// Parse an infix expression into postfix form
    ///
    /// Supports `+` for OR, `*` for AND, `~` or `!` for NOT, parentheses,
    /// and juxtaposition as AND. Whitespace is ignored.
    ///
    /// # Errors
    ///
    /// - [`ParseError::UnmatchedLeftParen`] for a ')' with no open '('
    /// - [`ParseError::UnmatchedRightParen`] for a '(' still open at the end
    /// - [`ParseError::InvalidCharacter`] for anything outside the grammar
    ///
    /// # Examples
    ///
    /// ```
    /// use quine_logic::BoolExpr;
    ///
    /// let expr = BoolExpr::parse("(A + B)(A + C)").unwrap();
    /// assert_eq!(expr.postfix(), "A B + A C + *");
    ///
    /// assert!(BoolExpr::parse("A % B").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut output: Vec<Token> = Vec::new();
        let mut stack: Vec<StackEntry> = Vec::new();
        let mut state = State::ExpectOperand;

        for (position, c) in input.char_indices() {
            match c {
                _ if c.is_alphabetic() => {
                    if state == State::HaveOperand {
                        push_operator(&mut output, &mut stack, Op::And);
                    }
                    output.push(Token::Variable(Arc::from(c.to_string().as_str())));
                    state = State::HaveOperand;
                }
                _ if c.is_whitespace() => {}
                '(' => {
                    if state == State::HaveOperand {
                        push_operator(&mut output, &mut stack, Op::And);
                    }
                    stack.push(StackEntry::LeftParen);
                    state = State::ExpectOperand;
                }
                ')' => {
                    loop {
                        match stack.pop() {
                            Some(StackEntry::Operator(op)) => output.push(op.token()),
                            Some(StackEntry::LeftParen) => break,
                            None => return Err(ParseError::UnmatchedLeftParen),
                        }
                    }
                    state = State::HaveOperand;
                }
                '~' | '!' => {
                    if state == State::HaveOperand {
                        push_operator(&mut output, &mut stack, Op::And);
                    }
                    push_operator(&mut output, &mut stack, Op::Not);
                    state = State::ExpectOperand;
                }
                '*' => {
                    push_operator(&mut output, &mut stack, Op::And);
                    state = State::ExpectOperand;
                }
                '+' => {
                    push_operator(&mut output, &mut stack, Op::Or);
                    state = State::ExpectOperand;
                }
                _ => {
                    return Err(ParseError::InvalidCharacter {
                        character: c,
                        position,
                    })
                }
            }
        }

        while let Some(entry) = stack.pop() {
            match entry {
                StackEntry::Operator(op) => output.push(op.token()),
                StackEntry::LeftParen => return Err(ParseError::UnmatchedRightParen),
            }
        }

        Ok(BoolExpr::from_tokens(output))
    }
}
