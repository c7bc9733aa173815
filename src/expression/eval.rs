//! Postfix evaluation, variable enumeration and truth tables

use super::error::EvalError;
use super::token::Token;
use super::BoolExpr;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

impl BoolExpr {
    /// Evaluate the expression against a variable assignment
    ///
    /// Processes the postfix sequence left to right over an operand stack.
    /// The assignment must be total over the expression's variables.
    ///
    /// # Errors
    ///
    /// - [`EvalError::UnboundVariable`] when a variable has no assignment
    /// - [`EvalError::MissingOperand`] when an operator underflows the stack
    /// - [`EvalError::MalformedExpression`] when the stack does not end with
    ///   exactly one value
    ///
    /// # Examples
    ///
    /// ```
    /// use quine_logic::BoolExpr;
    /// use std::collections::HashMap;
    /// use std::sync::Arc;
    ///
    /// let expr = BoolExpr::parse("A + B").unwrap();
    ///
    /// let mut assignment = HashMap::new();
    /// assignment.insert(Arc::from("A"), true);
    /// assignment.insert(Arc::from("B"), false);
    /// assert_eq!(expr.evaluate(&assignment), Ok(true));
    /// ```
    pub fn evaluate(&self, assignment: &HashMap<Arc<str>, bool>) -> Result<bool, EvalError> {
        let mut stack: Vec<bool> = Vec::new();

        for token in &self.tokens {
            match token {
                Token::Variable(name) => {
                    let value = assignment.get(name).copied().ok_or_else(|| {
                        EvalError::UnboundVariable {
                            name: Arc::clone(name),
                        }
                    })?;
                    stack.push(value);
                }
                Token::Not => {
                    let value = stack
                        .pop()
                        .ok_or(EvalError::MissingOperand { operator: '~' })?;
                    stack.push(!value);
                }
                Token::And => {
                    let right = stack
                        .pop()
                        .ok_or(EvalError::MissingOperand { operator: '*' })?;
                    let left = stack
                        .pop()
                        .ok_or(EvalError::MissingOperand { operator: '*' })?;
                    stack.push(left && right);
                }
                Token::Or => {
                    let right = stack
                        .pop()
                        .ok_or(EvalError::MissingOperand { operator: '+' })?;
                    let left = stack
                        .pop()
                        .ok_or(EvalError::MissingOperand { operator: '+' })?;
                    stack.push(left || right);
                }
            }
        }

        if stack.len() != 1 {
            return Err(EvalError::MalformedExpression);
        }
        Ok(stack[0])
    }

    /// The expression's distinct variables, sorted ascending
    ///
    /// The position of each variable in this list fixes its bit position in
    /// row indices: position 0 is the most-significant bit.
    pub fn variables(&self) -> Vec<Arc<str>> {
        let names: BTreeSet<Arc<str>> = self
            .tokens
            .iter()
            .filter_map(|t| match t {
                Token::Variable(name) => Some(Arc::clone(name)),
                _ => None,
            })
            .collect();
        names.into_iter().collect()
    }

    /// Evaluate against the assignment encoded by a row index
    ///
    /// Bit `(n - 1 - i)` of `row` is the value of `order[i]`, so the first
    /// variable in `order` is the most-significant bit.
    ///
    /// # Errors
    ///
    /// [`EvalError::TooManyVariables`] when `order` holds more than 64
    /// variables, plus everything [`BoolExpr::evaluate`] can report.
    ///
    /// # Examples
    ///
    /// ```
    /// use quine_logic::BoolExpr;
    ///
    /// let expr = BoolExpr::parse("A~B").unwrap();
    /// let order = expr.variables();
    ///
    /// // Row 2 = 0b10: A = 1, B = 0
    /// assert_eq!(expr.evaluate_row(2, &order), Ok(true));
    /// ```
    pub fn evaluate_row(&self, row: u64, order: &[Arc<str>]) -> Result<bool, EvalError> {
        let n = order.len();
        if n > 64 {
            return Err(EvalError::TooManyVariables { count: n });
        }

        let mut assignment = HashMap::with_capacity(n);
        for (i, name) in order.iter().enumerate() {
            let bit = (n - 1 - i) as u32;
            assignment.insert(Arc::clone(name), (row >> bit) & 1 == 1);
        }
        self.evaluate(&assignment)
    }

    /// Build the full truth table, one entry per assignment
    ///
    /// Rows are enumerated from 0 to 2^n − 1 in increasing order, encoded
    /// as in [`BoolExpr::evaluate_row`] over [`BoolExpr::variables`].
    ///
    /// # Examples
    ///
    /// ```
    /// use quine_logic::BoolExpr;
    ///
    /// let expr = BoolExpr::parse("A * B").unwrap();
    /// assert_eq!(expr.truth_table().unwrap(), vec![false, false, false, true]);
    /// ```
    pub fn truth_table(&self) -> Result<Vec<bool>, EvalError> {
        let order = self.variables();
        let n = order.len();
        if n > 64 {
            return Err(EvalError::TooManyVariables { count: n });
        }

        // u128 bound keeps n = 64 representable in the loop counter
        let rows: u128 = 1u128 << n;
        let mut table = Vec::new();
        let mut row: u128 = 0;
        while row < rows {
            table.push(self.evaluate_row(row as u64, &order)?);
            row += 1;
        }
        Ok(table)
    }
}
