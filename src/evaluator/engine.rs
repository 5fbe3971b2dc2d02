use logos::Logos;

use crate::{
    error::EvalError,
    evaluator::{
        lexer::{self, Token},
        op::{Operator, token_to_operator},
    },
};

/// Result type used by the evaluation engine.
///
/// All engine functions return either a value of type `T` or an `EvalError`
/// describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// An entry on the pending-operator stack.
///
/// Operators wait here until precedence or the end of the expression forces a
/// reduction. An `OpenParen` entry marks the start of a parenthesised group;
/// reductions never cross it.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Pending {
    /// A binary operator together with its byte offset in the source.
    Operator(Operator, usize),
    /// A `(` marker together with its byte offset in the source.
    OpenParen(usize),
}

/// The two-stack reduction engine.
///
/// Holds the partially-reduced operands and the pending operators of a single
/// evaluation. Both stacks are created empty, live for exactly one call to
/// [`evaluate`] and are fully drained on success, so the engine keeps no
/// state between calls.
#[derive(Debug, Default)]
struct Engine {
    /// Partially-reduced values not yet consumed by a pending operator.
    operands:  Vec<f64>,
    /// Pending operators and open-parenthesis markers, in non-decreasing
    /// precedence within one nesting level.
    operators: Vec<Pending>,
}

impl Engine {
    /// Pushes `op` after reducing every pending operator that binds at least
    /// as tightly.
    ///
    /// Reducing on *equal* precedence is what makes the engine
    /// left-associative: in `100 - 50 + 25` the subtraction is applied before
    /// the addition is pushed. Reductions stop at an open-parenthesis marker.
    fn shift_operator(&mut self, op: Operator, at: usize) -> EvalResult<()> {
        while let Some(&Pending::Operator(top, top_at)) = self.operators.last()
              && top.precedence() >= op.precedence()
        {
            self.operators.pop();
            self.reduce(top, top_at)?;
        }

        self.operators.push(Pending::Operator(op, at));
        Ok(())
    }

    /// Reduces until the matching `(` marker is found, then discards the
    /// marker.
    ///
    /// # Errors
    /// Returns `EvalError::UnbalancedParentheses` if the operator stack runs
    /// out before a marker is found.
    fn close_paren(&mut self, at: usize) -> EvalResult<()> {
        loop {
            match self.operators.pop() {
                Some(Pending::Operator(op, op_at)) => self.reduce(op, op_at)?,
                Some(Pending::OpenParen(_)) => return Ok(()),
                None => return Err(EvalError::UnbalancedParentheses { at }),
            }
        }
    }

    /// Pops two operands, applies `op` and pushes the result back.
    ///
    /// The operand popped first is the right-hand side.
    fn reduce(&mut self, op: Operator, at: usize) -> EvalResult<()> {
        let rhs = self.pop_operand(op, at)?;
        let lhs = self.pop_operand(op, at)?;

        self.operands.push(op.apply(lhs, rhs, at)?);
        Ok(())
    }

    fn pop_operand(&mut self, op: Operator, at: usize) -> EvalResult<f64> {
        self.operands.pop().ok_or_else(|| EvalError::StackUnderflow { operator: op.symbol(),
                                                                      at })
    }

    /// Drains the remaining pending operators and returns the final value.
    ///
    /// # Errors
    /// - `EvalError::UnbalancedParentheses` for a leftover `(` marker.
    /// - `EvalError::ResultIndeterminate` unless exactly one operand remains.
    fn finish(mut self) -> EvalResult<f64> {
        while let Some(entry) = self.operators.pop() {
            match entry {
                Pending::Operator(op, at) => self.reduce(op, at)?,
                Pending::OpenParen(at) => return Err(EvalError::UnbalancedParentheses { at }),
            }
        }

        match self.operands.as_slice() {
            [value] => Ok(*value),
            rest => Err(EvalError::ResultIndeterminate { operands: rest.len() }),
        }
    }
}

/// Evaluates an infix arithmetic expression.
///
/// This is the strict entry point for evaluation. The source is scanned left
/// to right exactly once; numeric literals are pushed onto the operand stack,
/// and operators are applied as soon as precedence and grouping permit.
/// `*` and `/` bind tighter than `+` and `-`, operators of equal precedence
/// evaluate left to right, and parentheses group explicitly.
///
/// Whitespace between tokens is ignored, and so are unrecognized characters:
/// `"3 x + 5"` evaluates to `8.0`. A stray symbol never fails an expression
/// on its own.
///
/// # Parameters
/// - `source`: The expression text. May be empty or malformed; the engine
///   detects and reports this itself.
///
/// # Returns
/// The numeric value of the expression.
///
/// # Errors
/// - `EvalError::UnbalancedParentheses` for an unmatched `(` or `)`.
/// - `EvalError::MalformedNumber` for literals like `1.2.3`.
/// - `EvalError::DivisionByZero` for a zero right-hand divisor.
/// - `EvalError::StackUnderflow` when an operator is missing an operand.
/// - `EvalError::ResultIndeterminate` when the expression does not reduce to
///   exactly one value, including the empty expression.
///
/// # Examples
/// ```
/// use reckon::evaluator::engine::evaluate;
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(evaluate("(2 + 3) * 4").unwrap(), 20.0);
///
/// // Division by zero is an error, not infinity.
/// assert!(evaluate("4 / 0").is_err());
/// ```
pub fn evaluate(source: &str) -> EvalResult<f64> {
    let mut engine = Engine::default();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let at = lexer.span().start;

        match token {
            Ok(Token::Number(value)) => engine.operands.push(value),
            Ok(Token::LParen) => engine.operators.push(Pending::OpenParen(at)),
            Ok(Token::RParen) => engine.close_paren(at)?,
            Ok(token) => {
                if let Some(op) = token_to_operator(&token) {
                    engine.shift_operator(op, at)?;
                }
            },
            Err(()) => {
                let slice = lexer.slice();
                if lexer::starts_number(slice) {
                    return Err(EvalError::MalformedNumber { literal: slice.to_string(),
                                                            at });
                }
                // Unrecognized characters are skipped.
            },
        }
    }

    engine.finish()
}
