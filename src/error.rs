/// Evaluation errors.
///
/// Defines all error types that can occur while scanning and reducing an
/// arithmetic expression. Evaluation errors include unbalanced parentheses,
/// malformed numeric literals, division by zero, and inconsistent stack
/// states detected during reduction.
pub mod eval_error;

pub use eval_error::EvalError;
