//! # reckon
//!
//! reckon is a small infix arithmetic expression evaluator written in Rust.
//! It scans and reduces expressions built from decimal numbers, the four
//! basic binary operators, and parenthesised groups, and ships a few
//! single-pass text-analysis helpers for passwords, digits, and words.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::warn;

use crate::evaluator::engine;

/// Provides unified error types for evaluation.
///
/// This module defines all errors that can be raised while scanning or
/// reducing an expression. It standardizes error reporting and carries
/// detailed information about failures, including the byte offset of the
/// offending token for debugging and user feedback.
///
/// # Responsibilities
/// - Defines the error enum for all failure modes of the engine.
/// - Attaches source offsets and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the evaluation of arithmetic expressions.
///
/// This module ties together the lexer, the operator definitions, and the
/// two-stack reduction engine to provide a complete evaluator for infix
/// arithmetic. It exposes the strict public API for evaluating expression
/// text.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, operators, and engine.
/// - Provides the strict entry point for expression evaluation.
/// - Manages the flow of data and errors between phases.
pub mod evaluator;
/// General text-scanning utilities.
///
/// This module provides the simple single-pass scans that accompany the
/// evaluator: password-strength classification, digit counting, and word
/// counting.
///
/// # Responsibilities
/// - Classifies passwords against fixed character-class rules.
/// - Counts decimal digits and whitespace-delimited words.
pub mod util;

/// Evaluates an arithmetic expression, falling back to `0` on failure.
///
/// This is the error-containment boundary of the crate. The underlying
/// engine reports failures as [`error::EvalError`] values, and this function
/// is the single place that collapses any of them into a neutral default
/// result. The diagnostic is emitted as a `tracing` warning, so the caller
/// never sees a failure path.
///
/// Callers that want the failure itself should use
/// [`evaluator::engine::evaluate`] directly.
///
/// # Parameters
/// - `source`: The expression text.
///
/// # Returns
/// The value of the expression, or `0.0` if evaluation failed.
///
/// # Examples
/// ```
/// use reckon::evaluate_expression;
///
/// assert_eq!(evaluate_expression("(2 + 3) * 4"), 20.0);
///
/// // Malformed input never panics; it falls back to the default value.
/// assert_eq!(evaluate_expression("4 / 0"), 0.0);
/// assert_eq!(evaluate_expression("(2 + 3"), 0.0);
/// ```
#[must_use]
pub fn evaluate_expression(source: &str) -> f64 {
    match engine::evaluate(source) {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, source, "expression evaluation failed, falling back to default");
            0.0
        },
    }
}
