/// The engine module reduces token streams to a single value.
///
/// The engine drives the whole evaluation: it pulls tokens from the lexer and
/// maintains the two stacks — one for partially-reduced operands, one for
/// pending operators and open-parenthesis markers — reducing eagerly whenever
/// precedence allows. This is the core of the evaluator.
///
/// # Responsibilities
/// - Scans the source left to right, exactly once.
/// - Applies pending operators as soon as precedence and grouping permit.
/// - Reports evaluation errors with the byte offset of the offending token.
pub mod engine;
/// The lexer module tokenizes expression text.
///
/// The lexer reads the raw source text and produces a stream of tokens:
/// numeric literals, the four binary operators, and parentheses. Whitespace
/// is skipped. This is the first stage of evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source offsets.
/// - Scans numeric literals greedily, deferring validity to the parse step.
/// - Leaves unrecognized characters to the engine, which skips them.
pub mod lexer;
/// The op module defines the binary operators.
///
/// Declares the `Operator` type together with its precedence table and its
/// application rule, including the division-by-zero check.
pub mod op;
