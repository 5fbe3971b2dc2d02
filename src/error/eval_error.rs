#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression.
///
/// Every positional variant carries the byte offset of the offending token in
/// the source text, so diagnostics can point at the exact spot that failed.
pub enum EvalError {
    /// A closing parenthesis had no matching `(`, or an opening parenthesis
    /// was never closed.
    UnbalancedParentheses {
        /// Byte offset of the offending parenthesis.
        at: usize,
    },
    /// A numeric literal could not be parsed, such as `1.2.3`.
    MalformedNumber {
        /// The literal as it appeared in the source.
        literal: String,
        /// Byte offset of the literal.
        at:      usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// Byte offset of the `/` operator.
        at: usize,
    },
    /// An operator found fewer than two operands to reduce.
    StackUnderflow {
        /// The operator that could not be applied.
        operator: char,
        /// Byte offset of the operator.
        at:       usize,
    },
    /// The expression did not reduce to exactly one value.
    ResultIndeterminate {
        /// How many operands remained after the final drain.
        operands: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnbalancedParentheses { at } => {
                write!(f, "Error at offset {at}: Unbalanced parentheses.")
            },

            Self::MalformedNumber { literal, at } => {
                write!(f, "Error at offset {at}: Malformed numeric literal '{literal}'.")
            },

            Self::DivisionByZero { at } => write!(f, "Error at offset {at}: Division by zero."),

            Self::StackUnderflow { operator, at } => write!(f,
                                                            "Error at offset {at}: Operator '{operator}' is missing an operand."),

            Self::ResultIndeterminate { operands } => write!(f,
                                                             "Error: Expected exactly one result, but {operands} operands remained."),
        }
    }
}

impl std::error::Error for EvalError {}
