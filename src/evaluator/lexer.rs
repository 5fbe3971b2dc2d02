use logos::Logos;

/// Represents a lexical token in an arithmetic expression.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.5` or `.25`.
    ///
    /// The scan is deliberately greedy: a maximal contiguous run of digits
    /// and decimal points is consumed as one literal, so `1.2.3` lexes as a
    /// single run that fails the parse step instead of three tokens.
    #[regex(r"[0-9.]+", parse_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if the slice is a valid decimal literal.
/// - `None`: If the slice is not a valid number, such as `1.2.3` or `.`.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Returns `true` when `slice` begins like a numeric literal.
///
/// The engine uses this to tell a failed literal scan apart from a plain
/// unrecognized character: only the former is an error, the latter is
/// skipped.
///
/// # Example
/// ```
/// use reckon::evaluator::lexer::starts_number;
///
/// assert!(starts_number("1.2.3"));
/// assert!(starts_number(".5"));
/// assert!(!starts_number("x"));
/// ```
#[must_use]
pub fn starts_number(slice: &str) -> bool {
    slice.starts_with(|c: char| c.is_ascii_digit() || c == '.')
}
