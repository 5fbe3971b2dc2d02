use reckon::{error::EvalError, evaluate_expression, evaluator::engine::evaluate};

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => {
            assert!((value - expected).abs() < 1e-9,
                    "Expected {expected} for '{src}', got {value}");
        },
        Err(e) => panic!("Expression '{src}' failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if evaluate(src).is_ok() {
        panic!("Expression '{src}' succeeded but was expected to fail")
    }
}

#[test]
fn single_numbers_and_basic_arithmetic() {
    assert_value("42", 42.0);
    assert_value("3 + 5", 8.0);
    assert_value("8 - 5", 3.0);
    assert_value("7 * 9", 63.0);
    assert_value("10 / 2", 5.0);
}

#[test]
fn precedence_and_associativity() {
    assert_value("2 + 3 * 4", 14.0);
    assert_value("20 - 6 / 3", 18.0);
    assert_value("100 - 50 + 25", 75.0);
    assert_value("24 / 4 / 2", 3.0);
    assert_value("2 * 3 + 4 * 5", 26.0);
    assert_value("1 - 2 - 3", -4.0);
}

#[test]
fn parenthesised_groups() {
    assert_value("(2 + 3) * 4", 20.0);
    assert_value("2 * (3 + 4)", 14.0);
    assert_value("(1 + (2 + 3) * 4) * 2", 42.0);
    assert_value("((7))", 7.0);
    assert_value("100 / (2 + 3)", 20.0);
}

#[test]
fn decimal_literals() {
    assert_value("3.5 * 2", 7.0);
    assert_value(".5 + .25", 0.75);
    assert_value("1.25 + 2.75", 4.0);
}

#[test]
fn whitespace_is_ignored() {
    assert_value("3+5", 8.0);
    assert_value("  3 +   5  ", 8.0);
    assert_value("3\t+\t5", 8.0);
}

#[test]
fn unrecognized_characters_are_skipped() {
    assert_value("3 x + 5", 8.0);
    assert_value("$3 + 5#", 8.0);
}

#[test]
fn division_by_zero_is_reported() {
    assert!(matches!(evaluate("4 / 0"), Err(EvalError::DivisionByZero { .. })));
    assert!(matches!(evaluate("1 / (2 - 2)"),
                     Err(EvalError::DivisionByZero { .. })));
}

#[test]
fn unbalanced_parentheses_are_reported() {
    assert!(matches!(evaluate("(2 + 3"),
                     Err(EvalError::UnbalancedParentheses { .. })));
    assert!(matches!(evaluate("2 + 3)"),
                     Err(EvalError::UnbalancedParentheses { .. })));
    assert_failure("((2 + 3)");
}

#[test]
fn malformed_literals_are_reported() {
    assert!(matches!(evaluate("1.2.3"), Err(EvalError::MalformedNumber { .. })));
    assert!(matches!(evaluate("2 + 3..5"),
                     Err(EvalError::MalformedNumber { .. })));
}

#[test]
fn missing_operands_are_reported() {
    assert!(matches!(evaluate("+ 3"), Err(EvalError::StackUnderflow { .. })));
    assert!(matches!(evaluate("3 +"), Err(EvalError::StackUnderflow { .. })));
    assert!(matches!(evaluate("3 + * 5"), Err(EvalError::StackUnderflow { .. })));
}

#[test]
fn leftover_operands_are_reported() {
    assert!(matches!(evaluate(""), Err(EvalError::ResultIndeterminate { .. })));
    assert!(matches!(evaluate("   "),
                     Err(EvalError::ResultIndeterminate { .. })));
    assert!(matches!(evaluate("3 5"),
                     Err(EvalError::ResultIndeterminate { .. })));
    assert!(matches!(evaluate("()"),
                     Err(EvalError::ResultIndeterminate { .. })));
}

#[test]
fn fallback_wrapper_returns_default_on_failure() {
    assert_eq!(evaluate_expression("3 + 5"), 8.0);
    assert_eq!(evaluate_expression("4 / 0"), 0.0);
    assert_eq!(evaluate_expression("(2 + 3"), 0.0);
    assert_eq!(evaluate_expression(""), 0.0);
}

#[test]
fn evaluation_is_idempotent() {
    let first = evaluate("(2 + 3) * 4 - 1.5");
    let second = evaluate("(2 + 3) * 4 - 1.5");

    assert_eq!(first, second);
    assert_eq!(evaluate_expression("4 / 0"), evaluate_expression("4 / 0"));
}
