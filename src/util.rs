/// Text-scanning helpers.
///
/// This module provides simple single-pass character scans over text:
/// password-strength classification, digit counting, and word counting. Each
/// function makes exactly one pass over its input and returns a plain
/// boolean or count.
pub mod text;
