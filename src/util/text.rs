/// Minimum number of characters a strong password must have.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Classifies a password as strong or weak.
///
/// A password is strong if and only if it is at least
/// [`MIN_PASSWORD_LENGTH`] characters long and contains at least one
/// uppercase letter, one lowercase letter, one decimal digit, and one
/// character that is neither letter nor digit. The check is a single pass
/// over the input.
///
/// # Parameters
/// - `candidate`: The password to classify.
///
/// # Returns
/// `true` if every rule is satisfied, otherwise `false`.
///
/// # Example
/// ```
/// use reckon::util::text::is_strong_password;
///
/// assert!(is_strong_password("Strong@123"));
///
/// // No symbol.
/// assert!(!is_strong_password("Invalid1"));
/// // Seven characters, every class present: still too short.
/// assert!(!is_strong_password("Valid#1"));
/// ```
#[must_use]
pub fn is_strong_password(candidate: &str) -> bool {
    let mut length = 0;
    let mut has_upper = false;
    let mut has_lower = false;
    let mut has_digit = false;
    let mut has_symbol = false;

    for c in candidate.chars() {
        length += 1;

        if c.is_ascii_digit() {
            has_digit = true;
        } else if c.is_uppercase() {
            has_upper = true;
        } else if c.is_lowercase() {
            has_lower = true;
        } else if !c.is_alphabetic() {
            has_symbol = true;
        }
    }

    length >= MIN_PASSWORD_LENGTH && has_upper && has_lower && has_digit && has_symbol
}

/// Counts the decimal digits in `text`.
///
/// Only the ASCII digits `0` through `9` are counted. Empty input yields
/// zero.
///
/// # Example
/// ```
/// use reckon::util::text::count_digits;
///
/// assert_eq!(count_digits("This has 2 digits: 34"), 3);
/// assert_eq!(count_digits(""), 0);
/// ```
#[must_use]
pub fn count_digits(text: &str) -> usize {
    text.chars().filter(char::is_ascii_digit).count()
}

/// Counts the whitespace-delimited words in `text`.
///
/// A word is a maximal non-empty run of non-whitespace characters. Empty or
/// whitespace-only input yields zero.
///
/// # Example
/// ```
/// use reckon::util::text::count_words;
///
/// assert_eq!(count_words("Hello world"), 2);
/// assert_eq!(count_words("   "), 0);
/// ```
#[must_use]
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
