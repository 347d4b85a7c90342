//! One module per target convention.
//!
//! Every formatter owns a fresh [`WorkingString`](crate::WorkingString) for
//! the duration of the call, cleans it, checks its shape and then renders.
//! Nothing is shared between calls except the read-only tables.

pub mod irsa;
pub mod isbn;
pub mod leet;
pub mod lock_combo;
pub mod morse;
pub mod phone;
pub mod ssn;
pub mod url;

use crate::{error::FormatError, normalizer::WorkingString};
use log::debug;

/// Clean `input` down to its digits and require exactly `expected` of them.
fn fixed_digits<'a>(
    formatter: &'static str,
    input: &'a str,
    expected: usize,
) -> Result<WorkingString<'a>, FormatError> {
    let mut digits = WorkingString::new(input);
    digits.strip_non_digits();
    if digits.len() != expected {
        return Err(rejected(FormatError::digit_count(
            formatter,
            expected,
            digits.len(),
        )));
    }
    Ok(digits)
}

/// Fail with a length error on empty input.
pub(crate) fn require_input(formatter: &'static str, input: &str) -> Result<(), FormatError> {
    if input.is_empty() {
        return Err(rejected(FormatError::empty(formatter)));
    }
    Ok(())
}

#[inline]
fn rejected(err: FormatError) -> FormatError {
    debug!("{err}");
    err
}

/// Copy `digits`, writing `delimiter` after every 1-based position in
/// `breaks`.  `breaks` must be ascending.
fn group_digits(digits: &str, breaks: &[usize], delimiter: &str) -> String {
    let mut out = String::with_capacity(digits.len() + breaks.len() * delimiter.len());
    let mut breaks = breaks.iter().peekable();
    for (i, c) in digits.chars().enumerate() {
        out.push(c);
        if breaks.next_if(|&&b| b == i + 1).is_some() {
            out.push_str(delimiter);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_digits_inserts_after_positions() {
        assert_eq!(group_digits("651096", &[2, 4], "-"), "65-10-96");
        assert_eq!(group_digits("986732987", &[3, 5], " "), "986 73 2987");
        assert_eq!(group_digits("123", &[], "-"), "123");
    }

    #[test]
    fn group_digits_accepts_multi_char_delimiters() {
        assert_eq!(group_digits("651096", &[2, 4], " / "), "65 / 10 / 96");
    }

    #[test]
    fn group_digits_with_empty_delimiter_is_identity() {
        assert_eq!(group_digits("6517106483096", &[3, 4, 6, 12], ""), "6517106483096");
    }

    #[test]
    fn fixed_digits_reports_found_count() {
        let err = fixed_digits("ssn", "12-34", 9).unwrap_err();
        assert_eq!(err.to_string(), "`ssn`: expected 9 digits, found 4");
    }

    #[test]
    fn require_input_rejects_empty() {
        assert!(require_input("url", "").is_err());
        assert!(require_input("url", " ").is_ok());
    }
}
