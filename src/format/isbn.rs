use crate::{error::FormatError, format::{fixed_digits, group_digits}};

const NAME: &str = "isbn";

/// Format a 13-digit ISBN.  The delimiter follows digits 3, 4, 6 and 12:
/// `978-0-59-651774-8`.
///
/// Only the digit count is checked; the check digit is not verified.
pub fn to_isbn(input: &str, delimiter: &str) -> Result<String, FormatError> {
    let digits = fixed_digits(NAME, input, 13)?;
    Ok(group_digits(&digits, &[3, 4, 6, 12], delimiter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn thirteen_digits() {
        assert_eq!(to_isbn("6517106483096", "-").unwrap(), "651-7-10-648309-6");
    }

    #[test]
    fn hyphenated_input_is_regrouped() {
        assert_eq!(to_isbn("978-0596517748", " ").unwrap(), "978 0 59 651774 8");
    }

    #[test]
    fn isbn10_is_rejected() {
        let err = to_isbn("0596517742", "-").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Length);
    }
}
