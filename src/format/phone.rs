use crate::{error::FormatError, format::rejected, normalizer::WorkingString};

const NAME: &str = "phone";

/// Format a US phone number.
///
/// Ten digits render as `(AAA) BBB<delim>CCCC`; eleven digits put the
/// country code in front: `A (BBB) CCC<delim>DDDD`.  Any other digit count
/// is rejected as a non-US number.
pub fn to_phone(input: &str, delimiter: &str) -> Result<String, FormatError> {
    let mut digits = WorkingString::new(input);
    digits.strip_non_digits();

    // Digits are ASCII, so byte slicing is safe.
    let d = digits.as_str();
    match d.len() {
        10 => Ok(format!("({}) {}{delimiter}{}", &d[..3], &d[3..6], &d[6..])),
        11 => Ok(format!(
            "{} ({}) {}{delimiter}{}",
            &d[..1],
            &d[1..4],
            &d[4..7],
            &d[7..]
        )),
        n => Err(rejected(FormatError::Format(
            NAME,
            format!("non-US number: expected 10 or 11 digits, found {n}"),
        ))),
    }
}
