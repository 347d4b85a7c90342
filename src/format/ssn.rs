use crate::{error::FormatError, format::{fixed_digits, group_digits}};

const NAME: &str = "ssn";

/// Format nine digits as a Social Security Number: `AAA<d>BB<d>CCCC`.
pub fn to_ssn(input: &str, delimiter: &str) -> Result<String, FormatError> {
    let digits = fixed_digits(NAME, input, 9)?;
    Ok(group_digits(&digits, &[3, 5], delimiter))
}
