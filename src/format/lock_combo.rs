use crate::{error::FormatError, format::{fixed_digits, group_digits}};

const NAME: &str = "lock_combo";

/// Format six digits as a lock combination: `AA<d>BB<d>CC`.
pub fn to_lock_combo(input: &str, delimiter: &str) -> Result<String, FormatError> {
    let digits = fixed_digits(NAME, input, 6)?;
    Ok(group_digits(&digits, &[2, 4], delimiter))
}
