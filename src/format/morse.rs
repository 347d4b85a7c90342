use crate::{error::FormatError, format::require_input, normalizer::WorkingString, table};

const NAME: &str = "morse";

/// Spell `input` in Morse code.
///
/// Codes are concatenated as they appear in the table; a space in the input
/// emits a single space.  Characters with no code are dropped silently.
pub fn to_morse_code(input: &str) -> Result<String, FormatError> {
    require_input(NAME, input)?;

    let mut text = WorkingString::new(input);
    text.to_lower();

    let mut out = String::with_capacity(text.len() * 6);
    for c in text.chars() {
        if let Some(code) = table::morse(c) {
            out.push_str(code);
        } else if c == ' ' {
            out.push(' ');
        }
    }
    Ok(out)
}
