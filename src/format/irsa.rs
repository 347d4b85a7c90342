use crate::{error::FormatError, format::require_input, normalizer::WorkingString, table};

const NAME: &str = "irsa";

/// Spell `input` with the International Radio-telephony Spelling Alphabet.
///
/// Every mapped character emits its word followed by one space, so
/// `"cab"` becomes `"charlie alfa bravo "`.  A space emits `" | "` plus the
/// separator.  Characters outside the table are dropped.
pub fn to_irsa(input: &str) -> Result<String, FormatError> {
    require_input(NAME, input)?;

    let mut text = WorkingString::new(input);
    text.to_lower();

    let mut out = String::with_capacity(text.len() * 8);
    for c in text.chars().flat_map(char::to_lowercase) {
        if let Some(word) = table::irsa(c) {
            out.push_str(word);
            out.push(' ');
        }
    }
    Ok(out)
}
