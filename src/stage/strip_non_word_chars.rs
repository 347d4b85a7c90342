use crate::{
    stage::{Stage, retain},
    unicode::is_word_char,
};
use std::borrow::Cow;

/// Keep only `[0-9A-Za-z]`: whitespace, underscores and every symbol go.
///
/// Case is preserved, and digits survive alongside letters; this is not a
/// digits-only filter even though it is sometimes used in front of one.
pub struct StripNonWordChars;

impl Stage for StripNonWordChars {
    fn name(&self) -> &'static str {
        "strip_non_word_chars"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        !text.is_empty() && !text.bytes().all(|b| b.is_ascii_alphanumeric())
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if text.is_empty() {
            return text;
        }
        retain(text, is_word_char)
    }
}
