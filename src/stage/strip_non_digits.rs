use crate::{
    stage::{Stage, retain},
    unicode::is_digit,
};
use std::borrow::Cow;

/// Drop every character outside `[0-9]`.  The result may be empty.
pub struct StripNonDigits;

impl Stage for StripNonDigits {
    fn name(&self) -> &'static str {
        "strip_non_digits"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        !text.bytes().all(|b| b.is_ascii_digit())
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        retain(text, is_digit)
    }
}
