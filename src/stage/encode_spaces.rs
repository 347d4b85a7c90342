use crate::{stage::Stage, unicode::is_space};
use std::borrow::Cow;

const ENCODED_SPACE: &str = "%20";

/// Replace every run of whitespace with a single `%20`.
///
/// Only whitespace is encoded; other reserved URL characters pass through.
pub struct EncodeSpaces;

impl Stage for EncodeSpaces {
    fn name(&self) -> &'static str {
        "encode_spaces"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        text.chars().any(is_space)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&text) {
            return text;
        }
        let mut out = String::with_capacity(text.len() + 8);
        let mut in_run = false;
        for c in text.chars() {
            if is_space(c) {
                if !in_run {
                    out.push_str(ENCODED_SPACE);
                    in_run = true;
                }
            } else {
                out.push(c);
                in_run = false;
            }
        }
        Cow::Owned(out)
    }
}
