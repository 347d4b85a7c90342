//! Cleaning stage abstraction.
//!
//! A stage is one total, infallible transformation of a working string.
//! Every stage answers a cheap `needs_apply` pre-check first; when it returns
//! `false` the input `Cow` is passed through untouched, so a chain of stages
//! over already-clean text never allocates.

pub mod encode_spaces;
pub mod lower_case;
pub mod strip_non_digits;
pub mod strip_non_word_chars;

use std::borrow::Cow;

/// A single cleaning step.
pub trait Stage: Send + Sync {
    /// Human-readable name – used in log lines.
    fn name(&self) -> &'static str;

    /// Fast pre-check.  Returning `false` skips the whole stage.
    fn needs_apply(&self, text: &str) -> bool;

    /// Allocation-aware transformation.  Must always be correct, even when
    /// `needs_apply` would have returned `false`.
    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str>;
}

/// Keep only the characters accepted by `keep`; borrow when nothing is dropped.
#[inline]
pub(crate) fn retain<'a>(text: Cow<'a, str>, keep: impl Fn(char) -> bool) -> Cow<'a, str> {
    if text.chars().all(&keep) {
        return text;
    }
    Cow::Owned(text.chars().filter(|&c| keep(c)).collect())
}
