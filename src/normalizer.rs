use crate::stage::{
    Stage, encode_spaces::EncodeSpaces, lower_case::LowerCase, strip_non_digits::StripNonDigits,
    strip_non_word_chars::StripNonWordChars,
};
use log::trace;
use smallvec::SmallVec;
use std::{borrow::Cow, fmt, ops::Deref, sync::Arc};

/// The per-call buffer a formatter cleans before producing its output.
///
/// Starts out borrowing the caller's input and only allocates once a stage
/// actually changes something.
#[derive(Clone, PartialEq, Eq)]
pub struct WorkingString<'a> {
    text: Cow<'a, str>,
}

impl<'a> WorkingString<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text: Cow::Borrowed(text),
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in bytes.  Every cleaned form a formatter measures is ASCII,
    /// so this equals the character count wherever it matters.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_inner(self) -> Cow<'a, str> {
        self.text
    }

    pub fn to_lower(&mut self) {
        self.run(&LowerCase);
    }

    pub fn strip_non_digits(&mut self) {
        self.run(&StripNonDigits);
    }

    pub fn strip_non_word_chars(&mut self) {
        self.run(&StripNonWordChars);
    }

    pub fn encode_spaces(&mut self) {
        self.run(&EncodeSpaces);
    }

    fn run(&mut self, stage: &dyn Stage) {
        if !stage.needs_apply(&self.text) {
            return;
        }
        let text = std::mem::take(&mut self.text);
        self.text = stage.apply(text);
        trace!("{} -> {:?}", stage.name(), self.text);
    }
}

impl Deref for WorkingString<'_> {
    type Target = str;

    fn deref(&self) -> &str {
        &self.text
    }
}

impl fmt::Debug for WorkingString<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("WorkingString").field(&self.text).finish()
    }
}

impl fmt::Display for WorkingString<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A reusable chain of cleaning stages, applied in insertion order.
///
/// ```
/// use formatify::{EncodeSpaces, LowerCase, Normalizer};
///
/// let n = Normalizer::builder()
///     .add_stage(LowerCase)
///     .add_stage(EncodeSpaces)
///     .build();
/// assert_eq!(n.normalize("Ahoy There"), "ahoy%20there");
/// ```
#[derive(Default, Clone)]
pub struct Normalizer {
    stages: SmallVec<[Arc<dyn Stage>; 4]>,
}

impl Normalizer {
    pub fn builder() -> NormalizerBuilder {
        NormalizerBuilder::default()
    }

    pub fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let mut working = WorkingString::new(text);
        for stage in &self.stages {
            working.run(stage.as_ref());
        }
        working.into_inner()
    }

    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stages.iter().map(|s| s.name())
    }
}

#[derive(Default)]
pub struct NormalizerBuilder {
    stages: SmallVec<[Arc<dyn Stage>; 4]>,
}

impl NormalizerBuilder {
    pub fn add_stage<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    pub fn build(self) -> Normalizer {
        Normalizer {
            stages: self.stages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn working_string_borrows_until_changed() {
        let input = "6517106483096";
        let mut w = WorkingString::new(input);
        w.strip_non_digits();
        w.to_lower();
        assert!(matches!(w.into_inner(), Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn working_string_mutates_in_place() {
        let mut w = WorkingString::new("Call 215-555-1212");
        w.strip_non_digits();
        assert_eq!(w.as_str(), "2155551212");
        assert_eq!(w.len(), 10);
    }

    #[test]
    fn lower_then_encode() {
        let mut w = WorkingString::new("Hello  World");
        w.to_lower();
        w.encode_spaces();
        assert_eq!(w.to_string(), "hello%20world");
    }

    #[test]
    fn strip_non_word_chars_keeps_digits() {
        let mut w = WorkingString::new("aBcD8FgHiJ9LmNoPqR7TuVwXyZ");
        w.strip_non_word_chars();
        assert_eq!(&*w, "aBcD8FgHiJ9LmNoPqR7TuVwXyZ");
    }

    #[test]
    fn normalizer_runs_stages_in_order() {
        let n = Normalizer::builder()
            .add_stage(StripNonWordChars)
            .add_stage(LowerCase)
            .build();
        assert_eq!(n.normalize("Hello, World_!"), "helloworld");
        assert_eq!(
            n.stage_names().collect::<Vec<_>>(),
            ["strip_non_word_chars", "lower_case"]
        );
    }

    #[test]
    fn empty_normalizer_is_identity() {
        let n = Normalizer::default();
        let input = "Untouched Input";
        assert!(matches!(n.normalize(input), Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }
}
