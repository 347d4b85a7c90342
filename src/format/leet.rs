use crate::{error::FormatError, format::require_input, normalizer::WorkingString, table};
use rand::seq::IndexedRandom;

const NAME: &str = "leet";

/// Which candidate to use when a table entry offers several.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LeetPick {
    /// Always the first candidate.  Output is deterministic.
    #[default]
    First,
    /// A uniformly random candidate per substitution.
    Random,
}

/// Translate `input` into leet speak, always picking the first candidate.
///
/// Whole words with their own entry (`cool` → `kewl`) are replaced outright;
/// any other word is rewritten letter by letter, dropping characters that
/// have no entry.  Every output word is followed by one space.
pub fn to_leet(input: &str) -> Result<String, FormatError> {
    to_leet_with(input, LeetPick::First)
}

pub fn to_leet_with(input: &str, pick: LeetPick) -> Result<String, FormatError> {
    require_input(NAME, input)?;

    let mut text = WorkingString::new(input);
    text.to_lower();

    let out = match pick {
        LeetPick::First => render(&text, |candidates| candidates.first().copied()),
        LeetPick::Random => {
            let mut rng = rand::rng();
            render(&text, |candidates| candidates.choose(&mut rng).copied())
        }
    };
    Ok(out)
}

fn render(
    text: &str,
    mut choose: impl FnMut(&'static [&'static str]) -> Option<&'static str>,
) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    let mut buf = [0u8; 4];
    for word in text.split_whitespace() {
        if let Some(sub) = table::leet(word).and_then(&mut choose) {
            out.push_str(sub);
        } else {
            for c in word.chars() {
                if let Some(sub) = table::leet(c.encode_utf8(&mut buf)).and_then(&mut choose) {
                    out.push_str(sub);
                }
            }
        }
        out.push(' ');
    }
    out
}
