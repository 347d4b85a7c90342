//! Immutable lookup tables, built at compile time.
//!
//! All keys are lower case; callers lower-case their input first.

pub(crate) mod irsa;
pub(crate) mod leet;
pub(crate) mod morse;

/// Substitution candidates for a whole word or a single letter.
/// The slice is never empty; its first element is the canonical choice.
#[inline]
pub fn leet(key: &str) -> Option<&'static [&'static str]> {
    leet::LEET.get(key).copied()
}

/// IRSA (NATO) phonetic word for a letter, or `" | "` for a space.
#[inline]
pub fn irsa(c: char) -> Option<&'static str> {
    irsa::IRSA.get(&c).copied()
}

/// Dot/dash pattern for a letter, digit or punctuation mark.
#[inline]
pub fn morse(c: char) -> Option<&'static str> {
    morse::MORSE.get(&c).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leet_candidates_are_never_empty() {
        for (key, candidates) in leet::LEET.entries() {
            assert!(!candidates.is_empty(), "empty candidates for {key:?}");
            assert_eq!(key.to_lowercase(), *key, "key {key:?} is not lower case");
        }
    }

    #[test]
    fn leet_covers_every_letter() {
        for c in 'a'..='z' {
            let key = c.to_string();
            assert!(leet(&key).is_some(), "missing leet letter {c}");
        }
        assert_eq!(leet("cool"), Some(&["kewl"][..]));
        assert_eq!(leet("a"), Some(&["4", "@"][..]));
        assert_eq!(leet("A"), None);
    }

    #[test]
    fn irsa_keys_are_letters_and_space() {
        assert_eq!(irsa::IRSA.len(), 27);
        for c in 'a'..='z' {
            assert!(irsa(c).is_some(), "missing irsa letter {c}");
        }
        assert_eq!(irsa(' '), Some(" | "));
        assert_eq!(irsa('x'), Some("x-ray"));
        assert_eq!(irsa('1'), None);
    }

    #[test]
    fn morse_covers_letters_and_digits() {
        for c in ('a'..='z').chain('0'..='9') {
            assert!(morse(c).is_some(), "missing morse symbol {c}");
        }
        assert_eq!(morse('s'), Some(". . ."));
        assert_eq!(morse('o'), Some("_ _ _"));
        assert_eq!(morse('?'), Some("··––·· "));
        assert_eq!(morse('A'), None);
        assert_eq!(morse(' '), None);
    }
}
