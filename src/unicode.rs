//! Character classes shared by the cleaning stages.
//!
//! Digit and word classes are ASCII-only: a fullwidth `１` or an accented `é`
//! is neither a digit nor a word character here. Whitespace is the full
//! Unicode `White_Space` set.

/// `[0-9]`
#[inline(always)]
pub const fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// `[0-9A-Za-z]` – underscore is deliberately excluded.
#[inline(always)]
pub const fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

#[inline(always)]
pub fn is_space(c: char) -> bool {
    c.is_whitespace()
}

/// True when lower-casing `c` would produce something other than `c`.
#[inline(always)]
pub fn changes_on_lower(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_uppercase();
    }
    let mut lower = c.to_lowercase();
    !(lower.next() == Some(c) && lower.next().is_none())
}
