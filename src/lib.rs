pub mod error;
pub mod format;
pub mod normalizer;
pub mod pirate;
pub mod stage;
pub mod table;
pub mod unicode;

pub use error::{ErrorKind, FormatError};
pub use format::irsa::to_irsa;
pub use format::isbn::to_isbn;
pub use format::leet::{LeetPick, to_leet, to_leet_with};
pub use format::lock_combo::to_lock_combo;
pub use format::morse::to_morse_code;
pub use format::phone::to_phone;
pub use format::ssn::to_ssn;
pub use format::url::to_url;
pub use normalizer::{Normalizer, NormalizerBuilder, WorkingString};
pub use pirate::{PirateConfig, PirateTranslator, to_pirate_speak, to_pirate_speak_async};
pub use stage::Stage;
pub use stage::encode_spaces::EncodeSpaces;
pub use stage::lower_case::LowerCase;
pub use stage::strip_non_digits::StripNonDigits;
pub use stage::strip_non_word_chars::StripNonWordChars;

#[cfg(test)]
mod tests {
    include!("tests/unit.rs");
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
}
