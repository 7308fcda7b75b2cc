//! Character variety sections - one per required character class.

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;
use crate::charset::CharacterClass;
use crate::types::Criterion;

fn class_section(
    password: &SecretString,
    class: CharacterClass,
    criterion: Criterion,
    missing: &str,
) -> SectionResult {
    if password.expose_secret().chars().any(|c| class.matches(c)) {
        return SectionResult::pass(criterion);
    }
    SectionResult::fail(criterion, missing)
}

/// Requires at least one ASCII lowercase letter.
pub fn lowercase_section(password: &SecretString) -> SectionResult {
    class_section(password, CharacterClass::Lowercase, Criterion::Lowercase, "Missing lowercase letter.")
}

/// Requires at least one ASCII uppercase letter.
pub fn uppercase_section(password: &SecretString) -> SectionResult {
    class_section(password, CharacterClass::Uppercase, Criterion::Uppercase, "Missing uppercase letter.")
}

/// Requires at least one ASCII digit.
pub fn digit_section(password: &SecretString) -> SectionResult {
    class_section(password, CharacterClass::Digit, Criterion::Digit, "Missing digit.")
}

/// Requires at least one character that is not an ASCII letter, digit or whitespace.
pub fn symbol_section(password: &SecretString) -> SectionResult {
    class_section(password, CharacterClass::Symbol, Criterion::Symbol, "Missing symbol.")
}
