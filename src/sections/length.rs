//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;
use crate::types::Criterion;

/// Checks that the password has at least `min_length` characters.
///
/// Length is counted in `char`s, so `"ééé"` is three long. Unlike the other
/// sections this one reports success too.
pub fn length_section(password: &SecretString, min_length: usize) -> SectionResult {
    if password.expose_secret().chars().count() >= min_length {
        return SectionResult::pass_with(Criterion::Length, "Length requirement met.");
    }
    SectionResult::fail(
        Criterion::Length,
        format!("Password should be at least {} characters long.", min_length),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_length_section_too_short() {
        let result = length_section(&secret("Short1!"), 12);
        assert!(!result.passed);
        assert_eq!(
            result.feedback.as_deref(),
            Some("Password should be at least 12 characters long.")
        );
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        let result = length_section(&secret("123456789012"), 12);
        assert!(result.passed);
        assert_eq!(result.feedback.as_deref(), Some("Length requirement met."));
    }

    #[test]
    fn test_length_section_counts_chars_not_bytes() {
        // 6 chars, 12 bytes
        let result = length_section(&secret("éééééé"), 12);
        assert!(!result.passed);

        let result = length_section(&secret("éééééé"), 6);
        assert!(result.passed);
    }

    #[test]
    fn test_length_section_custom_minimum() {
        let result = length_section(&secret("abcd"), 20);
        assert_eq!(
            result.feedback.as_deref(),
            Some("Password should be at least 20 characters long.")
        );
    }
}
