//! Fixed character classes shared by the checker and the generator.

use std::sync::LazyLock;

pub const LOWERCASE: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

pub const UPPERCASE: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

pub const DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// ASCII punctuation, 32 characters.
pub const SYMBOLS: &[char] = &[
    '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/', ':', ';', '<', '=',
    '>', '?', '@', '[', '\\', ']', '^', '_', '`', '{', '|', '}', '~',
];

/// Union of every class, in class order.
static ALL_CHARS: LazyLock<Vec<char>> = LazyLock::new(|| {
    CharacterClass::ALL
        .iter()
        .flat_map(|class| class.chars().iter().copied())
        .collect()
});

/// One of the four character classes a strong password must contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    /// The fixed set of characters drawn from when generating.
    pub fn chars(self) -> &'static [char] {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    /// Whether `c` counts toward this class when scoring.
    ///
    /// Scoring is broader than generation for symbols: anything that is not an
    /// ASCII letter, an ASCII digit or whitespace is a symbol, so `é`, `٣` and
    /// emoji all qualify. Whitespace includes U+001C..=U+001F.
    pub fn matches(self, c: char) -> bool {
        match self {
            CharacterClass::Lowercase => c.is_ascii_lowercase(),
            CharacterClass::Uppercase => c.is_ascii_uppercase(),
            CharacterClass::Digit => c.is_ascii_digit(),
            CharacterClass::Symbol => !c.is_ascii_alphanumeric() && !is_space(c),
        }
    }
}

/// Unicode `White_Space` plus the ASCII information separators U+001C..=U+001F,
/// which are bidi separators and never count as symbols.
fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// All 94 characters the generator may use to fill a password.
pub fn all_chars() -> &'static [char] {
    &ALL_CHARS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_sizes() {
        assert_eq!(LOWERCASE.len(), 26);
        assert_eq!(UPPERCASE.len(), 26);
        assert_eq!(DIGITS.len(), 10);
        assert_eq!(SYMBOLS.len(), 32);
        assert_eq!(all_chars().len(), 94);
    }

    #[test]
    fn test_symbols_are_ascii_punctuation() {
        assert!(SYMBOLS.iter().all(|c| c.is_ascii_punctuation()));
        let punctuation = (0u8..128).filter(|b| b.is_ascii_punctuation()).count();
        assert_eq!(punctuation, SYMBOLS.len());
    }

    #[test]
    fn test_every_generated_char_matches_its_class() {
        for class in CharacterClass::ALL {
            assert!(class.chars().iter().all(|&c| class.matches(c)), "{:?}", class);
        }
    }

    #[test]
    fn test_symbol_matching_is_broad() {
        assert!(CharacterClass::Symbol.matches('é'));
        assert!(CharacterClass::Symbol.matches('٣'));
        assert!(CharacterClass::Symbol.matches('€'));
        assert!(!CharacterClass::Symbol.matches(' '));
        assert!(!CharacterClass::Symbol.matches('\t'));
        assert!(!CharacterClass::Symbol.matches('\u{00A0}'));
        assert!(!CharacterClass::Symbol.matches('a'));
        assert!(!CharacterClass::Symbol.matches('7'));
    }

    #[test]
    fn test_information_separators_are_not_symbols() {
        for c in '\u{1c}'..='\u{1f}' {
            assert!(!CharacterClass::Symbol.matches(c), "{:?} counted as symbol", c);
        }
        assert!(CharacterClass::Symbol.matches('\u{1b}'));
        assert!(CharacterClass::Symbol.matches('\u{7f}'));
    }

    #[test]
    fn test_letters_and_digits_are_ascii_only() {
        assert!(!CharacterClass::Lowercase.matches('é'));
        assert!(!CharacterClass::Uppercase.matches('É'));
        assert!(!CharacterClass::Digit.matches('٣'));
    }
}
