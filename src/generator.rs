//! Secure password generator.
//!
//! Every generated password contains at least one character of each class,
//! so it passes all the variety criteria of the checker. With a length of
//! [`MIN_LENGTH`](crate::MIN_LENGTH) or more it also passes the length one.

use rand::Rng;
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use secrecy::SecretString;

use crate::charset::{CharacterClass, all_chars};

/// Length used when the caller has no preference.
pub const DEFAULT_LENGTH: usize = 12;

/// Shortest password that can hold one character of each class.
pub const MIN_GENERATED_LENGTH: usize = CharacterClass::ALL.len();

/// Source of randomness used by the generator.
///
/// Implemented for every [`rand::Rng`], so production code passes [`OsRng`]
/// and tests can pass a seeded generator.
pub trait RandomSource {
    /// Picks one element of `set` uniformly. `set` must not be empty.
    fn choice(&mut self, set: &[char]) -> char;

    /// Shuffles `chars` in place, every permutation equally likely.
    fn shuffle(&mut self, chars: &mut [char]);
}

impl<R: Rng> RandomSource for R {
    fn choice(&mut self, set: &[char]) -> char {
        set[self.gen_range(0..set.len())]
    }

    fn shuffle(&mut self, chars: &mut [char]) {
        SliceRandom::shuffle(chars, self);
    }
}

/// Generates a password of `length` characters from the operating system CSPRNG.
///
/// Lengths below [`MIN_GENERATED_LENGTH`] are raised to it. Panics only if the
/// operating system cannot provide entropy.
///
/// # Example
///
/// ```rust
/// use pwd_tool::generate_password;
/// use secrecy::ExposeSecret;
///
/// let password = generate_password(16);
/// assert_eq!(password.expose_secret().chars().count(), 16);
/// ```
pub fn generate_password(length: usize) -> SecretString {
    generate_password_with(&mut OsRng, length)
}

/// Same as [`generate_password`] with an injected random source.
pub fn generate_password_with<S: RandomSource + ?Sized>(rng: &mut S, length: usize) -> SecretString {
    let length = length.max(MIN_GENERATED_LENGTH);

    let mut chars: Vec<char> = Vec::with_capacity(length);
    for class in CharacterClass::ALL {
        chars.push(rng.choice(class.chars()));
    }

    let pool = all_chars();
    for _ in MIN_GENERATED_LENGTH..length {
        chars.push(rng.choice(pool));
    }

    // Forced characters must not sit at predictable positions
    rng.shuffle(&mut chars);

    #[cfg(feature = "tracing")]
    tracing::debug!(length, "password generated");

    SecretString::new(chars.into_iter().collect::<String>().into())
}
