//! Password generation and strength checking library
//!
//! This library scores passwords against a fixed 5-point heuristic and
//! generates random passwords that always pass it.
//!
//! # Features
//!
//! - `async` (default): Enables debounced, cancellable report delivery over a channel
//! - `tracing`: Enables logging via tracing crate
//! - `cli` (default): Builds the `pwd-tool` binary
//!
//! # Example
//!
//! ```rust
//! use pwd_tool::{check_strength, generate_password, Rating};
//! use secrecy::SecretString;
//!
//! let generated = generate_password(16);
//! assert_eq!(check_strength(&generated).rating(), Rating::VeryStrong);
//!
//! let typed = SecretString::new("hunter2".to_string().into());
//! let report = check_strength(&typed);
//! println!("Rating: {} ({})", report.rating(), report.rating().description());
//! for line in &report.feedback {
//!     println!("  {}", line);
//! }
//! ```

// Internal modules
mod charset;
mod evaluator;
mod generator;
mod sections;
mod types;

// Public API
pub use charset::{CharacterClass, DIGITS, LOWERCASE, SYMBOLS, UPPERCASE, all_chars};
pub use evaluator::{MIN_LENGTH, StrengthChecker, check_strength};
pub use generator::{
    DEFAULT_LENGTH, MIN_GENERATED_LENGTH, RandomSource, generate_password, generate_password_with,
};
pub use types::{Criterion, Rating, Score, StrengthReport};

#[cfg(feature = "async")]
pub use evaluator::{DEBOUNCE, check_strength_tx};
