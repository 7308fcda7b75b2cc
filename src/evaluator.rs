//! Password strength evaluator - main evaluation logic.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{
    SectionResult, digit_section, length_section, lowercase_section, symbol_section,
    uppercase_section,
};
use crate::types::StrengthReport;

/// Default minimum length for the length criterion.
pub const MIN_LENGTH: usize = 12;

type Section<'a> = &'a dyn Fn(&SecretString) -> SectionResult;

/// Scores passwords against the five criteria.
///
/// The only knob is the minimum length; [`StrengthChecker::default`] uses
/// [`MIN_LENGTH`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthChecker {
    min_length: usize,
}

impl Default for StrengthChecker {
    fn default() -> Self {
        Self::new(MIN_LENGTH)
    }
}

impl StrengthChecker {
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Evaluates `password` and returns the passed criteria with feedback.
    ///
    /// Total over all inputs, including the empty string.
    pub fn check(&self, password: &SecretString) -> StrengthReport {
        let mut passed = Vec::new();
        let mut feedback = Vec::new();

        // Orchestrator: execute sections in sequence
        let length = |password: &SecretString| length_section(password, self.min_length);
        let sections: [(&str, Section); 5] = [
            ("length", &length),
            ("lowercase", &lowercase_section),
            ("uppercase", &uppercase_section),
            ("digit", &digit_section),
            ("symbol", &symbol_section),
        ];

        for (_section_name, section_fn) in sections {
            let result = section_fn(password);

            #[cfg(feature = "tracing")]
            tracing::trace!(section = _section_name, passed = result.passed, "section evaluated");

            if result.passed {
                passed.push(result.criterion);
            }
            if let Some(line) = result.feedback {
                feedback.push(line);
            }
        }

        let report = StrengthReport { passed, feedback };

        #[cfg(feature = "tracing")]
        tracing::debug!(score = report.score().value(), rating = %report.rating(), "password evaluated");

        report
    }
}

/// Evaluates password strength with the default minimum length.
///
/// # Example
///
/// ```rust
/// use pwd_tool::{check_strength, Rating};
/// use secrecy::SecretString;
///
/// let report = check_strength(&SecretString::new("Tr0ub4dor&3xyz".to_string().into()));
/// assert_eq!(report.rating(), Rating::VeryStrong);
/// ```
pub fn check_strength(password: &SecretString) -> StrengthReport {
    StrengthChecker::default().check(password)
}

/// Delay before evaluating, so rapid keystrokes cancel stale checks.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Async version that sends the report via channel.
///
/// Nothing is sent if `token` is cancelled during the debounce.
#[cfg(feature = "async")]
pub async fn check_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthReport>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::time::sleep(DEBOUNCE).await;
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("evaluation cancelled before start");
        return;
    }

    let report = check_strength(password);

    if let Err(_e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send strength report: {}", _e);
    }
}
