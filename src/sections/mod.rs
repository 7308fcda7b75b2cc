//! Password evaluation sections
//!
//! Each section checks one criterion and is worth one point.

mod length;
mod variety;

pub use length::length_section;
pub use variety::{digit_section, lowercase_section, symbol_section, uppercase_section};

use crate::types::Criterion;

/// Result of a single section.
///
/// `feedback` is the line to show the user, if the section has one to give.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionResult {
    pub criterion: Criterion,
    pub passed: bool,
    pub feedback: Option<String>,
}

impl SectionResult {
    pub fn pass(criterion: Criterion) -> Self {
        Self { criterion, passed: true, feedback: None }
    }

    pub fn pass_with(criterion: Criterion, feedback: impl Into<String>) -> Self {
        Self { criterion, passed: true, feedback: Some(feedback.into()) }
    }

    pub fn fail(criterion: Criterion, feedback: impl Into<String>) -> Self {
        Self { criterion, passed: false, feedback: Some(feedback.into()) }
    }
}
