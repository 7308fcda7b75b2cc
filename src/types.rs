//! Report types produced by the strength checker.

use std::fmt;

/// One of the five checks that each contribute a point to the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    Length,
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

/// Number of criteria a password passed, `0..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(u8);

impl Score {
    pub const MAX: u8 = 5;

    /// Creates a score, saturating at [`Score::MAX`].
    pub fn new(value: u8) -> Self {
        Self(value.min(Self::MAX))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rating {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl Rating {
    /// 5 is very strong, 4 strong, 2-3 medium, anything lower weak.
    pub fn from_score(score: Score) -> Self {
        match score.value() {
            5 => Rating::VeryStrong,
            4 => Rating::Strong,
            2 | 3 => Rating::Medium,
            _ => Rating::Weak,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rating::Weak => "WEAK",
            Rating::Medium => "MEDIUM",
            Rating::Strong => "STRONG",
            Rating::VeryStrong => "VERY STRONG",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Rating::Weak => "High Risk",
            Rating::Medium => "Needs Improvement",
            Rating::Strong => "Good Complexity",
            Rating::VeryStrong => "Excellent Complexity",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of checking one password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    /// Criteria that passed, in evaluation order.
    pub passed: Vec<Criterion>,
    /// Human readable lines, in evaluation order.
    pub feedback: Vec<String>,
}

impl StrengthReport {
    pub fn score(&self) -> Score {
        Score::new(self.passed.len() as u8)
    }

    pub fn rating(&self) -> Rating {
        Rating::from_score(self.score())
    }

    pub fn has_passed(&self, criterion: Criterion) -> bool {
        self.passed.contains(&criterion)
    }
}
