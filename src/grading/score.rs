use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ClassResponsesError;

/// Rubric score for a free-response answer.
///
/// Variants are declared lowest first, so the derived ordering is
/// `I < P < E`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Score {
    /// Incorrect.
    I,
    /// Partially correct.
    P,
    /// Essentially correct.
    E,
}

impl Score {
    pub const ALL: [Self; 3] = [Self::E, Self::P, Self::I];

    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::E => 3,
            Self::P => 2,
            Self::I => 1,
        }
    }

    /// Rank of a possibly missing score; a missing score ranks below `I`.
    #[must_use]
    pub fn rank_of(score: Option<Self>) -> u8 {
        score.map_or(0, Self::rank)
    }

    /// `true` when `new` ranks strictly above `previous`.
    #[must_use]
    pub fn is_upgrade(previous: Option<Self>, new: Option<Self>) -> bool {
        Self::rank_of(new) > Self::rank_of(previous)
    }

    #[must_use]
    pub const fn letter(self) -> &'static str {
        match self {
            Self::E => "E",
            Self::P => "P",
            Self::I => "I",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::E => "Essentially correct",
            Self::P => "Partially correct",
            Self::I => "Incorrect",
        }
    }

    /// CSS classes for the score badge.
    #[must_use]
    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::E => "score-badge score-E",
            Self::P => "score-badge score-P",
            Self::I => "score-badge score-I",
        }
    }

    /// CSS class applied to a graded answer field.
    #[must_use]
    pub const fn graded_class(self) -> &'static str {
        match self {
            Self::E => "graded-E",
            Self::P => "graded-P",
            Self::I => "graded-I",
        }
    }

    /// Lenient parse used for API replies: unknown values become `None`.
    #[must_use]
    pub fn parse_lenient(value: &str) -> Option<Self> {
        value.parse().ok()
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

impl FromStr for Score {
    type Err = ClassResponsesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "E" => Ok(Self::E),
            "P" => Ok(Self::P),
            "I" => Ok(Self::I),
            _ => Err(ClassResponsesError::InvalidScore(s.to_string())),
        }
    }
}

/// CSS class applied to an answer field while it is being graded.
pub const GRADING_CLASS: &str = "grading";

/// Every class the grading flow may leave on an answer field. Callers clear
/// these before applying the class for a new score.
pub const GRADED_CLASSES: [&str; 3] = ["graded-E", "graded-P", "graded-I"];

#[cfg(test)]
#[path = "score_tests.rs"]
mod tests;
