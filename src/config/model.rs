use serde::{Deserialize, Serialize};

use crate::chart::MAX_CHART_ROWS;
use crate::grading::DEFAULT_MAX_APPEALS;

pub const DEFAULT_MIN_ANSWER_CHARS: usize = 20;
pub const DEFAULT_MIN_APPEAL_CHARS: usize = 10;

/// Chart rendering options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChartConfig {
    /// Bar rows shown before the rest are folded away (1..=10).
    #[serde(default = "default_max_rows")]
    pub max_rows: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            max_rows: MAX_CHART_ROWS,
        }
    }
}

/// Reflection grading options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GradingConfig {
    /// Appeals allowed per question.
    #[serde(default = "default_max_appeals")]
    pub max_appeals: u32,

    /// Trimmed answers shorter than this are scored `I` without calling the grader.
    #[serde(default = "default_min_answer_chars")]
    pub min_answer_chars: usize,

    /// Trimmed appeal text shorter than this is rejected locally.
    #[serde(default = "default_min_appeal_chars")]
    pub min_appeal_chars: usize,
}

impl Default for GradingConfig {
    fn default() -> Self {
        Self {
            max_appeals: DEFAULT_MAX_APPEALS,
            min_answer_chars: DEFAULT_MIN_ANSWER_CHARS,
            min_appeal_chars: DEFAULT_MIN_APPEAL_CHARS,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub chart: ChartConfig,

    #[serde(default)]
    pub grading: GradingConfig,
}

const fn default_max_rows() -> usize {
    MAX_CHART_ROWS
}

const fn default_max_appeals() -> u32 {
    DEFAULT_MAX_APPEALS
}

const fn default_min_answer_chars() -> usize {
    DEFAULT_MIN_ANSWER_CHARS
}

const fn default_min_appeal_chars() -> usize {
    DEFAULT_MIN_APPEAL_CHARS
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
