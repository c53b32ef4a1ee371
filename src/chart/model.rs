//! Resolution of a [`ResponseSet`] into chart rows.

use indexmap::IndexMap;
use serde::Serialize;

use super::response_set::{BLANK_LABEL, Distribution, ResponseRecord, ResponseSet};

/// Most bars a chart ever shows.
pub const MAX_CHART_ROWS: usize = 10;

/// Largest value sum still read as a percentage distribution. One point
/// above 100 absorbs rounding (e.g. 33 + 33 + 33 + 1 spread across answers).
pub const PERCENT_SUM_LIMIT: f64 = 101.0;

/// Clamp a requested row count to `1..=MAX_CHART_ROWS`.
#[must_use]
pub const fn clamp_rows(max_rows: usize) -> usize {
    if max_rows == 0 {
        1
    } else if max_rows > MAX_CHART_ROWS {
        MAX_CHART_ROWS
    } else {
        max_rows
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Counts,
    Percentages,
}

/// One bar: an answer label and its count or percentage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartEntry {
    pub label: String,
    pub value: f64,
}

impl ChartEntry {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Every resolved entry before the row cap is applied.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Classification {
    /// Sorted by value, descending; ties keep encounter order.
    pub entries: Vec<ChartEntry>,
    pub total: Option<f64>,
    pub display_mode: DisplayMode,
}

impl Classification {
    #[must_use]
    pub fn from_response_set(set: &ResponseSet) -> Self {
        let mut classification = match set {
            ResponseSet::Responses(records) => Self::from_records(records),
            ResponseSet::Distribution(distribution) => Self::from_distribution(distribution),
        };
        // sort_by is stable, so equal values stay in encounter order.
        classification
            .entries
            .sort_by(|a, b| b.value.total_cmp(&a.value));
        classification
    }

    #[allow(clippy::cast_precision_loss)]
    fn from_records(records: &[ResponseRecord]) -> Self {
        let mut groups: IndexMap<&str, f64> = IndexMap::new();
        for record in records {
            let answer = record.answer.trim();
            if answer.is_empty() {
                continue;
            }
            *groups.entry(answer).or_insert(0.0) += 1.0;
        }

        Self {
            entries: groups
                .into_iter()
                .map(|(label, count)| ChartEntry::new(label, count))
                .collect(),
            total: Some(records.len() as f64),
            display_mode: DisplayMode::Counts,
        }
    }

    fn from_distribution(distribution: &Distribution) -> Self {
        let raw: Vec<ChartEntry> = distribution
            .values
            .iter()
            .filter(|(label, _)| !label.is_empty() && label.as_str() != BLANK_LABEL)
            .map(|(label, value)| ChartEntry::new(label.clone(), *value))
            .collect();
        let sum: f64 = raw.iter().map(|entry| entry.value).sum();
        let looks_like_percentages = sum > 0.0 && sum <= PERCENT_SUM_LIMIT;

        if let Some(total) = distribution.total_responses.filter(|t| *t > 0.0) {
            let entries = if looks_like_percentages {
                raw.into_iter()
                    .map(|entry| ChartEntry {
                        value: (entry.value / 100.0 * total).round(),
                        ..entry
                    })
                    .collect()
            } else {
                raw
            };
            return Self {
                entries,
                total: Some(total),
                display_mode: DisplayMode::Counts,
            };
        }

        // A lone value <= 100 could be "n students" or "100%"; read it as a count.
        if looks_like_percentages && raw.len() > 1 {
            return Self {
                entries: raw,
                total: None,
                display_mode: DisplayMode::Percentages,
            };
        }

        Self {
            entries: raw,
            total: Some(sum),
            display_mode: DisplayMode::Counts,
        }
    }

    /// Sum of all entry values, including any beyond the row cap.
    #[must_use]
    pub fn value_sum(&self) -> f64 {
        self.entries.iter().map(|entry| entry.value).sum()
    }
}

/// What a chart shows: at most [`MAX_CHART_ROWS`] sorted entries, the
/// response total, and how to print values.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartModel {
    pub entries: Vec<ChartEntry>,
    pub total: Option<f64>,
    pub display_mode: DisplayMode,
    /// Entries cut by the row cap.
    pub omitted: usize,
}

impl ChartModel {
    /// Resolve `set` with the default row cap.
    #[must_use]
    pub fn from_response_set(set: &ResponseSet) -> Self {
        Self::with_max_rows(set, MAX_CHART_ROWS)
    }

    /// Resolve `set`, keeping at most `max_rows` entries (never more than
    /// [`MAX_CHART_ROWS`]).
    #[must_use]
    pub fn with_max_rows(set: &ResponseSet, max_rows: usize) -> Self {
        Self::from_classification(Classification::from_response_set(set), max_rows)
    }

    /// Apply the row cap. `max_rows` is clamped to `1..=MAX_CHART_ROWS` so a
    /// chart with responses always shows at least one bar.
    #[must_use]
    pub fn from_classification(classification: Classification, max_rows: usize) -> Self {
        let cap = clamp_rows(max_rows);
        let Classification {
            mut entries,
            total,
            display_mode,
        } = classification;
        let omitted = entries.len().saturating_sub(cap);
        entries.truncate(cap);
        Self {
            entries,
            total,
            display_mode,
            omitted,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value of the largest entry, which every bar is scaled against.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.entries.first().map_or(0.0, |entry| entry.value)
    }

    /// Bar width in percent of the chart for `value`.
    #[must_use]
    pub fn bar_width(&self, value: f64) -> f64 {
        let max = self.max_value();
        if max > 0.0 { value / max * 100.0 } else { 0.0 }
    }

    #[must_use]
    pub const fn is_percentages(&self) -> bool {
        matches!(self.display_mode, DisplayMode::Percentages)
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
