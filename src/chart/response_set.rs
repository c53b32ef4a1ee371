//! Input payloads for a class response chart.
//!
//! Aggregate data arrives in one of two JSON shapes:
//!
//! ```json
//! { "responses": [ { "answer": "foo" }, { "answer": "bar" } ] }
//! { "distribution": { "foo": 60, "bar": 40 }, "totalResponses": 50 }
//! ```
//!
//! Parsing never fails on structure. Anything that is not recognisable
//! degrades to an empty distribution so the chart can still render.

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::Result;

/// Label the aggregate service uses for students who left the answer empty.
pub const BLANK_LABEL: &str = "(blank)";

/// One student's answer to a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseRecord {
    pub answer: String,
}

impl ResponseRecord {
    #[must_use]
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
        }
    }
}

/// Pre-aggregated answers. Values are either counts or percentages; the
/// chart model decides which.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Distribution {
    /// Answer label to value, in encounter order.
    pub values: IndexMap<String, f64>,
    /// Number of students behind the distribution, when the service knows it.
    pub total_responses: Option<f64>,
}

impl Distribution {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_value(mut self, label: impl Into<String>, value: f64) -> Self {
        self.values.insert(label.into(), value);
        self
    }

    #[must_use]
    pub const fn with_total_responses(mut self, total: f64) -> Self {
        self.total_responses = Some(total);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResponseSet {
    /// Individual answers, one record per submission.
    Responses(Vec<ResponseRecord>),
    /// Pre-aggregated answer distribution.
    Distribution(Distribution),
}

impl Default for ResponseSet {
    fn default() -> Self {
        Self::Distribution(Distribution::default())
    }
}

impl ResponseSet {
    /// Build a response list from plain answer strings.
    #[must_use]
    pub fn from_answers<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Responses(answers.into_iter().map(ResponseRecord::new).collect())
    }

    /// Parse a JSON payload.
    ///
    /// # Errors
    /// Returns an error only if `input` is not valid JSON. Valid JSON of an
    /// unexpected shape yields an empty distribution.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(input)?;
        Ok(Self::from_value(&value))
    }

    /// Interpret an already-parsed JSON payload.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            tracing::debug!("response payload is not an object, treating as empty");
            return Self::default();
        };

        if let Some(Value::Array(records)) = object.get("responses") {
            return Self::Responses(records.iter().map(record_from_value).collect());
        }

        match object.get("distribution") {
            Some(Value::Object(map)) => {
                let values = map
                    .iter()
                    .filter_map(|(label, raw)| match raw.as_f64() {
                        Some(v) if v.is_finite() && v >= 0.0 => Some((label.clone(), v)),
                        _ => {
                            tracing::debug!(
                                label = %label,
                                "dropping non-numeric distribution value"
                            );
                            None
                        }
                    })
                    .collect();
                let total_responses = object.get("totalResponses").and_then(Value::as_f64);
                Self::Distribution(Distribution {
                    values,
                    total_responses,
                })
            }
            Some(_) => {
                tracing::debug!("distribution is not an object, treating as empty");
                Self::default()
            }
            None => Self::default(),
        }
    }
}

fn record_from_value(value: &Value) -> ResponseRecord {
    let answer = value
        .get("answer")
        .and_then(Value::as_str)
        .unwrap_or_default();
    ResponseRecord::new(answer)
}

#[cfg(test)]
#[path = "response_set_tests.rs"]
mod tests;
