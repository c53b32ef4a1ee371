//! Grading and appeal results as the drawer sees them.
//!
//! The grading service replies with loosely shaped JSON. These types turn
//! a reply (or a local precheck) into something the session and the
//! feedback panel can rely on.

use std::fmt::Display;

use serde::Serialize;
use serde_json::Value;

use super::score::Score;

pub const INCOMPLETE_ANSWER_FEEDBACK: &str =
    "Please provide a more complete response (at least a few sentences).";
pub const GRADING_UNAVAILABLE_FEEDBACK: &str = "AI grading unavailable. Please try again later.";
pub const APPEAL_TOO_SHORT_ERROR: &str = "Please explain your reasoning in more detail.";
pub const APPEAL_FAILED_ERROR: &str = "Appeal could not be processed.";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeResult {
    /// `None` when grading did not happen (service unavailable).
    pub score: Option<Score>,
    pub feedback: String,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub suggestion: Option<String>,
    pub ai_graded: bool,
    pub model: Option<String>,
    pub error: Option<String>,
}

impl GradeResult {
    /// Local result for an answer too short to send for grading.
    #[must_use]
    pub fn incomplete_answer() -> Self {
        Self {
            score: Some(Score::I),
            feedback: INCOMPLETE_ANSWER_FEEDBACK.to_string(),
            ..Self::default()
        }
    }

    /// Result when the grading service could not be reached or refused.
    #[must_use]
    pub fn unavailable(error: impl Display) -> Self {
        Self {
            score: None,
            feedback: GRADING_UNAVAILABLE_FEEDBACK.to_string(),
            error: Some(error.to_string()),
            ..Self::default()
        }
    }

    /// A plain graded result.
    #[must_use]
    pub fn graded(score: Score, feedback: impl Into<String>) -> Self {
        Self {
            score: Some(score),
            feedback: feedback.into(),
            ai_graded: true,
            ..Self::default()
        }
    }

    /// Interpret a grading-service reply.
    ///
    /// A reply carrying an `error` field is a failed request. Otherwise a
    /// missing or unrecognised score falls back to `I`.
    #[must_use]
    pub fn from_api_response(reply: &Value) -> Self {
        if let Some(error) = error_field(reply) {
            return Self::unavailable(error);
        }
        if !reply.is_object() {
            return Self::unavailable("Malformed grading response");
        }

        Self {
            score: Some(
                string_field(reply, "score")
                    .and_then(|s| Score::parse_lenient(&s))
                    .unwrap_or(Score::I),
            ),
            feedback: string_field(reply, "feedback").unwrap_or_default(),
            matched: string_list(reply, "matched"),
            missing: string_list(reply, "missing"),
            suggestion: string_field(reply, "suggestion").filter(|s| !s.trim().is_empty()),
            ai_graded: true,
            model: string_field(reply, "_model"),
            error: None,
        }
    }
}

/// Grade locally when `answer` is too short to be worth sending.
#[must_use]
pub fn precheck_answer(answer: &str, min_chars: usize) -> Option<GradeResult> {
    (answer.trim().chars().count() < min_chars).then(GradeResult::incomplete_answer)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum AppealOutcome {
    /// The service re-graded the answer.
    #[serde(rename_all = "camelCase")]
    Decided {
        score: Score,
        previous_score: Option<Score>,
        feedback: String,
        upgraded: bool,
        provider: Option<String>,
        model: Option<String>,
    },
    /// The appeal never reached a decision; the previous score stands.
    Rejected { error: String, score: Score },
}

impl AppealOutcome {
    /// Rejection that keeps `previous`'s score (or `I` if it had none).
    #[must_use]
    pub fn rejected(error: impl Display, previous: &GradeResult) -> Self {
        Self::Rejected {
            error: error.to_string(),
            score: previous.score.unwrap_or(Score::I),
        }
    }

    /// Interpret an appeal-service reply for an answer last graded `previous`.
    #[must_use]
    pub fn from_api_response(previous: &GradeResult, reply: &Value) -> Self {
        if let Some(error) = error_field(reply) {
            return Self::rejected(error, previous);
        }
        let Some(score) = string_field(reply, "score").and_then(|s| Score::parse_lenient(&s))
        else {
            return Self::rejected(APPEAL_FAILED_ERROR, previous);
        };

        Self::Decided {
            score,
            previous_score: previous.score,
            feedback: string_field(reply, "feedback").unwrap_or_default(),
            upgraded: Score::is_upgrade(previous.score, Some(score)),
            provider: string_field(reply, "_provider"),
            model: string_field(reply, "_model"),
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Decided { .. })
    }

    #[must_use]
    pub const fn is_upgraded(&self) -> bool {
        matches!(self, Self::Decided { upgraded: true, .. })
    }

    /// Score to show after the appeal.
    #[must_use]
    pub const fn score(&self) -> Score {
        match self {
            Self::Decided { score, .. } | Self::Rejected { score, .. } => *score,
        }
    }

    /// CSS modifier for the appeal result notification.
    #[must_use]
    pub const fn status_class(&self) -> &'static str {
        match self {
            Self::Decided { upgraded: true, .. } => "upgraded",
            Self::Decided { .. } => "maintained",
            Self::Rejected { .. } => "error",
        }
    }
}

/// Reject locally when the appeal text is too short to be worth sending.
#[must_use]
pub fn precheck_appeal(
    appeal_text: &str,
    previous: &GradeResult,
    min_chars: usize,
) -> Option<AppealOutcome> {
    (appeal_text.trim().chars().count() < min_chars)
        .then(|| AppealOutcome::rejected(APPEAL_TOO_SHORT_ERROR, previous))
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

fn string_list(value: &Value, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn error_field(value: &Value) -> Option<String> {
    match value.get("error")? {
        Value::Null => None,
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
