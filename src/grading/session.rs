//! Per-page grading state.
//!
//! The page keeps one [`GradingSession`] for the reflections it shows. Each
//! graded question tracks its current result, the answer that was graded, and
//! the appeals spent on it.

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{ClassResponsesError, Result};

use super::result::{AppealOutcome, GradeResult};
use super::score::Score;

/// Appeals a student may file per question unless configured otherwise.
pub const DEFAULT_MAX_APPEALS: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppealRecord {
    pub appeal_text: String,
    pub previous_score: Option<Score>,
    pub new_score: Score,
    pub upgraded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionState {
    pub result: GradeResult,
    pub original_answer: String,
    pub appeal_count: u32,
    pub history: Vec<AppealRecord>,
}

impl QuestionState {
    #[must_use]
    pub fn new(original_answer: impl Into<String>, result: GradeResult) -> Self {
        Self {
            result,
            original_answer: original_answer.into(),
            appeal_count: 0,
            history: Vec::new(),
        }
    }

    /// Why this question cannot be appealed under `max_appeals`, if it cannot.
    fn appeal_blocker(&self, max_appeals: u32) -> Option<&'static str> {
        match self.result.score {
            None => Some("answer has not been graded"),
            Some(Score::E) => Some("answer is already essentially correct"),
            Some(_) if self.appeal_count >= max_appeals => Some("appeal limit reached"),
            Some(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradingSession {
    questions: IndexMap<String, QuestionState>,
    max_appeals: u32,
}

impl Default for GradingSession {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_APPEALS)
    }
}

impl GradingSession {
    #[must_use]
    pub fn new(max_appeals: u32) -> Self {
        Self {
            questions: IndexMap::new(),
            max_appeals,
        }
    }

    #[must_use]
    pub const fn max_appeals(&self) -> u32 {
        self.max_appeals
    }

    #[must_use]
    pub fn get(&self, question_id: &str) -> Option<&QuestionState> {
        self.questions.get(question_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Graded questions in the order they were first graded.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &QuestionState)> {
        self.questions.iter().map(|(id, state)| (id.as_str(), state))
    }

    /// Store a fresh grade for `question_id`, discarding earlier appeals.
    pub fn record_grade(
        &mut self,
        question_id: impl Into<String>,
        original_answer: impl Into<String>,
        result: GradeResult,
    ) -> &QuestionState {
        let question_id = question_id.into();
        tracing::debug!(question_id = %question_id, score = ?result.score, "recording grade");
        let state = QuestionState::new(original_answer, result);
        self.questions.insert(question_id.clone(), state);
        &self.questions[&question_id]
    }

    #[must_use]
    pub fn can_appeal(&self, question_id: &str) -> bool {
        self.get(question_id)
            .is_some_and(|state| state.appeal_blocker(self.max_appeals).is_none())
    }

    #[must_use]
    pub fn appeals_remaining(&self, question_id: &str) -> u32 {
        self.get(question_id).map_or(0, |state| {
            self.max_appeals.saturating_sub(state.appeal_count)
        })
    }

    /// Apply an appeal outcome to `question_id`.
    ///
    /// A rejected outcome leaves the state untouched and does not use up an
    /// appeal. A decided outcome is counted and logged; the score only
    /// changes when the appeal upgraded it.
    ///
    /// # Errors
    /// Returns [`ClassResponsesError::AppealNotAllowed`] if the question was
    /// never graded, is already `E`, or has no appeals left.
    pub fn apply_appeal(
        &mut self,
        question_id: &str,
        appeal_text: &str,
        outcome: &AppealOutcome,
    ) -> Result<&QuestionState> {
        let max_appeals = self.max_appeals;
        let state = self
            .questions
            .get_mut(question_id)
            .ok_or_else(|| not_allowed(question_id, "question has not been graded"))?;
        if let Some(reason) = state.appeal_blocker(max_appeals) {
            return Err(not_allowed(question_id, reason));
        }

        if let AppealOutcome::Decided {
            score,
            previous_score,
            feedback,
            upgraded,
            ..
        } = outcome
        {
            state.appeal_count += 1;
            state.history.push(AppealRecord {
                appeal_text: appeal_text.to_string(),
                previous_score: *previous_score,
                new_score: *score,
                upgraded: *upgraded,
            });
            if *upgraded {
                state.result.score = Some(*score);
                state.result.feedback.clone_from(feedback);
            }
            tracing::debug!(
                question_id,
                appeal_count = state.appeal_count,
                upgraded = *upgraded,
                "appeal applied"
            );
        }

        Ok(&*state)
    }
}

fn not_allowed(question_id: &str, reason: &str) -> ClassResponsesError {
    ClassResponsesError::AppealNotAllowed {
        question_id: question_id.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
