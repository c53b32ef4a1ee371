use std::fmt::Write;

use crate::output::html_escape;

use super::result::{AppealOutcome, GradeResult};
use super::score::Score;
use super::session::{DEFAULT_MAX_APPEALS, QuestionState};

#[must_use]
pub fn render_score_badge(score: Score) -> String {
    format!(r#"<span class="{}">{score}</span>"#, score.badge_class())
}

/// Renders the AI feedback panel shown under a graded answer.
#[derive(Debug, Clone, Copy)]
pub struct FeedbackRenderer {
    max_appeals: u32,
}

impl FeedbackRenderer {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_appeals: DEFAULT_MAX_APPEALS,
        }
    }

    #[must_use]
    pub const fn with_max_appeals(mut self, max_appeals: u32) -> Self {
        self.max_appeals = max_appeals;
        self
    }

    #[must_use]
    pub fn render_state(&self, question_id: &str, state: &QuestionState) -> String {
        self.render(question_id, &state.result, state.appeal_count)
    }

    #[must_use]
    pub fn render(&self, question_id: &str, result: &GradeResult, appeals_used: u32) -> String {
        let mut output = String::new();
        output.push_str("<div class=\"ai-feedback\">\n");

        output.push_str("  <div class=\"ai-feedback-header\">\n");
        if let Some(score) = result.score {
            writeln!(output, "    {}", render_score_badge(score)).ok();
        }
        output.push_str("    <span class=\"ai-label\">&#x1F916; AI Feedback</span>\n");
        if appeals_used > 0 {
            writeln!(
                output,
                r#"    <span class="appeal-count">({appeals_used}/{} appeals used)</span>"#,
                self.max_appeals
            )
            .ok();
        }
        output.push_str("  </div>\n");

        writeln!(
            output,
            r#"  <div class="ai-feedback-text">{}</div>"#,
            html_escape(&result.feedback)
        )
        .ok();

        if let Some(suggestion) = &result.suggestion {
            writeln!(
                output,
                r#"  <div class="ai-suggestion">&#x1F4A1; {}</div>"#,
                html_escape(suggestion)
            )
            .ok();
        }

        if !result.missing.is_empty() {
            writeln!(
                output,
                r#"  <div class="ai-missing">Consider adding: {}</div>"#,
                html_escape(&result.missing.join(", "))
            )
            .ok();
        }

        if self.can_appeal(result, appeals_used) {
            writeln!(
                output,
                r#"  <button class="appeal-btn" data-question-id="{}">Appeal Score</button>"#,
                html_escape(question_id)
            )
            .ok();
        }

        output.push_str("</div>\n");
        output
    }

    /// Whether the panel offers an appeal: scored below `E` with appeals left.
    #[must_use]
    pub fn can_appeal(&self, result: &GradeResult, appeals_used: u32) -> bool {
        matches!(result.score, Some(score) if score != Score::E) && appeals_used < self.max_appeals
    }
}

impl Default for FeedbackRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Hidden appeal form for `question_id`; the page toggles its `visible` class.
#[must_use]
pub fn render_appeal_form(question_id: &str) -> String {
    let id = html_escape(question_id);
    format!(
        r#"<div class="appeal-form" id="appealForm-{id}">
  <textarea id="appealText-{id}" placeholder="Explain your reasoning..."></textarea>
  <div class="appeal-form-buttons">
    <button class="appeal-submit" data-question-id="{id}">Submit Appeal</button>
    <button class="appeal-cancel" data-question-id="{id}">Cancel</button>
  </div>
</div>
"#
    )
}

/// Notification shown after an appeal completes.
#[must_use]
pub fn render_appeal_result(outcome: &AppealOutcome) -> String {
    let mut output = String::new();
    writeln!(
        output,
        r#"<div class="appeal-result {}">"#,
        outcome.status_class()
    )
    .ok();

    match outcome {
        AppealOutcome::Decided {
            score,
            previous_score,
            feedback,
            upgraded: true,
            ..
        } => {
            output.push_str("  <strong>&#x1F389; Appeal Granted!</strong>\n");
            let from = previous_score.map_or_else(|| "-".to_string(), |s| s.to_string());
            writeln!(output, "  <p>Score changed from {from} to {score}.</p>").ok();
            write_feedback(&mut output, feedback);
        }
        AppealOutcome::Decided { score, feedback, .. } => {
            writeln!(output, "  <strong>Score Maintained: {score}</strong>").ok();
            write_feedback(&mut output, feedback);
        }
        AppealOutcome::Rejected { error, .. } => {
            output.push_str("  <strong>&#x26A0; Appeal Error</strong>\n");
            writeln!(output, "  <p>{}</p>", html_escape(error)).ok();
        }
    }

    output.push_str("</div>\n");
    output
}

fn write_feedback(output: &mut String, feedback: &str) {
    if !feedback.is_empty() {
        writeln!(output, "  <p>{}</p>", html_escape(feedback)).ok();
    }
}

#[cfg(test)]
#[path = "feedback_tests.rs"]
mod tests;
