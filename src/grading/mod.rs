//! Reflection grading: scores, parsed grading replies, per-page appeal
//! tracking and the feedback markup shown under each answer.

mod feedback;
mod result;
mod score;
mod session;

pub use feedback::{FeedbackRenderer, render_appeal_form, render_appeal_result, render_score_badge};
pub use result::{
    APPEAL_FAILED_ERROR, APPEAL_TOO_SHORT_ERROR, AppealOutcome, GRADING_UNAVAILABLE_FEEDBACK,
    GradeResult, INCOMPLETE_ANSWER_FEEDBACK, precheck_answer, precheck_appeal,
};
pub use score::{GRADED_CLASSES, GRADING_CLASS, Score};
pub use session::{AppealRecord, DEFAULT_MAX_APPEALS, GradingSession, QuestionState};
