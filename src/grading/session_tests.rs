use serde_json::json;

use super::*;

const QUESTION: &str = "reflect53";

fn session_with(score: Score) -> GradingSession {
    let mut session = GradingSession::default();
    session.record_grade(QUESTION, "My answer", GradeResult::graded(score, "Initial feedback"));
    session
}

fn decided(previous: &GradeResult, score: &str) -> AppealOutcome {
    AppealOutcome::from_api_response(previous, &json!({ "score": score, "feedback": "Re-graded" }))
}

#[test]
fn starts_empty() {
    let session = GradingSession::default();
    assert!(session.is_empty());
    assert_eq!(session.max_appeals(), DEFAULT_MAX_APPEALS);
}

#[test]
fn record_grade_initializes_tracking() {
    let session = session_with(Score::P);
    let state = session.get(QUESTION).unwrap();

    assert_eq!(state.appeal_count, 0);
    assert!(state.history.is_empty());
    assert_eq!(state.result.score, Some(Score::P));
    assert_eq!(state.original_answer, "My answer");
}

#[test]
fn appeal_allowed_for_p_and_i() {
    assert!(session_with(Score::P).can_appeal(QUESTION));
    assert!(session_with(Score::I).can_appeal(QUESTION));
}

#[test]
fn appeal_refused_for_e() {
    let mut session = session_with(Score::E);
    assert!(!session.can_appeal(QUESTION));

    let previous = session.get(QUESTION).unwrap().result.clone();
    let err = session
        .apply_appeal(QUESTION, "Please reconsider", &decided(&previous, "E"))
        .unwrap_err();
    assert!(err.to_string().contains("already essentially correct"));
}

#[test]
fn appeal_refused_for_unknown_question() {
    let mut session = GradingSession::default();
    assert!(!session.can_appeal("missing"));
    assert_eq!(session.appeals_remaining("missing"), 0);

    let outcome = decided(&GradeResult::graded(Score::P, ""), "E");
    assert!(matches!(
        session.apply_appeal("missing", "text", &outcome),
        Err(ClassResponsesError::AppealNotAllowed { .. })
    ));
}

#[test]
fn appeal_refused_when_ungraded() {
    let mut session = GradingSession::default();
    session.record_grade(QUESTION, "My answer", GradeResult::unavailable("Network error"));
    assert!(!session.can_appeal(QUESTION));
}

#[test]
fn upgraded_appeal_replaces_score_and_logs_history() {
    let mut session = session_with(Score::P);
    let previous = session.get(QUESTION).unwrap().result.clone();
    let outcome = decided(&previous, "E");

    let state = session
        .apply_appeal(QUESTION, "I mentioned random assignment.", &outcome)
        .unwrap();

    assert_eq!(state.appeal_count, 1);
    assert_eq!(state.result.score, Some(Score::E));
    assert_eq!(state.result.feedback, "Re-graded");
    assert_eq!(
        state.history,
        vec![AppealRecord {
            appeal_text: "I mentioned random assignment.".to_string(),
            previous_score: Some(Score::P),
            new_score: Score::E,
            upgraded: true,
        }]
    );
    // Now E, so no further appeals.
    assert!(!session.can_appeal(QUESTION));
}

#[test]
fn maintained_appeal_keeps_score_but_counts() {
    let mut session = session_with(Score::P);
    let previous = session.get(QUESTION).unwrap().result.clone();

    let state = session
        .apply_appeal(QUESTION, "I think my answer was correct", &decided(&previous, "P"))
        .unwrap();

    assert_eq!(state.appeal_count, 1);
    assert_eq!(state.result.score, Some(Score::P));
    assert_eq!(state.result.feedback, "Initial feedback");
    assert!(!state.history[0].upgraded);
    assert_eq!(session.appeals_remaining(QUESTION), 2);
}

#[test]
fn downgrading_appeal_never_lowers_score() {
    let mut session = session_with(Score::P);
    let previous = session.get(QUESTION).unwrap().result.clone();

    let state = session
        .apply_appeal(QUESTION, "Reconsider please", &decided(&previous, "I"))
        .unwrap();
    assert_eq!(state.result.score, Some(Score::P));
    assert_eq!(state.history[0].new_score, Score::I);
}

#[test]
fn rejected_appeal_changes_nothing() {
    let mut session = session_with(Score::I);
    let previous = session.get(QUESTION).unwrap().result.clone();
    let outcome = AppealOutcome::rejected("Appeal service unavailable", &previous);

    let state = session.apply_appeal(QUESTION, "My reasoning", &outcome).unwrap();
    assert_eq!(state.appeal_count, 0);
    assert!(state.history.is_empty());
    assert_eq!(session.appeals_remaining(QUESTION), 3);
}

#[test]
fn enforces_max_appeals() {
    let mut session = session_with(Score::P);
    for _ in 0..3 {
        let previous = session.get(QUESTION).unwrap().result.clone();
        session
            .apply_appeal(QUESTION, "Another attempt", &decided(&previous, "P"))
            .unwrap();
    }

    let state = session.get(QUESTION).unwrap();
    assert_eq!(state.appeal_count, 3);
    assert_eq!(state.history.len(), 3);
    assert!(!session.can_appeal(QUESTION));
    assert_eq!(session.appeals_remaining(QUESTION), 0);

    let previous = state.result.clone();
    let err = session
        .apply_appeal(QUESTION, "One more", &decided(&previous, "E"))
        .unwrap_err();
    assert!(err.to_string().contains("appeal limit reached"));
}

#[test]
fn custom_appeal_limit() {
    let mut session = GradingSession::new(1);
    session.record_grade(QUESTION, "answer", GradeResult::graded(Score::I, ""));
    let previous = session.get(QUESTION).unwrap().result.clone();
    session
        .apply_appeal(QUESTION, "reasoning", &decided(&previous, "P"))
        .unwrap();

    // Upgraded to P but the single appeal is spent.
    assert_eq!(session.get(QUESTION).unwrap().result.score, Some(Score::P));
    assert!(!session.can_appeal(QUESTION));
}

#[test]
fn regrading_resets_appeals() {
    let mut session = session_with(Score::P);
    let previous = session.get(QUESTION).unwrap().result.clone();
    session
        .apply_appeal(QUESTION, "reasoning", &decided(&previous, "P"))
        .unwrap();

    session.record_grade(QUESTION, "Revised answer", GradeResult::graded(Score::I, "Hmm"));
    let state = session.get(QUESTION).unwrap();
    assert_eq!(state.appeal_count, 0);
    assert!(state.history.is_empty());
    assert_eq!(state.original_answer, "Revised answer");
}

#[test]
fn iterates_in_grading_order() {
    let mut session = GradingSession::default();
    for id in ["reflect55", "reflect53", "exitTicket"] {
        session.record_grade(id, "answer", GradeResult::graded(Score::P, ""));
    }
    let ids: Vec<&str> = session.iter().map(|(id, _)| id).collect();
    assert_eq!(ids, vec!["reflect55", "reflect53", "exitTicket"]);
    assert_eq!(session.len(), 3);
}
