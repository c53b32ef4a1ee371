use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use super::*;

fn args_with(input: Option<PathBuf>) -> FeedbackArgs {
    FeedbackArgs {
        input,
        question_id: "reflect53".to_string(),
        answer: None,
        appeals_used: 0,
        config: None,
    }
}

fn write_reply(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("reply.json");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn renders_graded_reply_with_appeal_form() {
    let dir = TempDir::new().unwrap();
    let input = write_reply(
        &dir,
        r#"{"score":"P","feedback":"Partial credit","missing":["random selection"]}"#,
    );

    let output = run_feedback_impl(&args_with(Some(input)), true).unwrap();

    assert!(output.contains("score-badge score-P"));
    assert!(output.contains("Consider adding: random selection"));
    assert!(output.contains("appeal-btn"));
    assert!(output.contains("id=\"appealForm-reflect53\""));
}

#[test]
fn essentially_correct_has_no_appeal_form() {
    let dir = TempDir::new().unwrap();
    let input = write_reply(&dir, r#"{"score":"E","feedback":"Great"}"#);

    let output = run_feedback_impl(&args_with(Some(input)), true).unwrap();

    assert!(output.contains("score-badge score-E"));
    assert!(!output.contains("appeal-form"));
}

#[test]
fn short_answer_skips_input() {
    let mut args = args_with(Some(PathBuf::from("/does/not/exist.json")));
    args.answer = Some("Too short".to_string());

    let output = run_feedback_impl(&args, true).unwrap();

    assert!(output.contains("score-badge score-I"));
    assert!(output.contains("more complete response"));
}

#[test]
fn long_answer_reads_reply() {
    let dir = TempDir::new().unwrap();
    let input = write_reply(&dir, r#"{"error":"Server error"}"#);
    let mut args = args_with(Some(input));
    args.answer = Some("A sufficiently long answer about sampling.".to_string());

    let output = run_feedback_impl(&args, true).unwrap();

    assert!(output.contains("AI grading unavailable"));
    assert!(!output.contains("appeal-btn"));
}

#[test]
fn appeals_used_shows_count_and_limit() {
    let dir = TempDir::new().unwrap();
    let input = write_reply(&dir, r#"{"score":"I"}"#);
    let mut args = args_with(Some(input));
    args.appeals_used = 3;

    let output = run_feedback_impl(&args, true).unwrap();

    assert!(output.contains("(3/3 appeals used)"));
    assert!(!output.contains("appeal-form"));
}

#[test]
fn invalid_reply_is_an_error() {
    let dir = TempDir::new().unwrap();
    let input = write_reply(&dir, "not json");
    assert_eq!(run_feedback(&args_with(Some(input)), true), EXIT_CONFIG_ERROR);
}
