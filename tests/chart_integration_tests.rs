//! Integration tests for the `chart` command.

mod common;

use common::{PERCENT_PAYLOAD, RESPONSES_PAYLOAD, TestFixture};
use predicates::prelude::*;

// =============================================================================
// Input sources
// =============================================================================

#[test]
fn chart_reads_payload_file() {
    let fixture = TestFixture::new();
    let payload = fixture.create_file("payload.json", RESPONSES_PAYLOAD);

    class_responses!()
        .current_dir(fixture.path())
        .args(["--no-config", "chart", "--question-id", "q1"])
        .arg(&payload)
        .assert()
        .success()
        .stdout(predicate::str::contains("<div class=\"bar-chart\">"))
        .stdout(predicate::str::contains("3 responses"))
        .stdout(predicate::str::contains("width: 100%"))
        .stdout(predicate::str::contains("width: 50%"));
}

#[test]
fn chart_reads_stdin() {
    class_responses!()
        .args(["--no-config", "chart", "--question-id", "q1"])
        .write_stdin(PERCENT_PAYLOAD)
        .assert()
        .success()
        .stdout(predicate::str::contains("Distribution"))
        .stdout(predicate::str::contains("<span class=\"bar-count\">33%</span>"));
}

#[test]
fn chart_reads_dash_as_stdin() {
    class_responses!()
        .args(["--no-config", "chart", "--question-id", "q1", "-"])
        .write_stdin(r#"{"distribution": {"a": 120, "b": 80}}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("200 responses"));
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn chart_scales_percentages_with_total() {
    class_responses!()
        .args(["--no-config", "chart", "--question-id", "q1"])
        .write_stdin(r#"{"distribution": {"a": 60, "b": 40}, "totalResponses": 50}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("50 responses"))
        .stdout(predicate::str::contains("<span class=\"bar-count\">30</span>"))
        .stdout(predicate::str::contains("<span class=\"bar-count\">20</span>"));
}

#[test]
fn chart_empty_distribution_shows_placeholder() {
    class_responses!()
        .args(["--no-config", "chart", "--question-id", "q1"])
        .write_stdin(r#"{"distribution": {}}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("0 responses"))
        .stdout(predicate::str::contains("No responses yet"));
}

#[test]
fn chart_drops_blank_key() {
    class_responses!()
        .args(["--no-config", "chart", "--question-id", "q1"])
        .write_stdin(r#"{"distribution": {"x": 150, "(blank)": 50}}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("150 responses"))
        .stdout(predicate::str::contains("(blank)").not());
}

#[test]
fn chart_shows_question_number() {
    class_responses!()
        .args([
            "--no-config",
            "chart",
            "--question-id",
            "q1",
            "--question-number",
            "3.",
        ])
        .write_stdin(RESPONSES_PAYLOAD)
        .assert()
        .success()
        .stdout(predicate::str::contains("Question 3."));
}

#[test]
fn chart_json_format() {
    class_responses!()
        .args(["--no-config", "chart", "--question-id", "q1", "--format", "json"])
        .write_stdin(RESPONSES_PAYLOAD)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"displayMode\": \"counts\""))
        .stdout(predicate::str::contains("\"total\": 3.0"));
}

// =============================================================================
// Configuration and errors
// =============================================================================

#[test]
fn chart_uses_local_config() {
    let fixture = TestFixture::new();
    fixture.create_config("[chart]\nmax_rows = 1\n");

    let output = class_responses!()
        .current_dir(fixture.path())
        .args(["chart", "--question-id", "q1"])
        .write_stdin(PERCENT_PAYLOAD)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("class=\"bar-row\"").count(), 1);
}

#[test]
fn chart_invalid_json_exits_with_config_error() {
    class_responses!()
        .args(["--no-config", "chart", "--question-id", "q1"])
        .write_stdin("{oops")
        .assert()
        .code(2)
        .stderr(predicate::str::starts_with("✖ Input: JSON error"));
}

#[test]
fn chart_missing_file_exits_with_config_error() {
    let fixture = TestFixture::new();

    class_responses!()
        .current_dir(fixture.path())
        .args(["--no-config", "chart", "--question-id", "q1", "missing.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("✖ IO: Failed to read file: missing.json"))
        .stderr(predicate::str::contains("  × "));
}

#[test]
fn chart_requires_question_id() {
    class_responses!()
        .args(["chart"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--question-id"));
}
