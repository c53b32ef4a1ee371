#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the class-responses binary.
#[macro_export]
macro_rules! class_responses {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("class-responses"))
    };
}

/// Temporary directory holding payloads and config files for a test.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Writes `content` to `relative_path` and returns the absolute path.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates `.class-responses.toml` in the fixture directory.
    pub fn create_config(&self, content: &str) -> PathBuf {
        self.create_file(".class-responses.toml", content)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Three students, two distinct answers.
pub const RESPONSES_PAYLOAD: &str = r#"{
  "responses": [
    {"answer": "foo"},
    {"answer": "foo"},
    {"answer": "bar"}
  ]
}"#;

/// Pre-aggregated percentages from a multiple-choice question.
pub const PERCENT_PAYLOAD: &str = r#"{"distribution": {"a": 33, "b": 33, "c": 33}}"#;

pub const GRADED_P_REPLY: &str = r#"{
  "score": "P",
  "feedback": "Partial credit",
  "missing": ["random selection", "generalization"],
  "suggestion": "Consider adding more detail.",
  "_model": "llama-3.3-70b-versatile"
}"#;
