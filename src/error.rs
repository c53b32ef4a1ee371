use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassResponsesError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid score '{0}': expected one of E, P, I")]
    InvalidScore(String),

    #[error("Appeal not allowed for {question_id}: {reason}")]
    AppealNotAllowed { question_id: String, reason: String },
}

impl ClassResponsesError {
    /// Short category name, used as a prefix in CLI error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileRead { .. } | Self::Io(_) => "IO",
            Self::Json(_) => "Input",
            Self::InvalidScore(_) | Self::AppealNotAllowed { .. } => "Grading",
        }
    }

    /// Underlying cause worth a second line, when the message does not already carry it.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileRead { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClassResponsesError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
