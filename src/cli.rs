use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::grading::Score;
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "class-responses")]
#[command(author, version, about = "Render class response charts and reflection grading feedback")]
#[command(long_about = "Renders the instructor bar chart for aggregated class responses, \
    and the feedback and appeal markup for AI-graded reflections.\n\n\
    Input payloads are JSON, read from a file or stdin.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    2 - Configuration or input error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the bar chart for a question's aggregated responses
    Chart(ChartArgs),

    /// Render the feedback panel for a grading reply
    Feedback(FeedbackArgs),

    /// Render the notification for an appeal reply
    Appeal(AppealArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
pub struct ChartArgs {
    /// JSON payload with `responses` or `distribution` (file path, or `-`/omitted for stdin)
    pub input: Option<PathBuf>,

    /// Question id shown in the chart header
    #[arg(long)]
    pub question_id: String,

    /// Number label of the enclosing question block (e.g. "1.")
    #[arg(long)]
    pub question_number: Option<String>,

    /// Output format [possible values: html, json]
    #[arg(short, long, default_value = "html")]
    pub format: OutputFormat,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct FeedbackArgs {
    /// JSON reply from the grading service (file path, or `-`/omitted for stdin)
    pub input: Option<PathBuf>,

    #[arg(long)]
    pub question_id: String,

    /// The student's answer; too-short answers are scored locally without reading INPUT
    #[arg(long)]
    pub answer: Option<String>,

    /// Appeals already used on this question
    #[arg(long, default_value_t = 0)]
    pub appeals_used: u32,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct AppealArgs {
    /// JSON reply from the appeal service (file path, or `-`/omitted for stdin)
    pub input: Option<PathBuf>,

    #[arg(long)]
    pub question_id: String,

    /// Score before the appeal (E, P or I)
    #[arg(long)]
    pub previous: Score,

    /// The student's appeal reasoning
    #[arg(long)]
    pub text: String,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".class-responses.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ConfigOutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax and values
    Validate {
        /// Path to configuration file
        #[arg(short, long, default_value = ".class-responses.toml")]
        config: PathBuf,
    },

    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value = "text")]
        format: ConfigOutputFormat,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
