use std::fs;

use crate::cli::InitArgs;
use crate::output::print_error;
use crate::{ClassResponsesError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes the configuration template to `args.output`.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(ClassResponsesError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r"# class-responses configuration file

[chart]
# Bar rows shown per chart, largest first (1-10, default: 10)
max_rows = 10

[grading]
# Appeals a student may file per question (default: 3)
max_appeals = 3

# Answers shorter than this (after trimming) score I without calling the grader
min_answer_chars = 20

# Appeal explanations shorter than this are rejected before sending
min_appeal_chars = 10
"
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
