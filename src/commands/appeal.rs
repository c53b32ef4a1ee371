use serde_json::Value;

use crate::cli::AppealArgs;
use crate::grading::{AppealOutcome, GradeResult, precheck_appeal, render_appeal_result};
use crate::output::print_error;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::{load_config, read_input};

#[must_use]
pub fn run_appeal(args: &AppealArgs, no_config: bool) -> i32 {
    match run_appeal_impl(args, no_config) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Renders the appeal notification for the reply in INPUT.
///
/// Appeal text below the configured minimum is rejected without reading INPUT.
///
/// # Errors
/// Returns an error if the config cannot be loaded, the input cannot be read,
/// or the reply is not valid JSON.
pub fn run_appeal_impl(args: &AppealArgs, no_config: bool) -> Result<String> {
    let config = load_config(args.config.as_deref(), no_config)?;
    let previous = GradeResult::graded(args.previous, "");

    let outcome = match precheck_appeal(&args.text, &previous, config.grading.min_appeal_chars) {
        Some(rejected) => rejected,
        None => {
            let payload = read_input(args.input.as_deref())?;
            let reply: Value = serde_json::from_str(&payload)?;
            AppealOutcome::from_api_response(&previous, &reply)
        }
    };
    tracing::debug!(
        question_id = %args.question_id,
        status = outcome.status_class(),
        "appeal resolved"
    );

    Ok(render_appeal_result(&outcome))
}

#[cfg(test)]
#[path = "appeal_tests.rs"]
mod tests;
