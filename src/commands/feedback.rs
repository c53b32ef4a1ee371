use serde_json::Value;

use crate::cli::FeedbackArgs;
use crate::grading::{FeedbackRenderer, GradeResult, precheck_answer, render_appeal_form};
use crate::output::print_error;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::{load_config, read_input};

#[must_use]
pub fn run_feedback(args: &FeedbackArgs, no_config: bool) -> i32 {
    match run_feedback_impl(args, no_config) {
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

/// Renders the feedback panel, followed by the appeal form when an appeal is
/// still possible.
///
/// A too-short `--answer` is scored locally and INPUT is never read.
///
/// # Errors
/// Returns an error if the config cannot be loaded, the input cannot be read,
/// or the reply is not valid JSON.
pub fn run_feedback_impl(args: &FeedbackArgs, no_config: bool) -> Result<String> {
    let config = load_config(args.config.as_deref(), no_config)?;

    let local = args
        .answer
        .as_deref()
        .and_then(|answer| precheck_answer(answer, config.grading.min_answer_chars));
    let result = match local {
        Some(result) => {
            tracing::debug!(question_id = %args.question_id, "answer too short, scored locally");
            result
        }
        None => {
            let payload = read_input(args.input.as_deref())?;
            let reply: Value = serde_json::from_str(&payload)?;
            GradeResult::from_api_response(&reply)
        }
    };

    let renderer = FeedbackRenderer::new().with_max_appeals(config.grading.max_appeals);
    let mut output = renderer.render(&args.question_id, &result, args.appeals_used);
    if renderer.can_appeal(&result, args.appeals_used) {
        output.push_str(&render_appeal_form(&args.question_id));
    }
    Ok(output)
}

#[cfg(test)]
#[path = "feedback_tests.rs"]
mod tests;
