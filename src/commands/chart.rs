use crate::chart::{BarChartRenderer, QuestionContext, ResponseSet};
use crate::cli::ChartArgs;
use crate::output::{OutputFormat, print_error};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::{load_config, read_input};

#[must_use]
pub fn run_chart(args: &ChartArgs, no_config: bool) -> i32 {
    match run_chart_impl(args, no_config) {
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

/// Renders the chart for the payload named by `args.input`.
///
/// # Errors
/// Returns an error if the config cannot be loaded, the input cannot be read,
/// or the payload is not valid JSON.
pub fn run_chart_impl(args: &ChartArgs, no_config: bool) -> Result<String> {
    let config = load_config(args.config.as_deref(), no_config)?;
    let payload = read_input(args.input.as_deref())?;
    let set = ResponseSet::from_json_str(&payload)?;

    let renderer = BarChartRenderer::new().with_max_rows(config.chart.max_rows);
    match args.format {
        OutputFormat::Html => {
            let context = args
                .question_number
                .as_ref()
                .map(|label| label as &dyn QuestionContext);
            Ok(renderer.render(&args.question_id, &set, context))
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&renderer.model(&set))?;
            Ok(format!("{json}\n"))
        }
    }
}

#[cfg(test)]
#[path = "chart_tests.rs"]
mod tests;
