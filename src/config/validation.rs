//! Configuration semantic validation.
//!
//! Range checks that run after the TOML has been parsed into [`Config`].

use crate::chart::MAX_CHART_ROWS;
use crate::config::Config;
use crate::{ClassResponsesError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if `chart.max_rows` is outside `1..=10` or
/// `grading.max_appeals` is zero.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_chart_section(config)?;
    validate_grading_section(config)?;
    Ok(())
}

fn validate_chart_section(config: &Config) -> Result<()> {
    let max_rows = config.chart.max_rows;
    if !(1..=MAX_CHART_ROWS).contains(&max_rows) {
        return Err(ClassResponsesError::Config(format!(
            "chart.max_rows must be between 1 and {MAX_CHART_ROWS}, got {max_rows}"
        )));
    }
    Ok(())
}

fn validate_grading_section(config: &Config) -> Result<()> {
    if config.grading.max_appeals == 0 {
        return Err(ClassResponsesError::Config(
            "grading.max_appeals must be at least 1".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
