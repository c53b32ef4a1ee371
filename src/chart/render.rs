use std::fmt::Write;

use crate::output::{format_value, html_escape};

use super::context::QuestionContext;
use super::model::{ChartModel, MAX_CHART_ROWS, clamp_rows};
use super::response_set::ResponseSet;

/// Renders a class response chart as a self-contained HTML fragment.
///
/// The fragment is meant to be dropped straight into the drawer's content
/// container. Rendering never fails: absent or malformed data produces the
/// "No responses yet" placeholder.
#[derive(Debug, Clone, Copy)]
pub struct BarChartRenderer {
    max_rows: usize,
}

impl BarChartRenderer {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_rows: MAX_CHART_ROWS,
        }
    }

    /// Limit the number of bars, clamped to `1..=MAX_CHART_ROWS`.
    #[must_use]
    pub const fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = clamp_rows(max_rows);
        self
    }

    #[must_use]
    pub fn model(&self, set: &ResponseSet) -> ChartModel {
        ChartModel::with_max_rows(set, self.max_rows)
    }

    #[must_use]
    pub fn render(
        &self,
        question_id: &str,
        set: &ResponseSet,
        context: Option<&dyn QuestionContext>,
    ) -> String {
        let model = self.model(set);
        let question_number = context.and_then(|ctx| ctx.question_number());
        tracing::debug!(
            question_id,
            entries = model.entries.len(),
            omitted = model.omitted,
            mode = ?model.display_mode,
            "rendering bar chart"
        );
        Self::render_model(question_id, &model, question_number.as_deref())
    }

    #[must_use]
    pub fn render_model(
        question_id: &str,
        model: &ChartModel,
        question_number: Option<&str>,
    ) -> String {
        let mut output = String::new();
        output.push_str("<div class=\"bar-chart\">\n");
        Self::write_header(&mut output, question_id, model, question_number);
        if model.is_empty() {
            output.push_str("  <p class=\"no-responses\">No responses yet</p>\n");
        } else {
            Self::write_rows(&mut output, model);
        }
        output.push_str("</div>\n");
        output
    }

    fn write_header(
        output: &mut String,
        question_id: &str,
        model: &ChartModel,
        question_number: Option<&str>,
    ) {
        output.push_str("  <div class=\"chart-header\">\n");
        writeln!(output, "    <strong>{}</strong>", html_escape(question_id)).ok();

        if let Some(number) = question_number {
            writeln!(
                output,
                r#"    <span class="chart-question-num">Question {}</span>"#,
                html_escape(number)
            )
            .ok();
        }

        if model.is_percentages() {
            output.push_str("    <span class=\"chart-total\">Distribution</span>\n");
        } else if let Some(total) = model.total {
            let noun = if (total - 1.0).abs() < f64::EPSILON {
                "response"
            } else {
                "responses"
            };
            writeln!(
                output,
                r#"    <span class="chart-total">{} {noun}</span>"#,
                format_value(total)
            )
            .ok();
        }

        output.push_str("  </div>\n");
    }

    fn write_rows(output: &mut String, model: &ChartModel) {
        for entry in &model.entries {
            let label = html_escape(&entry.label);
            let width = format_value(model.bar_width(entry.value));
            let count = if model.is_percentages() {
                format!("{}%", format_value(entry.value.round()))
            } else {
                format_value(entry.value)
            };

            output.push_str("  <div class=\"bar-row\">\n");
            writeln!(
                output,
                r#"    <span class="bar-label" title="{label}">{label}</span>"#
            )
            .ok();
            output.push_str("    <div class=\"bar-container\">\n");
            writeln!(
                output,
                r#"      <div class="bar-fill" style="width: {width}%"></div>"#
            )
            .ok();
            output.push_str("    </div>\n");
            writeln!(output, r#"    <span class="bar-count">{count}</span>"#).ok();
            output.push_str("  </div>\n");
        }
    }
}

impl Default for BarChartRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Render `set` for `question_id` with the default renderer.
#[must_use]
pub fn render_bar_chart(
    question_id: &str,
    set: &ResponseSet,
    context: Option<&dyn QuestionContext>,
) -> String {
    BarChartRenderer::new().render(question_id, set, context)
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
