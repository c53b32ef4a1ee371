//! Markup helpers shared by the chart and feedback renderers.

/// Escape HTML special characters.
#[must_use]
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Format a numeric value the way it is shown in a chart.
///
/// Whole numbers print without a fractional part (`3`, not `3.0`); other
/// values print with the shortest representation that round-trips.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        // Collapse -0 so it never shows up as "-0".
        return "0".to_string();
    }
    format!("{value}")
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
