//! Error reporting on stderr.
//!
//! Format: `✖ {error_type}: {message}` then an optional `  × {detail}` line.

use std::io::Write;

use crate::ClassResponsesError;

/// Writes `error` to `w` in the CLI error format.
pub fn write_error<W: Write>(w: &mut W, error: &ClassResponsesError) {
    // stderr going away leaves nothing to report to.
    let _ = writeln!(w, "✖ {}: {error}", error.error_type());
    if let Some(detail) = error.detail() {
        let _ = writeln!(w, "  × {detail}");
    }
}

pub fn print_error(error: &ClassResponsesError) {
    let mut stderr = std::io::stderr().lock();
    write_error(&mut stderr, error);
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
