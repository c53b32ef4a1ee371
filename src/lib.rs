pub mod chart;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod grading;
pub mod logging;
pub mod output;

pub use error::{ClassResponsesError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
