pub mod appeal;
pub mod chart;
pub mod config;
mod context;
pub mod feedback;
pub mod init;

pub use appeal::{run_appeal, run_appeal_impl};
pub use chart::{run_chart, run_chart_impl};
pub use config::{format_config_text, run_config, run_config_show_impl, run_config_validate_impl};
pub use context::{load_config, read_input};
pub use feedback::{run_feedback, run_feedback_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
