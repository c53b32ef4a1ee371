//! Class response charts for the instructor drawer.
//!
//! A chart is built in three steps:
//! - [`ResponseSet`] normalizes the aggregate payload (individual answers or a
//!   pre-aggregated distribution),
//! - [`ChartModel`] resolves it into sorted, capped entries and decides whether
//!   the values are counts or percentages,
//! - [`BarChartRenderer`] turns the model into an HTML fragment.

mod context;
mod model;
mod render;
mod response_set;

pub use context::{QuestionBlock, QuestionContext, enclosing_block};
pub use model::{
    ChartEntry, ChartModel, Classification, DisplayMode, MAX_CHART_ROWS, PERCENT_SUM_LIMIT,
    clamp_rows,
};
pub use render::{BarChartRenderer, render_bar_chart};
pub use response_set::{BLANK_LABEL, Distribution, ResponseRecord, ResponseSet};
