mod filesystem;
mod loader;
mod model;
mod validation;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME, LoadResult};
pub use model::{
    ChartConfig, Config, DEFAULT_MIN_ANSWER_CHARS, DEFAULT_MIN_APPEAL_CHARS, GradingConfig,
};
pub use validation::validate_config_semantics;
