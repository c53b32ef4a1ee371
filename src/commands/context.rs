use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::{ClassResponsesError, Result};

/// Resolve the configuration for a command.
///
/// # Errors
/// Returns an error if an explicit or discovered config file cannot be loaded.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    let load_result =
        config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))?;
    Ok(load_result.config)
}

/// Read a JSON payload from `path`, or from stdin when `path` is `None` or `-`.
///
/// # Errors
/// Returns an error if the file or stdin cannot be read.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            fs::read_to_string(path).map_err(|source| ClassResponsesError::FileRead {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}
