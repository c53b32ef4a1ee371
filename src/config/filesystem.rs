//! The handful of filesystem lookups config discovery needs.
//!
//! The loader asks for the working directory (to find a local
//! `.class-responses.toml`), the user config directory (for `config.toml`),
//! whether either candidate exists, and the text of the first one found.
//! Discovery tests swap in an in-memory implementation.

use std::path::{Path, PathBuf};

/// Filesystem view used by [`FileConfigLoader`](super::FileConfigLoader).
pub trait FileSystem {
    /// Text of a config candidate.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Whether a discovery candidate is present.
    fn exists(&self, path: &Path) -> bool;

    /// Directory searched first, for [`LOCAL_CONFIG_NAME`](super::LOCAL_CONFIG_NAME).
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    fn current_dir(&self) -> std::io::Result<PathBuf>;

    /// Directory searched second, for `config.toml`. `None` when the
    /// platform has no home directory, which skips the user config.
    fn config_dir(&self) -> Option<PathBuf>;
}

/// The process's real working directory and the platform user config
/// directory, e.g. `~/.config/class-responses` on Linux.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "class-responses")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}

#[cfg(test)]
#[path = "filesystem_tests.rs"]
mod tests;
