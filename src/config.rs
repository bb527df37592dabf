use std::path::PathBuf;
use thiserror::Error;

use crate::core::planner::normalize_extension;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{} does not exist", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("Invalid hash size {0}: must be a positive integer")]
    InvalidHashSize(u32),

    #[error("Secondary extension must not be empty")]
    EmptyExtension,
}

/// Settings for one run, validated before any scanning happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory whose immediate children are scanned.
    pub directory: PathBuf,

    /// Print the duplicate groups instead of offering to delete them.
    pub list_only: bool,

    /// Side length of the grid images are reduced to before hashing.
    pub hash_size: u32,

    /// Companion files `<stem><extension>` removed alongside each duplicate.
    /// Always starts with `.` once validated.
    pub secondary_extension: Option<String>,

    pub show_progress: bool,
}

impl Config {
    pub fn new(
        directory: PathBuf,
        list_only: bool,
        hash_size: u32,
        secondary_extension: Option<String>,
    ) -> Result<Self, ConfigError> {
        if !directory.exists() {
            return Err(ConfigError::DirectoryNotFound(directory));
        }
        if !directory.is_dir() {
            return Err(ConfigError::NotADirectory(directory));
        }
        if hash_size == 0 {
            return Err(ConfigError::InvalidHashSize(hash_size));
        }

        let secondary_extension = match secondary_extension {
            Some(ext) if ext.is_empty() => return Err(ConfigError::EmptyExtension),
            Some(ext) => Some(normalize_extension(&ext)),
            None => None,
        };

        Ok(Self {
            directory,
            list_only,
            hash_size,
            secondary_extension,
            show_progress: true,
        })
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }
}
