use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("failed to read config file '{path}': {details}")]
    Read {
        /// Path of the file that could not be read
        path: PathBuf,
        /// Read error details
        details: String,
    },

    /// TOML parsing error with file context
    #[error("failed to parse TOML at '{path}': {details}")]
    Parse {
        /// Path of the file being parsed
        path: PathBuf,
        /// Parse error details
        details: String,
    },
}
