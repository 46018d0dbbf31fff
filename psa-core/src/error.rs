//! Error types for psa-core.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading the input header.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Input header missing, unreadable, or not valid UTF-8.
    #[error("cannot read input header {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while loading a [`GenConfig`](crate::GenConfig) file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parse error — includes file path and line context from serde_yaml.
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
