// ABOUTME: Application-wide error types for fleetctl.
// ABOUTME: Uses thiserror for ergonomic error handling.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("settings file not found: {0}")]
    SettingsNotFound(PathBuf),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("config file '{0}' not found")]
    ConfigFileNotFound(String),

    #[error("no configuration files found in {0}")]
    NoConfigFiles(PathBuf),

    #[error("malformed JSON in {path}: {source}")]
    MalformedBlob {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("no targets resolved for the fleet selection")]
    NoTargets,

    #[error("prompt failed: {0}")]
    Prompt(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
