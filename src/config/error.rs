//! Configuration errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading, validating or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML in '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("cannot serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("cannot write config file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A value parsed but is unusable.
    #[error("invalid value for '{key}': {message}")]
    Invalid { key: String, message: String },

    /// An override variable is set to something unparsable.
    #[error("environment variable {var}={value:?}: {message}")]
    Env {
        var: String,
        value: String,
        message: String,
    },

    /// `save` was called on a loader that was not read from a file.
    #[error("no config file path to save to")]
    NoPath,
}

impl ConfigError {
    pub fn validation(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            key: key.into(),
            message: message.into(),
        }
    }

    pub fn env_parse(
        var: impl Into<String>,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Env {
            var: var.into(),
            value: value.into(),
            message: message.into(),
        }
    }
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
