//! Load error types.
//!
//! Kept separate from harness errors so a failed load can be inspected before
//! it is turned into a test failure.

use thiserror::Error;

/// Errors that can occur while resolving or initializing a module.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// No module is registered under the requested name.
    #[error("Cannot find module '{0}'")]
    NotFound(String),

    /// The module exists but has no backend for this platform.
    #[error("Module '{name}' is not supported on {platform}")]
    Unsupported { name: String, platform: String },

    /// The module was found but its initializer failed.
    #[error("Failed to initialize module '{name}': {message}")]
    Init { name: String, message: String },
}

impl LoadError {
    /// Create a NotFound error from a module name.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create an Unsupported error for the current platform.
    pub fn unsupported(name: impl Into<String>) -> Self {
        Self::Unsupported {
            name: name.into(),
            platform: std::env::consts::OS.to_string(),
        }
    }

    /// Create an Init error from a module name and message.
    pub fn init(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Init {
            name: name.into(),
            message: message.into(),
        }
    }
}

/// Result type for load operations.
pub type LoadResult<T> = Result<T, LoadError>;
