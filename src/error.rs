use crate::config::ConfigError;
use std::fmt;

/// Errors that stop the CLI before or after a run.
///
/// Test failures are not errors here; they are part of the report and the
/// exit code.
#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Render(serde_json::Error),
    Io(std::io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Render(e) => write!(f, "Failed to render report: {e}"),
            Self::Io(e) => write!(f, "An I/O error occurred: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Render(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

// `From` conversions so the binary can use `?` throughout.
impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Config(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Render(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

/// Result type for CLI-level operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err: AppError =
            ConfigError::validation("runner.timeout_ms", "must be greater than zero").into();
        assert_eq!(
            err.to_string(),
            "Configuration error: invalid value for 'runner.timeout_ms': must be greater than zero"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
