//! Configuration schema definitions.
//!
//! All sections deserialize with defaults, so a file only needs the keys it
//! changes.

use super::error::{ConfigError, ConfigResult};
use crate::harness::{ReportFormat, RunnerOptions};
use crate::loader::MODULE_NAME;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Test runner configuration
    pub runner: RunnerConfig,
    /// Dependency under test
    pub dependency: DependencyConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Config {
    /// Check values that deserialize fine but cannot be used.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.runner.timeout_ms == 0 {
            return Err(ConfigError::validation(
                "runner.timeout_ms",
                "must be greater than zero",
            ));
        }
        if let Some(pattern) = &self.runner.grep {
            Regex::new(pattern)
                .map_err(|e| ConfigError::validation("runner.grep", e.to_string()))?;
        }
        if self.dependency.name.trim().is_empty() {
            return Err(ConfigError::validation("dependency.name", "must not be empty"));
        }
        Ok(())
    }
}

/// Test runner section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Per-test timeout in milliseconds
    pub timeout_ms: u64,
    /// Stop after the first failure
    pub bail: bool,
    /// Only run tests whose full title matches this regex
    pub grep: Option<String>,
    /// Report format: "spec" or "json"
    pub reporter: ReportFormat,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 2000,
            bail: false,
            grep: None,
            reporter: ReportFormat::Spec,
        }
    }
}

impl RunnerConfig {
    /// Get the per-test timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Build runner options, compiling the grep pattern.
    pub fn to_options(&self) -> ConfigResult<RunnerOptions> {
        let grep = self
            .grep
            .as_deref()
            .map(Regex::new)
            .transpose()
            .map_err(|e| ConfigError::validation("runner.grep", e.to_string()))?;

        Ok(RunnerOptions {
            timeout: self.timeout(),
            bail: self.bail,
            grep,
        })
    }
}

/// Dependency section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DependencyConfig {
    /// Package name the load test resolves
    pub name: String,
}

impl Default for DependencyConfig {
    fn default() -> Self {
        Self {
            name: MODULE_NAME.to_string(),
        }
    }
}

/// Logging configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when RUST_LOG is unset, e.g. "warn" or "serial_smoke=debug"
    pub level: String,
    /// Log format: "json", "pretty", "compact"
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Compact,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format
    Json,
    /// Pretty format with colors
    Pretty,
    /// Compact format
    #[default]
    Compact,
}
