//! Configuration loader with file resolution and environment override support.

use super::error::{ConfigError, ConfigResult};
use super::schema::{Config, LogFormat};
use crate::harness::ReportFormat;
use clap::ValueEnum;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// Environment variable prefix for overrides
const ENV_PREFIX: &str = "SERIAL_SMOKE";

/// Config file name
const CONFIG_FILE_NAME: &str = "serial-smoke.toml";

/// Environment variable for explicit config path
const CONFIG_PATH_ENV: &str = "SERIAL_SMOKE_CONFIG";

/// Configuration loader with resolution and override logic.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Resolved config file path (if any)
    pub config_path: Option<PathBuf>,
    /// The loaded configuration
    pub config: Config,
}

impl ConfigLoader {
    /// Load configuration using standard resolution order.
    ///
    /// Resolution priority (highest to lowest):
    /// 1. `SERIAL_SMOKE_CONFIG` environment variable (explicit path)
    /// 2. `./serial-smoke.toml` (current directory)
    /// 3. `serial-smoke.toml` in the platform config directory
    /// 4. Built-in defaults (no file required)
    ///
    /// Environment variables override file values. Validation is left to the
    /// caller so command-line flags can still replace a bad value.
    pub fn load() -> ConfigResult<Self> {
        let config_path = resolve_config_path();

        let mut config = match config_path {
            Some(ref path) => load_from_file(path)?,
            None => Config::default(),
        };

        apply_env_overrides(&mut config)?;

        Ok(Self {
            config_path,
            config,
        })
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref().to_path_buf();
        let mut config = load_from_file(&path)?;
        apply_env_overrides(&mut config)?;

        Ok(Self {
            config_path: Some(path),
            config,
        })
    }

    /// Create a loader with default configuration and no file.
    ///
    /// Environment overrides that fail to parse are ignored here.
    pub fn with_defaults() -> Self {
        let mut config = Config::default();
        if let Err(e) = apply_env_overrides(&mut config) {
            debug!("Ignoring environment override: {}", e);
        }

        Self {
            config_path: None,
            config,
        }
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get a mutable reference to the configuration.
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Consume the loader and return the configuration.
    pub fn into_config(self) -> Config {
        self.config
    }

    /// Save the current configuration back to the file it was loaded from.
    pub fn save(&self) -> ConfigResult<()> {
        let path = self.config_path.as_ref().ok_or(ConfigError::NoPath)?;
        save_to_file(&self.config, path)
    }

    /// Save the current configuration to a specific file.
    pub fn save_to(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        save_to_file(&self.config, path.as_ref())
    }
}

/// Resolve the configuration file path using standard locations.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        let path = PathBuf::from(path);
        if path.exists() {
            return Some(path);
        }
        debug!("{} points at missing file {}", CONFIG_PATH_ENV, path.display());
    }

    let cwd_config = PathBuf::from(CONFIG_FILE_NAME);
    if cwd_config.exists() {
        return Some(cwd_config);
    }

    get_default_config_path().filter(|path| path.exists())
}

/// Platform config directory for this tool.
pub fn get_default_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "serial-smoke").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Default config file path for creating new config files.
pub fn get_default_config_path() -> Option<PathBuf> {
    get_default_config_dir().map(|d| d.join(CONFIG_FILE_NAME))
}

fn load_from_file(path: &Path) -> ConfigResult<Config> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Loaded configuration from {}", path.display());
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn save_to_file(config: &Config, path: &Path) -> ConfigResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Read `SERIAL_SMOKE_<key>` if set.
fn env_override(key: &str) -> Option<(String, String)> {
    let var = format!("{ENV_PREFIX}_{key}");
    std::env::var(&var).ok().map(|value| (var, value))
}

fn parse_override<T: FromStr>(key: &str, expected: &str) -> ConfigResult<Option<T>> {
    let Some((var, value)) = env_override(key) else {
        return Ok(None);
    };
    let parsed = value.trim().parse::<T>();
    match parsed {
        Ok(parsed) => Ok(Some(parsed)),
        Err(_) => Err(ConfigError::env_parse(var, value, expected)),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_log_format(value: &str) -> Option<LogFormat> {
    match value.trim().to_ascii_lowercase().as_str() {
        "json" => Some(LogFormat::Json),
        "pretty" => Some(LogFormat::Pretty),
        "compact" => Some(LogFormat::Compact),
        _ => None,
    }
}

/// Apply environment variable overrides to the configuration.
///
/// Variables follow the pattern `SERIAL_SMOKE_<SECTION>_<KEY>`, for example
/// `SERIAL_SMOKE_RUNNER_TIMEOUT_MS=5000` or `SERIAL_SMOKE_DEPENDENCY_NAME=serialport`.
fn apply_env_overrides(config: &mut Config) -> ConfigResult<()> {
    if let Some(timeout) = parse_override("RUNNER_TIMEOUT_MS", "expected milliseconds")? {
        config.runner.timeout_ms = timeout;
    }
    if let Some((var, value)) = env_override("RUNNER_BAIL") {
        config.runner.bail = parse_bool(&value)
            .ok_or_else(|| ConfigError::env_parse(var, &value, "expected true or false"))?;
    }
    if let Some((_, value)) = env_override("RUNNER_GREP") {
        config.runner.grep = Some(value).filter(|v| !v.is_empty());
    }
    if let Some((var, value)) = env_override("RUNNER_REPORTER") {
        config.runner.reporter = <ReportFormat as ValueEnum>::from_str(value.trim(), true)
            .map_err(|_| ConfigError::env_parse(var, &value, "expected spec or json"))?;
    }

    if let Some((_, value)) = env_override("DEPENDENCY_NAME") {
        config.dependency.name = value;
    }

    if let Some((_, value)) = env_override("LOGGING_LEVEL") {
        config.logging.level = value;
    }
    if let Some((var, value)) = env_override("LOGGING_FORMAT") {
        config.logging.format = parse_log_format(&value).ok_or_else(|| {
            ConfigError::env_parse(var, &value, "expected json, pretty or compact")
        })?;
    }

    Ok(())
}
