//! Configuration for the smoke runner.
//!
//! TOML-based configuration with environment variable overrides.
//!
//! # Configuration Resolution
//!
//! Configuration is loaded from the following locations (in order of priority):
//!
//! 1. `SERIAL_SMOKE_CONFIG` environment variable (explicit path)
//! 2. `./serial-smoke.toml` (current directory)
//! 3. `serial-smoke.toml` in the platform config directory
//!    (`~/.config/serial-smoke/` on Linux, `%APPDATA%\serial-smoke\config\` on Windows)
//! 4. Built-in defaults (no file required)
//!
//! # Environment Overrides
//!
//! The pattern is `SERIAL_SMOKE_<SECTION>_<KEY>`:
//! - `SERIAL_SMOKE_RUNNER_TIMEOUT_MS=5000`
//! - `SERIAL_SMOKE_RUNNER_BAIL=true`
//! - `SERIAL_SMOKE_RUNNER_GREP=Serialport`
//! - `SERIAL_SMOKE_RUNNER_REPORTER=json`
//! - `SERIAL_SMOKE_DEPENDENCY_NAME=serialport`
//! - `SERIAL_SMOKE_LOGGING_LEVEL=debug`
//! - `SERIAL_SMOKE_LOGGING_FORMAT=pretty`
//!
//! # Example
//!
//! ```rust,no_run
//! use serial_smoke::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load()?;
//! let config = loader.config();
//!
//! println!("Timeout: {}ms", config.runner.timeout_ms);
//! println!("Dependency: {}", config.dependency.name);
//! # Ok::<(), serial_smoke::config::ConfigError>(())
//! ```

mod error;
mod loader;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{
    get_default_config_dir, get_default_config_path, resolve_config_path, ConfigLoader,
};
pub use schema::{Config, DependencyConfig, LogFormat, LoggingConfig, RunnerConfig};
