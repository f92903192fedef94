//! Serial Smoke Library
//!
//! Verifies that the serial-port module can be loaded, alongside placeholder
//! cases for the port operations still to be covered.
//!
//! # Modules
//!
//! - `config`: Configuration management with TOML support
//! - `error`: CLI-level error handling
//! - `harness`: Suites, test cases, runner and reports
//! - `loader`: Module registry and the native serial module
//! - `smoke`: The smoke suites themselves
//! - `telemetry`: Tracing subscriber setup

pub mod config;
pub mod error;
pub mod harness;
pub mod loader;
pub mod smoke;
pub mod telemetry;

// Re-export commonly used types for convenience
pub use error::{AppError, AppResult};
pub use harness::{
    Done, Outcome, Report, ReportFormat, Runner, RunnerOptions, Suite, TestCase, TestFailure,
    TestResult,
};
pub use loader::{LoadError, ModuleHandle, ModuleRegistry, NativeSerialModule, SerialModule};

// Re-export config types
pub use config::{Config, ConfigError, ConfigLoader, ConfigResult};
