//! Shared test utilities for the smoke suite tests.

#![allow(dead_code)]

use serial_smoke::harness::{Outcome, Report, Runner, RunnerOptions};
use serial_smoke::loader::ModuleRegistry;
use serial_smoke::smoke;
use std::sync::Arc;
use std::time::Duration;

pub const INDEX_OF: &str = "Array #indexOf() should return -1 when the value is not present";
pub const CAN_LOAD: &str = "Serialport in Rust can load the serialport";
pub const CAN_LIST: &str = "Serialport in Rust can list ports";
pub const CAN_OPEN: &str = "Serialport in Rust can open a port";
pub const CAN_CLOSE: &str = "Serialport in Rust can close the port";

pub const PLACEHOLDERS: [&str; 3] = [CAN_LIST, CAN_OPEN, CAN_CLOSE];

/// Runner with a short timeout so hung tests fail fast.
pub fn fast_runner() -> Runner {
    Runner::new(RunnerOptions {
        timeout: Duration::from_millis(500),
        ..RunnerOptions::default()
    })
}

/// Run every smoke suite against `registry`, loading `dependency`.
pub async fn run_smoke(registry: Arc<ModuleRegistry>, dependency: &str) -> Report {
    fast_runner()
        .run(smoke::suites(registry, dependency))
        .await
}

/// `(full_title, outcome)` pairs in run order.
pub fn outcomes(report: &Report) -> Vec<(String, Outcome)> {
    report
        .tests
        .iter()
        .map(|r| (r.full_title.clone(), r.outcome.clone()))
        .collect()
}

pub fn outcome<'a>(report: &'a Report, full_title: &str) -> &'a Outcome {
    report
        .outcome_of(full_title)
        .unwrap_or_else(|| panic!("no test named '{full_title}' in report"))
}
