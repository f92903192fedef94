//! Load failures stay contained to the load test.

mod common;

use common::*;
use mockall::mock;
use pretty_assertions::assert_eq;
use serial_smoke::harness::{Outcome, Stats};
use serial_smoke::loader::{LoadError, ModuleHandle, ModuleRegistry, SerialModule};
use std::sync::Arc;

mock! {
    pub Binding {}

    impl SerialModule for Binding {
        fn name(&self) -> &'static str;
        fn initialize(&self) -> Result<ModuleHandle, LoadError>;
    }
}

fn registry_with(binding: MockBinding) -> Arc<ModuleRegistry> {
    let registry = ModuleRegistry::new();
    registry.register(binding);
    Arc::new(registry)
}

fn failed(error: &str) -> Outcome {
    Outcome::Failed {
        error: error.to_string(),
    }
}

#[tokio::test]
async fn missing_dependency_fails_only_the_load_test() {
    let report = run_smoke(Arc::new(ModuleRegistry::with_builtin()), "serialport-missing").await;

    assert_eq!(
        report.stats,
        Stats {
            tests: 5,
            passes: 1,
            failures: 1,
            pending: 3,
        }
    );
    assert_eq!(outcome(&report, INDEX_OF), &Outcome::Passed);
    assert_eq!(
        outcome(&report, CAN_LOAD),
        &failed("Cannot find module 'serialport-missing'")
    );
    for title in PLACEHOLDERS {
        assert_eq!(outcome(&report, title), &Outcome::Pending);
    }
    assert_eq!(report.exit_code(), 1);
}

#[tokio::test]
async fn broken_binding_is_reported() {
    let mut binding = MockBinding::new();
    binding.expect_name().return_const("serialport");
    binding
        .expect_initialize()
        .times(1)
        .returning(|| {
            Err(LoadError::init(
                "serialport",
                "native binding was compiled against a different ABI",
            ))
        });

    let report = run_smoke(registry_with(binding), "serialport").await;

    assert_eq!(
        outcome(&report, CAN_LOAD),
        &failed(
            "Failed to initialize module 'serialport': \
             native binding was compiled against a different ABI"
        )
    );
    assert_eq!(report.stats.passes, 1);
    assert_eq!(report.stats.pending, 3);
}

#[tokio::test]
async fn unsupported_platform_is_reported() {
    let mut binding = MockBinding::new();
    binding.expect_name().return_const("serialport");
    binding
        .expect_initialize()
        .returning(|| Err(LoadError::unsupported("serialport")));

    let report = run_smoke(registry_with(binding), "serialport").await;

    match outcome(&report, CAN_LOAD) {
        Outcome::Failed { error } => assert!(error.contains("is not supported on")),
        other => panic!("expected failure, got {other:?}"),
    }
}

struct PanickingBinding;

impl SerialModule for PanickingBinding {
    fn name(&self) -> &'static str {
        "serialport"
    }

    fn initialize(&self) -> Result<ModuleHandle, LoadError> {
        panic!("segfault in native addon")
    }
}

#[tokio::test]
async fn panicking_binding_is_contained() {
    let registry = ModuleRegistry::new();
    registry.register(PanickingBinding);

    let report = run_smoke(Arc::new(registry), "serialport").await;

    assert_eq!(
        outcome(&report, CAN_LOAD),
        &failed("panicked: segfault in native addon")
    );
    assert_eq!(report.stats.tests, 5);
}

#[tokio::test]
async fn binding_initializes_once_across_runs() {
    let mut binding = MockBinding::new();
    binding.expect_name().return_const("serialport");
    binding
        .expect_initialize()
        .times(1)
        .returning(|| Ok(ModuleHandle::new("serialport", "mock")));
    let registry = registry_with(binding);

    let first = run_smoke(Arc::clone(&registry), "serialport").await;
    let second = run_smoke(Arc::clone(&registry), "serialport").await;

    assert_eq!(outcome(&first, CAN_LOAD), &Outcome::Passed);
    assert_eq!(outcomes(&first), outcomes(&second));
}

#[tokio::test]
async fn repeated_failing_runs_give_identical_outcomes() {
    let registry = Arc::new(ModuleRegistry::with_builtin());

    let first = run_smoke(Arc::clone(&registry), "serialport-missing").await;
    let second = run_smoke(registry, "serialport-missing").await;

    assert_eq!(outcomes(&first), outcomes(&second));
}

#[tokio::test]
async fn spec_report_shows_failure_details() {
    let report = run_smoke(Arc::new(ModuleRegistry::with_builtin()), "serialport-missing").await;
    let text = report.to_spec();

    assert!(text.contains("    1) can load the serialport\n"));
    assert!(text.contains("  1 passing ("));
    assert!(text.contains("  1 failing\n"));
    assert!(text.contains(
        "  1) Serialport in Rust can load the serialport:\n     Cannot find module 'serialport-missing'\n"
    ));
}
