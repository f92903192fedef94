//! The serial port smoke checks as plain cargo tests.
//!
//! The port operations are declared but not written yet; they stay ignored
//! so `cargo test` lists them without running them.

use serial_smoke::loader::ModuleRegistry;
use serial_smoke::smoke::index_of;

#[test]
fn index_of_returns_minus_one_when_value_is_not_present() {
    assert_eq!(index_of(&[1, 2, 3], &4), -1);
}

#[test]
fn can_load_the_serialport() {
    let registry = ModuleRegistry::with_builtin();
    let port = registry.load("serialport");
    assert!(port.is_ok(), "loading serialport failed: {:?}", port.err());
}

#[test]
#[ignore = "pending"]
fn can_list_ports() {}

#[test]
#[ignore = "pending"]
fn can_open_a_port() {}

#[test]
#[ignore = "pending"]
fn can_close_the_port() {}
