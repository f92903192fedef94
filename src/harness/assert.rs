//! Assertions that report failures as values instead of panicking.

use super::error::{TestFailure, TestResult};
use std::any::Any;
use std::fmt::{Debug, Display};
use std::panic::{self, AssertUnwindSafe};

/// Assert that `actual == expected`.
pub fn equal<T: PartialEq + Debug>(actual: T, expected: T) -> TestResult {
    if actual == expected {
        Ok(())
    } else {
        Err(TestFailure::assertion(format!(
            "expected {actual:?} to equal {expected:?}"
        )))
    }
}

/// Assert that `value` is true.
pub fn ok(value: bool, message: impl Into<String>) -> TestResult {
    if value {
        Ok(())
    } else {
        Err(TestFailure::assertion(message))
    }
}

/// Run `f`, converting a returned error or a panic into [`TestFailure::Thrown`].
///
/// # Example
/// ```
/// use serial_smoke::harness::{assert, TestFailure};
///
/// let value = assert::does_not_throw(|| "42".parse::<u8>())?;
/// assert_eq!(value, 42);
///
/// let err = assert::does_not_throw(|| "x".parse::<u8>()).unwrap_err();
/// assert!(matches!(err, TestFailure::Thrown(_)));
/// # Ok::<(), TestFailure>(())
/// ```
pub fn does_not_throw<F, T, E>(f: F) -> Result<T, TestFailure>
where
    F: FnOnce() -> Result<T, E>,
    E: Display,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(TestFailure::thrown(e)),
        Err(payload) => Err(TestFailure::Thrown(panic_message(payload.as_ref()))),
    }
}

/// Render a panic payload the way the default hook does.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    let detail = if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Box<dyn Any>".to_string()
    };
    format!("panicked: {detail}")
}
