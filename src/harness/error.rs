//! Test failure types.

use crate::loader::LoadError;
use std::time::Duration;
use thiserror::Error;

/// Why a runnable test did not pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TestFailure {
    /// An assertion did not hold.
    #[error("AssertionError: {0}")]
    Assertion(String),

    /// The body returned an error or panicked.
    #[error("{0}")]
    Thrown(String),

    /// The test did not complete within its timeout.
    #[error("Timeout of {}ms exceeded", .0.as_millis())]
    Timeout(Duration),

    /// A callback test dropped its completion handle without signaling.
    #[error("done() was never called")]
    DoneNotCalled,
}

impl TestFailure {
    /// Create an Assertion failure from a message.
    pub fn assertion(message: impl Into<String>) -> Self {
        Self::Assertion(message.into())
    }

    /// Create a Thrown failure from any displayable error.
    pub fn thrown(error: impl std::fmt::Display) -> Self {
        Self::Thrown(error.to_string())
    }
}

impl From<LoadError> for TestFailure {
    fn from(err: LoadError) -> Self {
        Self::thrown(err)
    }
}

/// Result of running a single test body.
pub type TestResult = Result<(), TestFailure>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_display() {
        let err = TestFailure::Timeout(Duration::from_millis(2000));
        assert_eq!(err.to_string(), "Timeout of 2000ms exceeded");
    }

    #[test]
    fn test_load_error_becomes_thrown() {
        let err: TestFailure = LoadError::not_found("serialport").into();
        assert_eq!(
            err,
            TestFailure::Thrown("Cannot find module 'serialport'".to_string())
        );
    }
}
