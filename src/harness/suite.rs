//! Named groups of tests.

use super::case::{Done, TestCase};
use super::error::TestResult;
use std::future::Future;

/// A named suite holding test cases and nested suites.
///
/// Cases run in registration order, before any nested suite.
///
/// # Example
/// ```
/// use serial_smoke::harness::{assert, Suite};
///
/// let suite = Suite::new("Array").suite(
///     Suite::new("#indexOf()").it("should return -1 when the value is not present", || {
///         assert::equal([1, 2, 3].iter().position(|&v| v == 4), None)
///     }),
/// );
/// assert_eq!(suite.test_count(), 1);
/// ```
#[derive(Debug)]
pub struct Suite {
    pub title: String,
    pub cases: Vec<TestCase>,
    pub suites: Vec<Suite>,
}

impl Suite {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            cases: Vec::new(),
            suites: Vec::new(),
        }
    }

    /// Register a synchronous test.
    pub fn it<F>(self, title: impl Into<String>, body: F) -> Self
    where
        F: FnOnce() -> TestResult + Send + 'static,
    {
        self.case(TestCase::new(title, body))
    }

    /// Register a test that signals completion through [`Done`].
    pub fn it_done<F>(self, title: impl Into<String>, body: F) -> Self
    where
        F: FnOnce(Done) -> TestResult + Send + 'static,
    {
        self.case(TestCase::with_done(title, body))
    }

    /// Register an async test.
    pub fn it_async<F, Fut>(self, title: impl Into<String>, body: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = TestResult> + Send + 'static,
    {
        self.case(TestCase::with_async(title, body))
    }

    /// Register a test without a body.
    pub fn pending(self, title: impl Into<String>) -> Self {
        self.case(TestCase::pending(title))
    }

    pub fn case(mut self, case: TestCase) -> Self {
        self.cases.push(case);
        self
    }

    /// Nest a child suite.
    pub fn suite(mut self, child: Suite) -> Self {
        self.suites.push(child);
        self
    }

    /// Number of tests in this suite and all nested suites.
    pub fn test_count(&self) -> usize {
        self.cases.len() + self.suites.iter().map(Suite::test_count).sum::<usize>()
    }
}
