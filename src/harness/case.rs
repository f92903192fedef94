//! Test case definitions.
//!
//! A test is either runnable, carrying a body, or pending, carrying only a
//! title. Pending tests always report as pending.

use super::error::{TestFailure, TestResult};
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use tokio::sync::oneshot;

/// Boxed future returned by async test bodies.
pub type BoxTestFuture = Pin<Box<dyn Future<Output = TestResult> + Send + 'static>>;

/// Completion handle passed to callback-style tests.
///
/// The test is outstanding until the handle is signaled. Every signaling
/// method consumes the handle, so completion fires at most once.
/// Dropping it unsignaled fails the test with [`TestFailure::DoneNotCalled`].
#[derive(Debug)]
pub struct Done {
    tx: oneshot::Sender<TestResult>,
}

impl Done {
    /// Create a handle and the receiver the runner awaits.
    pub fn channel() -> (Self, oneshot::Receiver<TestResult>) {
        let (tx, rx) = oneshot::channel();
        (Self { tx }, rx)
    }

    /// Signal successful completion.
    pub fn call(self) {
        self.finish(Ok(()));
    }

    /// Signal completion with a failure.
    pub fn fail(self, failure: TestFailure) {
        self.finish(Err(failure));
    }

    /// Signal completion with an explicit result.
    pub fn finish(self, result: TestResult) {
        // The receiver is gone once the runner has timed the test out.
        let _ = self.tx.send(result);
    }
}

/// The executable part of a runnable test.
pub enum TestBody {
    /// Completes when the closure returns.
    Sync(Box<dyn FnOnce() -> TestResult + Send + 'static>),
    /// Completes when the closure signals its [`Done`] handle.
    Callback(Box<dyn FnOnce(Done) -> TestResult + Send + 'static>),
    /// Completes when the returned future resolves.
    Async(Box<dyn FnOnce() -> BoxTestFuture + Send + 'static>),
}

impl TestBody {
    fn kind(&self) -> &'static str {
        match self {
            Self::Sync(_) => "sync",
            Self::Callback(_) => "callback",
            Self::Async(_) => "async",
        }
    }
}

impl fmt::Debug for TestBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TestBody::{}", self.kind())
    }
}

/// A single registered test.
#[derive(Debug)]
pub enum TestCase {
    Runnable { title: String, body: TestBody },
    Pending { title: String },
}

impl TestCase {
    /// A test that completes when `body` returns.
    pub fn new<F>(title: impl Into<String>, body: F) -> Self
    where
        F: FnOnce() -> TestResult + Send + 'static,
    {
        Self::Runnable {
            title: title.into(),
            body: TestBody::Sync(Box::new(body)),
        }
    }

    /// A test that completes when `body` signals the [`Done`] handle it is given.
    ///
    /// An `Err` returned from `body` fails the test immediately.
    pub fn with_done<F>(title: impl Into<String>, body: F) -> Self
    where
        F: FnOnce(Done) -> TestResult + Send + 'static,
    {
        Self::Runnable {
            title: title.into(),
            body: TestBody::Callback(Box::new(body)),
        }
    }

    /// A test that completes when the future built by `body` resolves.
    pub fn with_async<F, Fut>(title: impl Into<String>, body: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = TestResult> + Send + 'static,
    {
        Self::Runnable {
            title: title.into(),
            body: TestBody::Async(Box::new(move || Box::pin(body()) as BoxTestFuture)),
        }
    }

    /// A test declared without a body.
    pub fn pending(title: impl Into<String>) -> Self {
        Self::Pending {
            title: title.into(),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Runnable { title, .. } | Self::Pending { title } => title,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }
}
