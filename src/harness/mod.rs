//! Minimal suite runner.
//!
//! Suites hold runnable and pending test cases. The [`Runner`] executes them
//! sequentially, waits for each runnable test to complete (by returning, by
//! signaling its [`Done`] handle, or by resolving its future) under a per-test
//! timeout, and collects a [`Report`].
//!
//! # Example
//!
//! ```
//! use serial_smoke::harness::{assert, Runner, Suite};
//!
//! # tokio_test_block_on(async {
//! let suite = Suite::new("numbers")
//!     .it("adds", || assert::equal(1 + 1, 2))
//!     .pending("divides");
//!
//! let report = Runner::default().run(vec![suite]).await;
//! assert_eq!(report.stats.passes, 1);
//! assert_eq!(report.stats.pending, 1);
//! # });
//! # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Runtime::new().unwrap().block_on(f)
//! # }
//! ```

pub mod assert;
pub mod case;
pub mod error;
pub mod report;
pub mod runner;
pub mod suite;

pub use case::{BoxTestFuture, Done, TestBody, TestCase};
pub use error::{TestFailure, TestResult};
pub use report::{Outcome, Report, ReportFormat, Stats, TestRecord};
pub use runner::{Runner, RunnerOptions, DEFAULT_TIMEOUT};
pub use suite::Suite;
