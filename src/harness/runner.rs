//! Sequential test execution.

use super::assert::panic_message;
use super::case::{Done, TestBody, TestCase};
use super::error::{TestFailure, TestResult};
use super::report::{full_title, Outcome, Report, TestRecord};
use super::suite::Suite;
use chrono::Utc;
use regex::Regex;
use std::time::{Duration, Instant};
use tokio::task::JoinError;
use tracing::{debug, info, warn};

/// Default per-test timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(2000);

/// Options controlling a run.
#[derive(Debug, Clone)]
pub struct RunnerOptions {
    /// How long a runnable test may stay outstanding.
    pub timeout: Duration,
    /// Stop after the first failure.
    pub bail: bool,
    /// Only run tests whose full title matches.
    pub grep: Option<Regex>,
}

impl Default for RunnerOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            bail: false,
            grep: None,
        }
    }
}

/// Runs suites one test at a time and collects a [`Report`].
///
/// Each body runs on its own task, so a panic fails only that test.
#[derive(Debug, Clone, Default)]
pub struct Runner {
    options: RunnerOptions,
}

impl Runner {
    pub fn new(options: RunnerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RunnerOptions {
        &self.options
    }

    /// Run every selected test in registration order.
    pub async fn run(&self, suites: Vec<Suite>) -> Report {
        let started_at = Utc::now();
        let start = Instant::now();

        let mut queue = Vec::new();
        let mut path = Vec::new();
        for suite in suites {
            flatten(suite, &mut path, &mut queue);
        }

        let mut records = Vec::with_capacity(queue.len());
        for (suite_path, case) in queue {
            if !self.selected(&full_title(&suite_path, case.title())) {
                continue;
            }

            let record = match case {
                TestCase::Pending { title } => {
                    TestRecord::new(&suite_path, &title, Outcome::Pending, Duration::ZERO)
                }
                TestCase::Runnable { title, body } => {
                    let test_start = Instant::now();
                    let outcome = match self.run_body(body).await {
                        Ok(()) => Outcome::Passed,
                        Err(failure) => Outcome::Failed {
                            error: failure.to_string(),
                        },
                    };
                    TestRecord::new(&suite_path, &title, outcome, test_start.elapsed())
                }
            };

            match &record.outcome {
                Outcome::Passed => {
                    debug!("'{}' passed in {}ms", record.full_title, record.duration_ms)
                }
                Outcome::Pending => debug!("'{}' is pending", record.full_title),
                Outcome::Failed { error } => warn!("'{}' failed: {}", record.full_title, error),
            }

            let failed = record.outcome.is_failed();
            records.push(record);
            if failed && self.options.bail {
                info!("Bailing out after first failure");
                break;
            }
        }

        let report = Report::new(started_at, start.elapsed(), records);
        info!(
            "Run finished: {} passing, {} failing, {} pending",
            report.stats.passes, report.stats.failures, report.stats.pending
        );
        report
    }

    fn selected(&self, full_title: &str) -> bool {
        self.options
            .grep
            .as_ref()
            .map_or(true, |re| re.is_match(full_title))
    }

    async fn run_body(&self, body: TestBody) -> TestResult {
        let timeout = self.options.timeout;
        let run = async move {
            match body {
                TestBody::Sync(f) => joined(tokio::task::spawn_blocking(f).await),
                TestBody::Callback(f) => {
                    let (done, rx) = Done::channel();
                    joined(tokio::task::spawn_blocking(move || f(done)).await)?;
                    rx.await.unwrap_or(Err(TestFailure::DoneNotCalled))
                }
                TestBody::Async(f) => joined(tokio::spawn(async move { f().await }).await),
            }
        };

        tokio::time::timeout(timeout, run)
            .await
            .unwrap_or(Err(TestFailure::Timeout(timeout)))
    }
}

fn flatten(suite: Suite, path: &mut Vec<String>, queue: &mut Vec<(Vec<String>, TestCase)>) {
    path.push(suite.title);
    for case in suite.cases {
        queue.push((path.clone(), case));
    }
    for child in suite.suites {
        flatten(child, path, queue);
    }
    path.pop();
}

fn joined(result: Result<TestResult, JoinError>) -> TestResult {
    match result {
        Ok(result) => result,
        Err(e) if e.is_panic() => Err(TestFailure::Thrown(panic_message(e.into_panic().as_ref()))),
        Err(e) => Err(TestFailure::thrown(e)),
    }
}
