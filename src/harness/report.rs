//! Run results and their rendering.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::time::Duration;

/// Output format for a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Indented tree of suites with a summary footer
    #[default]
    Spec,
    /// Machine-readable JSON document
    Json,
}

/// Final state of one test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum Outcome {
    Passed,
    Failed { error: String },
    Pending,
}

impl Outcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// Result of one test, in run order.
#[derive(Debug, Clone, Serialize)]
pub struct TestRecord {
    /// Titles of the enclosing suites, outermost first.
    pub suite_path: Vec<String>,
    pub title: String,
    /// Suite titles and test title joined by spaces.
    pub full_title: String,
    #[serde(flatten)]
    pub outcome: Outcome,
    pub duration_ms: u64,
}

impl TestRecord {
    pub fn new(suite_path: &[String], title: &str, outcome: Outcome, duration: Duration) -> Self {
        Self {
            suite_path: suite_path.to_vec(),
            title: title.to_string(),
            full_title: full_title(suite_path, title),
            outcome,
            duration_ms: duration.as_millis() as u64,
        }
    }
}

/// Suite titles and the test title joined by spaces.
pub fn full_title(suite_path: &[String], title: &str) -> String {
    suite_path
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(title))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Outcome counts for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub tests: usize,
    pub passes: usize,
    pub failures: usize,
    pub pending: usize,
}

/// Everything a finished run produced.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub started_at: DateTime<Utc>,
    pub duration_ms: u64,
    pub stats: Stats,
    pub tests: Vec<TestRecord>,
}

impl Report {
    pub fn new(started_at: DateTime<Utc>, duration: Duration, tests: Vec<TestRecord>) -> Self {
        let mut stats = Stats {
            tests: tests.len(),
            ..Stats::default()
        };
        for record in &tests {
            match record.outcome {
                Outcome::Passed => stats.passes += 1,
                Outcome::Failed { .. } => stats.failures += 1,
                Outcome::Pending => stats.pending += 1,
            }
        }

        Self {
            started_at,
            duration_ms: duration.as_millis() as u64,
            stats,
            tests,
        }
    }

    /// Outcome of the test with the given full title.
    pub fn outcome_of(&self, full_title: &str) -> Option<&Outcome> {
        self.tests
            .iter()
            .find(|r| r.full_title == full_title)
            .map(|r| &r.outcome)
    }

    /// Process exit code: the failure count, capped at 255.
    pub fn exit_code(&self) -> u8 {
        self.stats.failures.min(u8::MAX as usize) as u8
    }

    pub fn is_success(&self) -> bool {
        self.stats.failures == 0
    }

    pub fn render(&self, format: ReportFormat) -> serde_json::Result<String> {
        match format {
            ReportFormat::Spec => Ok(self.to_spec()),
            ReportFormat::Json => serde_json::to_string_pretty(self),
        }
    }

    /// Render the indented suite tree followed by the summary and failure details.
    pub fn to_spec(&self) -> String {
        let mut out = String::new();
        let mut previous: &[String] = &[];
        let mut failure_no = 0;

        for record in &self.tests {
            let common = previous
                .iter()
                .zip(&record.suite_path)
                .take_while(|(a, b)| a == b)
                .count();
            for (depth, title) in record.suite_path.iter().enumerate().skip(common) {
                if depth == 0 {
                    out.push('\n');
                }
                let _ = writeln!(out, "{}{}", indent(depth + 1), title);
            }

            let pad = indent(record.suite_path.len() + 1);
            let _ = match &record.outcome {
                Outcome::Passed => writeln!(out, "{pad}✓ {}", record.title),
                Outcome::Failed { .. } => {
                    failure_no += 1;
                    writeln!(out, "{pad}{failure_no}) {}", record.title)
                }
                Outcome::Pending => writeln!(out, "{pad}- {}", record.title),
            };
            previous = &record.suite_path;
        }

        let _ = writeln!(
            out,
            "\n  {} passing ({}ms)",
            self.stats.passes, self.duration_ms
        );
        if self.stats.pending > 0 {
            let _ = writeln!(out, "  {} pending", self.stats.pending);
        }
        if self.stats.failures > 0 {
            let _ = writeln!(out, "  {} failing", self.stats.failures);
            let failed = self.tests.iter().filter(|r| r.outcome.is_failed());
            for (no, record) in failed.enumerate() {
                if let Outcome::Failed { error } = &record.outcome {
                    let _ = writeln!(out, "\n  {}) {}:\n     {}", no + 1, record.full_title, error);
                }
            }
        }
        out
    }
}

fn indent(level: usize) -> String {
    "  ".repeat(level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn path(titles: &[&str]) -> Vec<String> {
        titles.iter().map(|t| t.to_string()).collect()
    }

    fn sample() -> Report {
        let serial = path(&["Serialport in Rust"]);
        Report::new(
            Utc::now(),
            Duration::from_millis(4),
            vec![
                TestRecord::new(
                    &path(&["Array", "#indexOf()"]),
                    "should return -1 when the value is not present",
                    Outcome::Passed,
                    Duration::ZERO,
                ),
                TestRecord::new(
                    &serial,
                    "can load the serialport",
                    Outcome::Failed {
                        error: "Cannot find module 'serialport'".to_string(),
                    },
                    Duration::from_millis(1),
                ),
                TestRecord::new(&serial, "can list ports", Outcome::Pending, Duration::ZERO),
            ],
        )
    }

    #[test]
    fn test_stats_and_exit_code() {
        let report = sample();
        assert_eq!(
            report.stats,
            Stats {
                tests: 3,
                passes: 1,
                failures: 1,
                pending: 1
            }
        );
        assert_eq!(report.exit_code(), 1);
        assert!(!report.is_success());
    }

    #[test]
    fn test_full_title_joins_suites() {
        let report = sample();
        assert_eq!(
            report.outcome_of("Array #indexOf() should return -1 when the value is not present"),
            Some(&Outcome::Passed)
        );
        assert_eq!(report.outcome_of("missing"), None);
    }

    #[test]
    fn test_spec_rendering() {
        let expected = "
  Array
    #indexOf()
      ✓ should return -1 when the value is not present

  Serialport in Rust
    1) can load the serialport
    - can list ports

  1 passing (4ms)
  1 pending
  1 failing

  1) Serialport in Rust can load the serialport:
     Cannot find module 'serialport'
";
        assert_eq!(sample().to_spec(), expected);
    }

    #[test]
    fn test_json_rendering_flattens_state() {
        let json = sample().render(ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["stats"]["pending"], 1);
        assert_eq!(value["tests"][1]["state"], "failed");
        assert_eq!(value["tests"][1]["error"], "Cannot find module 'serialport'");
        assert_eq!(value["tests"][2]["state"], "pending");
    }

    #[test]
    fn test_exit_code_is_capped() {
        let records = (0..300)
            .map(|i| {
                TestRecord::new(
                    &[],
                    &format!("t{i}"),
                    Outcome::Failed {
                        error: "x".to_string(),
                    },
                    Duration::ZERO,
                )
            })
            .collect();
        let report = Report::new(Utc::now(), Duration::ZERO, records);
        assert_eq!(report.exit_code(), 255);
    }
}
