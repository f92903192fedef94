use clap::Parser;
use serial_smoke::config::{Config, ConfigLoader};
use serial_smoke::harness::{ReportFormat, Runner};
use serial_smoke::loader::ModuleRegistry;
use serial_smoke::{smoke, telemetry, AppResult};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};

/// Exit code for configuration and I/O errors.
const EXIT_USAGE: u8 = 2;

// Command-line arguments
#[derive(Parser, Debug)]
#[command(
    name = "serial-smoke",
    version,
    about = "Smoke-test that the serial port module loads.",
    long_about = "Runs the serial port smoke suites: loads the serial port module, reports the \
                  port operations still to be covered as pending, and exits with the number of \
                  failed tests."
)]
struct Args {
    /// Configuration file; skips the standard search locations.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Per-test timeout in milliseconds.
    #[arg(short, long, value_name = "MS")]
    timeout: Option<u64>,

    /// Stop after the first failing test.
    #[arg(short, long)]
    bail: bool,

    /// Only run tests whose full title matches this regex.
    #[arg(short, long, value_name = "REGEX")]
    grep: Option<String>,

    /// Report format.
    #[arg(short = 'R', long, value_enum)]
    reporter: Option<ReportFormat>,

    /// Module name the load test resolves.
    #[arg(short, long, value_name = "NAME")]
    dependency: Option<String>,
}

impl Args {
    /// Command-line flags win over file and environment settings.
    fn apply(&self, config: &mut Config) {
        if let Some(timeout) = self.timeout {
            config.runner.timeout_ms = timeout;
        }
        if self.bail {
            config.runner.bail = true;
        }
        if let Some(ref grep) = self.grep {
            config.runner.grep = Some(grep.clone());
        }
        if let Some(reporter) = self.reporter {
            config.runner.reporter = reporter;
        }
        if let Some(ref dependency) = self.dependency {
            config.dependency.name = dependency.clone();
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(args).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("serial-smoke: {e}");
            ExitCode::from(EXIT_USAGE)
        }
    }
}

async fn run(args: Args) -> AppResult<u8> {
    let loader = match args.config {
        Some(ref path) => ConfigLoader::load_from(path)?,
        None => ConfigLoader::load()?,
    };
    let config_path = loader.config_path.clone();
    let mut config = loader.into_config();
    args.apply(&mut config);
    config.validate()?;

    telemetry::init_tracing(&config.logging);
    match config_path {
        Some(path) => debug!("Using configuration from {}", path.display()),
        None => debug!("Using built-in configuration"),
    }
    info!(
        "Running smoke suites against '{}' (timeout {}ms)",
        config.dependency.name, config.runner.timeout_ms
    );

    let runner = Runner::new(config.runner.to_options()?);
    let suites = smoke::suites(ModuleRegistry::global(), config.dependency.name.clone());
    let report = runner.run(suites).await;

    let rendered = report.render(config.runner.reporter)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{rendered}")?;
    stdout.flush()?;

    Ok(report.exit_code())
}
