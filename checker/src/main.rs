//! abacus-check binary entry point

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use clap::Parser;
use tracing::error;

use checker::{
    CheckReport, CheckerConfig, ConfigOverrides, ConnectivityChecker, Outcome, ReportFormat,
    Reporter, logging,
    services::RealHttpTransport,
    types::{DEFAULT_ENDPOINT, DEFAULT_ENV_FILE, DEFAULT_KEY_NAME},
};

#[derive(Parser)]
#[command(name = "abacus-check")]
#[command(about = "Check connectivity and authentication against the AbacusAI API")]
#[command(version)]
struct Args {
    /// Env file to load before reading the API key
    #[arg(long, default_value = DEFAULT_ENV_FILE)]
    env_file: PathBuf,

    /// Environment variable holding the API key
    #[arg(long, default_value = DEFAULT_KEY_NAME)]
    key_name: String,

    /// Endpoint to check
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    /// Status line format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Log level for stderr diagnostics (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    logging::init_tracing_with_level(args.log_level.as_deref());

    let overrides = ConfigOverrides {
        env_file: args.env_file,
        key_name: args.key_name,
        endpoint: args.endpoint,
        timeout_secs: args.timeout_secs,
    };

    let started = Instant::now();
    let outcome = match CheckerConfig::load(&overrides) {
        Ok(config) => match RealHttpTransport::try_new() {
            Ok(transport) => ConnectivityChecker::new(config, transport).run().await,
            Err(failure) => Outcome::UnexpectedError(failure.message),
        },
        Err(e) => Outcome::ConfigError(e),
    };

    let report = CheckReport::new(&outcome, &overrides.endpoint, started.elapsed());
    let reporter = Reporter::new(args.format);
    if let Err(e) = reporter.report(&report, &mut std::io::stdout().lock()) {
        error!("Failed to write status line: {}", e);
    }

    ExitCode::from(outcome.exit_code())
}
