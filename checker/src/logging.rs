//! Tracing setup for the checker binary
//!
//! Logs go to stderr. Stdout is reserved for the single status line.

use tracing_subscriber::{EnvFilter, fmt};

/// Default level when `--log-level` is not given
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Filter directives for `log_level`
pub fn filter_directives(log_level: Option<&str>) -> String {
    let base_level = log_level.unwrap_or(DEFAULT_LOG_LEVEL);
    format!("checker={base_level},abacus_check={base_level},reqwest=warn,hyper=warn")
}

/// Initialize tracing subscriber writing to stderr
pub fn init_tracing_with_level(log_level: Option<&str>) {
    let env_filter = filter_directives(log_level);

    // try_init: a subscriber may already be installed (tests)
    let _ = fmt()
        .with_env_filter(EnvFilter::new(&env_filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}
