//! Status line reporting
//!
//! Every run writes exactly one line to stdout, whatever the outcome.

use std::io::{self, Write};
use std::time::Duration;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::types::Outcome;

/// Output format for the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// `OK - ...` / `FAIL - ...`
    #[default]
    Text,
    /// One compact JSON object
    Json,
}

/// Serializable summary of one run
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub status: &'static str,
    pub outcome: &'static str,
    pub http_status: Option<u16>,
    pub message: String,
    pub endpoint: String,
    pub elapsed_ms: u64,
    pub checked_at: DateTime<Utc>,
}

impl CheckReport {
    pub fn new(outcome: &Outcome, endpoint: &str, elapsed: Duration) -> Self {
        Self {
            status: if outcome.is_success() { "ok" } else { "fail" },
            outcome: outcome.kind(),
            http_status: outcome.http_status(),
            message: outcome.status_line(),
            endpoint: endpoint.to_string(),
            elapsed_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            checked_at: Utc::now(),
        }
    }
}

/// Writes the status line in the selected format
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Render the report without a trailing newline
    pub fn render(&self, report: &CheckReport) -> io::Result<String> {
        match self.format {
            ReportFormat::Text => Ok(report.message.clone()),
            ReportFormat::Json => serde_json::to_string(report).map_err(io::Error::other),
        }
    }

    /// Write exactly one line to `out`
    pub fn report<W: Write>(&self, report: &CheckReport, out: &mut W) -> io::Result<()> {
        let line = self.render(report)?;
        writeln!(out, "{line}")?;
        out.flush()
    }
}
