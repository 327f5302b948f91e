//! Common test utilities and fixtures
//!
//! Shared helpers used across the checker integration test suites.

#![allow(dead_code)] // Not every suite uses every helper

use std::time::Duration;
use url::Url;

use checker::{ApiKey, CheckReport, CheckerConfig, MockHttpTransport, Outcome, ReportFormat, Reporter};
use checker::types::DEFAULT_ENDPOINT;

pub const TEST_KEY: &str = "abacus-test-key-0123456789";

/// Config pointing at the default endpoint with the given credential
pub fn config_with_key(key: Option<&str>) -> CheckerConfig {
    CheckerConfig::new(
        key.map(ApiKey::new),
        Url::parse(DEFAULT_ENDPOINT).unwrap(),
        Duration::from_secs(10),
    )
}

/// Config pointing at `base_url` + the listProjects path
pub fn config_for_server(base_url: &str, key: Option<&str>, timeout: Duration) -> CheckerConfig {
    CheckerConfig::new(
        key.map(ApiKey::new),
        Url::parse(&format!("{base_url}/api/v0/listProjects")).unwrap(),
        timeout,
    )
}

/// Transport expecting exactly one request, answering with `status`
pub fn transport_returning(status: u16) -> MockHttpTransport {
    let mut transport = MockHttpTransport::new();
    transport.expect_get().times(1).returning(move |_| Ok(status));
    transport
}

/// Transport that must never be called
pub fn transport_never_called() -> MockHttpTransport {
    let mut transport = MockHttpTransport::new();
    transport.expect_get().never();
    transport
}

/// Render an outcome the way the binary does and return what was written
pub fn render(outcome: &Outcome, format: ReportFormat) -> String {
    let report = CheckReport::new(outcome, DEFAULT_ENDPOINT, Duration::from_millis(1));
    let mut out = Vec::new();
    Reporter::new(format).report(&report, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}
