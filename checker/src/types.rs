//! Checker data types

use std::fmt;
use std::time::Duration;
use url::Url;

use crate::error::CheckerError;

/// Endpoint checked when no override is given
pub const DEFAULT_ENDPOINT: &str = "https://api.abacus.ai/api/v0/listProjects";

/// Environment variable holding the AbacusAI API key
pub const DEFAULT_KEY_NAME: &str = "ABACUSAI_API_KEY";

/// Env file loaded when no override is given
pub const DEFAULT_ENV_FILE: &str = ".env.production";

/// Request timeout applied when no override is given
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// API credential for a single run.
///
/// Never printed in full: `Debug` and `Display` both go through [`ApiKey::masked`].
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw secret, for building the Authorization header only
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// First and last four characters for long keys, `***` otherwise
    pub fn masked(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() > 12 {
            let head: String = chars[..4].iter().collect();
            let tail: String = chars[chars.len() - 4..].iter().collect();
            format!("{head}...{tail}")
        } else {
            "***".to_string()
        }
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&self.masked()).finish()
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

/// Fully built GET request handed to the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRequest {
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub timeout: Duration,
}

impl CheckRequest {
    /// Value of the first header matching `name` (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Transport-level failure categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Request did not complete within the timeout
    Timeout,
    /// DNS failure, connection refused, TLS handshake failure
    Connect,
    /// Invalid request (bad header value or URL) or a failure while in flight
    Request,
    /// The transport itself could not be set up
    Unexpected,
}

/// Failure raised by an [`HttpTransport`](crate::traits::HttpTransport)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl TransportFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Timeout, message)
    }

    pub fn connect(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Connect, message)
    }
}

impl fmt::Display for TransportFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Classified result of one connectivity check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Endpoint answered 200
    Success,
    /// Endpoint answered 401
    AuthFailure,
    /// Endpoint answered with any other status
    HttpFailure(u16),
    /// Network-level failure (DNS, refused connection, timeout)
    TransportError(String),
    /// Anything else that went wrong while checking
    UnexpectedError(String),
    /// The check could not start
    ConfigError(CheckerError),
}

impl Outcome {
    /// Map a response status to an outcome
    pub fn from_status(status: u16) -> Self {
        match status {
            200 => Outcome::Success,
            401 => Outcome::AuthFailure,
            other => Outcome::HttpFailure(other),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }

    /// Process exit code for this outcome
    pub fn exit_code(&self) -> u8 {
        if self.is_success() { 0 } else { 1 }
    }

    /// HTTP status carried by the outcome, when one was received
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Outcome::Success => Some(200),
            Outcome::AuthFailure => Some(401),
            Outcome::HttpFailure(status) => Some(*status),
            _ => None,
        }
    }

    /// Stable label used in JSON reports and logs
    pub fn kind(&self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::AuthFailure => "auth_failure",
            Outcome::HttpFailure(_) => "http_failure",
            Outcome::TransportError(_) => "transport_error",
            Outcome::UnexpectedError(_) => "unexpected_error",
            Outcome::ConfigError(_) => "config_error",
        }
    }

    /// The single human-readable status line
    pub fn status_line(&self) -> String {
        let line = match self {
            Outcome::Success => "OK - AbacusAI API connection successful".to_string(),
            Outcome::AuthFailure => "FAIL - AbacusAI API authentication failed".to_string(),
            Outcome::HttpFailure(status) => {
                format!("FAIL - AbacusAI API returned status code: {status}")
            }
            Outcome::TransportError(message) => {
                format!("FAIL - AbacusAI API request exception: {message}")
            }
            Outcome::UnexpectedError(message) => {
                format!("FAIL - AbacusAI test exception: {message}")
            }
            Outcome::ConfigError(error) => format!("FAIL - {error}"),
        };
        // Error messages from lower layers may span several lines
        line.lines()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.status_line())
    }
}
