//! Checker configuration
//!
//! Configuration is read once at startup and handed to the checker as a plain
//! struct. Nothing downstream reads the process environment.
//!
//! ## Configuration Sources
//! The API key is looked up in:
//! 1. The process environment
//! 2. The env file (`.env.production` unless overridden)
//!
//! Process environment values take precedence over env file values. The env
//! file is only read, never applied to the process environment.

use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::error::{CheckerError, CheckerResult};
use crate::types::{ApiKey, DEFAULT_ENDPOINT, DEFAULT_ENV_FILE, DEFAULT_KEY_NAME, DEFAULT_TIMEOUT};

/// Startup overrides, normally taken from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub env_file: PathBuf,
    pub key_name: String,
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for ConfigOverrides {
    fn default() -> Self {
        Self {
            env_file: PathBuf::from(DEFAULT_ENV_FILE),
            key_name: DEFAULT_KEY_NAME.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

/// Everything the checker needs for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerConfig {
    /// Name of the variable the credential was read from
    pub key_name: String,
    /// Credential as found; emptiness is checked by the checker
    pub credential: Option<ApiKey>,
    pub endpoint: Url,
    pub timeout: Duration,
}

impl CheckerConfig {
    /// Build a config directly, bypassing any environment lookup
    pub fn new(credential: Option<ApiKey>, endpoint: Url, timeout: Duration) -> Self {
        Self {
            key_name: DEFAULT_KEY_NAME.to_string(),
            credential,
            endpoint,
            timeout,
        }
    }

    /// Read the credential from the process environment, falling back to the env file
    pub fn load(overrides: &ConfigOverrides) -> CheckerResult<Self> {
        let file_vars = load_env_file(&overrides.env_file);
        Self::from_lookup(overrides, |name| {
            std::env::var_os(name).or_else(|| file_vars.get(name).map(OsString::from))
        })
    }

    /// Build the config using `lookup` to resolve the credential
    pub fn from_lookup<F>(overrides: &ConfigOverrides, lookup: F) -> CheckerResult<Self>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let endpoint = parse_endpoint(&overrides.endpoint)?;

        if overrides.timeout_secs == 0 {
            return Err(CheckerError::InvalidTimeout {
                message: "timeout must be at least one second".to_string(),
            });
        }

        let credential = match lookup(&overrides.key_name) {
            Some(raw) => {
                let value = raw.into_string().map_err(|_| CheckerError::NonUnicodeCredential {
                    key_name: overrides.key_name.clone(),
                })?;
                Some(ApiKey::new(value))
            }
            None => None,
        };
        match &credential {
            Some(key) => debug!("Found {} ({})", overrides.key_name, key),
            None => debug!("{} is not set", overrides.key_name),
        }

        Ok(Self {
            key_name: overrides.key_name.clone(),
            credential,
            endpoint,
            timeout: Duration::from_secs(overrides.timeout_secs),
        })
    }
}

/// Read variables from the env file at `path`.
///
/// Nothing is written to the process environment. A missing file yields no
/// variables; unreadable files and lines that fail to parse are logged and skipped.
pub fn load_env_file(path: &Path) -> HashMap<String, String> {
    let mut vars = HashMap::new();

    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) if e.not_found() => {
            debug!("Env file {} not found, using process environment only", path.display());
            return vars;
        }
        Err(e) => {
            warn!("Could not read env file {}: {}", path.display(), e);
            return vars;
        }
    };

    for item in iter {
        match item {
            Ok((key, value)) => {
                vars.insert(key, value);
            }
            Err(e) => warn!("Skipping invalid line in env file {}: {}", path.display(), e),
        }
    }

    debug!("Loaded {} variable(s) from env file {}", vars.len(), path.display());
    vars
}

fn parse_endpoint(raw: &str) -> CheckerResult<Url> {
    let url = Url::parse(raw).map_err(|e| CheckerError::InvalidEndpoint {
        url: raw.to_string(),
        message: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(CheckerError::InvalidEndpoint {
            url: raw.to_string(),
            message: format!("unsupported scheme '{other}'"),
        }),
    }
}
