//! Connectivity checker with dependency injection

use tracing::{debug, info};

use crate::config::CheckerConfig;
use crate::error::CheckerError;
use crate::traits::HttpTransport;
use crate::types::{ApiKey, CheckRequest, FailureKind, Outcome};

/// Runs one authenticated GET against the configured endpoint
pub struct ConnectivityChecker<T>
where
    T: HttpTransport,
{
    pub config: CheckerConfig,
    pub transport: T,
}

impl<T> ConnectivityChecker<T>
where
    T: HttpTransport,
{
    /// Create new checker instance
    pub fn new(config: CheckerConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// Build the check request for `credential`
    pub fn build_request(&self, credential: &ApiKey) -> CheckRequest {
        CheckRequest {
            url: self.config.endpoint.clone(),
            headers: vec![
                (
                    "Authorization".to_string(),
                    format!("Bearer {}", credential.expose()),
                ),
                ("Content-Type".to_string(), "application/json".to_string()),
            ],
            timeout: self.config.timeout,
        }
    }

    /// Perform the check and classify the result.
    ///
    /// Never fails: every error is folded into the returned [`Outcome`].
    pub async fn check(&self) -> Outcome {
        let credential = match &self.config.credential {
            Some(key) if !key.is_empty() => key,
            _ => {
                debug!("No credential available, skipping request");
                return Outcome::ConfigError(CheckerError::MissingCredential {
                    key_name: self.config.key_name.clone(),
                });
            }
        };

        info!("Testing AbacusAI API connection...");
        let request = self.build_request(credential);
        debug!(
            "GET {} with key {} (timeout {:?})",
            request.url, credential, request.timeout
        );

        let outcome = match self.transport.get(&request).await {
            Ok(status) => {
                info!("AbacusAI API responded with status {}", status);
                Outcome::from_status(status)
            }
            Err(failure) => match failure.kind {
                FailureKind::Timeout | FailureKind::Connect | FailureKind::Request => {
                    Outcome::TransportError(failure.message)
                }
                FailureKind::Unexpected => Outcome::UnexpectedError(failure.message),
            },
        };

        debug!("Check classified as {}", outcome.kind());
        outcome
    }
}

impl<T> ConnectivityChecker<T>
where
    T: HttpTransport + 'static,
{
    /// Run the check on its own task so a panic becomes an outcome
    pub async fn run(self) -> Outcome {
        let handle = tokio::spawn(async move { self.check().await });

        match handle.await {
            Ok(outcome) => outcome,
            Err(e) => Outcome::UnexpectedError(format!("check task failed: {e}")),
        }
    }
}
