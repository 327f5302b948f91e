//! reqwest-backed HTTP transport

use std::error::Error as StdError;
use async_trait::async_trait;
use tracing::debug;

use crate::traits::HttpTransport;
use crate::types::{CheckRequest, FailureKind, TransportFailure};

/// Real transport sending requests over the network
pub struct RealHttpTransport {
    client: reqwest::Client,
}

impl RealHttpTransport {
    /// Create new transport, reporting client construction failures
    pub fn try_new() -> Result<Self, TransportFailure> {
        reqwest::Client::builder()
            .build()
            .map(Self::with_client)
            .map_err(|e| TransportFailure::new(FailureKind::Unexpected, describe(&e)))
    }

    /// Create new transport around an existing client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Map a reqwest error onto a transport failure
    fn classify(error: &reqwest::Error) -> TransportFailure {
        let kind = if error.is_timeout() {
            FailureKind::Timeout
        } else if error.is_connect() {
            FailureKind::Connect
        } else {
            FailureKind::Request
        };
        TransportFailure::new(kind, describe(error))
    }
}

#[async_trait]
impl HttpTransport for RealHttpTransport {
    async fn get(&self, request: &CheckRequest) -> Result<u16, TransportFailure> {
        let mut builder = self
            .client
            .get(request.url.clone())
            .timeout(request.timeout);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send().await.map_err(|e| {
            let failure = Self::classify(&e);
            debug!("Request to {} failed ({:?}): {}", request.url, failure.kind, failure.message);
            failure
        })?;

        // Dropping the response without reading the body releases the connection
        Ok(response.status().as_u16())
    }
}

/// Error message including its source chain, on one line
fn describe(error: &(dyn StdError + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
