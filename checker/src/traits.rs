//! Checker trait definitions for dependency injection

use async_trait::async_trait;

use crate::types::{CheckRequest, TransportFailure};

/// HTTP transport used to send the check request
#[mockall::automock]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send a GET request and return the response status code.
    ///
    /// The response body is never read.
    async fn get(&self, request: &CheckRequest) -> Result<u16, TransportFailure>;
}
