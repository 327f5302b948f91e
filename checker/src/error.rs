//! Checker error types

use thiserror::Error;

/// Result type for checker operations
pub type CheckerResult<T> = Result<T, CheckerError>;

/// Configuration problems that stop a check before any request is sent
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckerError {
    #[error("Missing AbacusAI API key")]
    MissingCredential { key_name: String },

    #[error("AbacusAI API key in {key_name} is not valid Unicode")]
    NonUnicodeCredential { key_name: String },

    #[error("Invalid endpoint URL '{url}': {message}")]
    InvalidEndpoint { url: String, message: String },

    #[error("Invalid timeout: {message}")]
    InvalidTimeout { message: String },
}
