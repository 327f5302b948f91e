//! Checker library for AbacusAI connectivity checks
//!
//! This library loads an API key, sends one authenticated GET request to the
//! AbacusAI API and classifies the response into an [`Outcome`].

pub mod error;
pub mod types;
pub mod traits;
pub mod config;
pub mod checker_impl;
pub mod services;
pub mod report;
pub mod logging;

// Re-export main types
pub use error::{CheckerError, CheckerResult};
pub use types::*;
pub use traits::*;
pub use config::{CheckerConfig, ConfigOverrides};
pub use checker_impl::ConnectivityChecker;
pub use services::*;
pub use report::{CheckReport, ReportFormat, Reporter};
