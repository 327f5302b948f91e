//! Tests for checker services
//!
//! These tests drive the real reqwest transport against a local mock server.


// Re-export test utilities
pub use crate::traits::*;
