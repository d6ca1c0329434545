//! Core error types for mastertouch-core.
//!
//! The engine itself is total -- pure lookups and arithmetic with no
//! failure modes. The only fallible surface is loading raw session
//! exports at the store boundary.

use thiserror::Error;

/// Core error type for mastertouch-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Session export could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Session export could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
